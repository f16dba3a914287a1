// StudyGenie: heuristic study summaries for plain-text documents, from the CLI or over HTTP.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::info;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

mod config;
mod error;
mod input;
mod nlp;
mod server;

use config::ServerConfig;
use input::{read_document, DEFAULT_MAX_BYTES, TEXT_EXTENSIONS};
use nlp::{summarize, SummaryMode};

#[derive(Parser)]
#[command(name = "studygenie", about = "Study summaries for plain-text notes (local, heuristic)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single text file.
    Summarize {
        #[arg(short, long)]
        file: PathBuf,
        /// Print the summary with its full analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Summarize every text file under a directory.
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        #[arg(short, long, default_value = "studygenie_summaries.json")]
        out: PathBuf,
    },
    /// Run the HTTP upload service.
    Serve {
        /// Overrides the PORT environment variable.
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Serialize, Deserialize, Debug)]
struct BatchEntry {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<SummaryMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_mode_banner(mode: SummaryMode) -> Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let (color, label) = match mode {
        SummaryMode::Full => (Color::Green, "full analysis"),
        SummaryMode::Fallback => (Color::Yellow, "fallback summary (full analysis failed)"),
    };
    stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(stderr, "StudyGenie: {}", label)?;
    stderr.reset()?;
    Ok(())
}

fn summarize_file(file: &Path, json: bool) -> Result<()> {
    let text = read_document(file, DEFAULT_MAX_BYTES)?;
    let summary = summarize(&text)?;

    print_mode_banner(summary.mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.report);
    }
    Ok(())
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| TEXT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn summarize_entry(path: &Path) -> BatchEntry {
    let result = read_document(path, DEFAULT_MAX_BYTES)
        .map_err(|e| anyhow!(e))
        .and_then(|text| summarize(&text).map_err(|e| anyhow!(e)));

    let path = path.to_string_lossy().to_string();
    match result {
        Ok(summary) => BatchEntry {
            path,
            mode: Some(summary.mode),
            report: Some(summary.report),
            error: None,
        },
        Err(e) => BatchEntry {
            path,
            mode: None,
            report: None,
            error: Some(e.to_string()),
        },
    }
}

fn batch_dir(dir: &Path, out: &Path) -> Result<()> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_text_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let entries: Vec<BatchEntry> = files
        .par_iter()
        .map(|p| {
            let entry = summarize_entry(p);
            pb.inc(1);
            entry
        })
        .collect();

    pb.finish_with_message("summarized files");

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    let fout = File::create(out)?;
    serde_json::to_writer_pretty(fout, &entries)?;
    info!(files = entries.len(), failed, "wrote summaries to {}", out.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summarize { file, json } => summarize_file(&file, json)?,
        Commands::Batch { dir, out } => batch_dir(&dir, &out)?,
        Commands::Serve { port } => {
            let mut config = ServerConfig::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file(Path::new("notes.txt")));
        assert!(is_text_file(Path::new("README.MD")));
        assert!(!is_text_file(Path::new("paper.pdf")));
        assert!(!is_text_file(Path::new("no_extension")));
    }

    #[test]
    fn test_summarize_entry_success() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("bio.txt");
        std::fs::write(&path, "Osmosis is the movement of water across a membrane.")?;

        let entry = summarize_entry(&path);
        assert_eq!(entry.mode, Some(SummaryMode::Full));
        assert!(entry.report.unwrap().contains("Osmosis"));
        assert!(entry.error.is_none());
        Ok(())
    }

    #[test]
    fn test_summarize_entry_empty_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "")?;

        let entry = summarize_entry(&path);
        assert!(entry.report.is_none());
        assert_eq!(entry.error.as_deref(), Some("No text could be extracted from the file"));
        Ok(())
    }

    #[test]
    fn test_batch_dir_writes_entries() -> Result<()> {
        let dir = TempDir::new()?;
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested)?;
        std::fs::write(dir.path().join("a.txt"), "Entropy measures disorder in a system.")?;
        std::fs::write(nested.join("b.md"), "Evolution explains the diversity of life.")?;
        std::fs::write(dir.path().join("c.txt"), "   ")?;
        std::fs::write(dir.path().join("skip.pdf"), b"%PDF-1.4")?;

        let out = dir.path().join("out.json");
        batch_dir(dir.path(), &out)?;

        let entries: Vec<BatchEntry> = serde_json::from_reader(File::open(&out)?)?;
        assert_eq!(entries.len(), 3);
        assert!(entries[0].path.ends_with("a.txt"));
        assert!(entries[1].path.ends_with("c.txt"));
        assert!(entries[1].error.is_some());
        assert!(entries[2].path.ends_with("b.md"));
        assert_eq!(entries[2].mode, Some(SummaryMode::Full));
        Ok(())
    }

    #[test]
    fn test_batch_dir_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let out = dir.path().join("out.json");
        batch_dir(dir.path(), &out)?;
        let entries: Vec<BatchEntry> = serde_json::from_reader(File::open(&out)?)?;
        assert!(entries.is_empty());
        Ok(())
    }
}
