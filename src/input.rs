// Document loading and upload validation. Only plain text reaches the engine.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::InputError;

pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

pub const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "text"];

/// Text extensions pass; known document formats get their own rejection message.
fn check_extension(path: &Path) -> Result<(), InputError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        e if TEXT_EXTENSIONS.contains(&e) => Ok(()),
        "pdf" => Err(InputError::Disabled("PDF")),
        "docx" => Err(InputError::Disabled("DOCX")),
        "doc" => Err(InputError::LegacyDoc),
        _ => Err(InputError::UnsupportedType),
    }
}

/// Parameters such as `; charset=utf-8` are ignored.
fn check_mime(content_type: &str) -> Result<(), InputError> {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    if essence.eq_ignore_ascii_case("text/plain") {
        Ok(())
    } else {
        Err(InputError::InvalidMime)
    }
}

fn check_size(size: u64, max_bytes: u64) -> Result<(), InputError> {
    if size > max_bytes {
        return Err(InputError::TooLarge {
            limit_mb: max_bytes / (1024 * 1024),
        });
    }
    Ok(())
}

/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn read_document(path: &Path, max_bytes: u64) -> Result<String, InputError> {
    check_extension(path)?;
    let mut file = File::open(path)?;
    check_size(file.metadata()?.len(), max_bytes)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(decode_text(&bytes))
}

/// Validate an uploaded file before anything is written to disk.
pub fn validate_upload(content_type: &str, size: u64, max_bytes: u64) -> Result<(), InputError> {
    check_mime(content_type)?;
    check_size(size, max_bytes)
}
