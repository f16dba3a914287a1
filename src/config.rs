// Server configuration, read from the environment.

use std::path::PathBuf;

use crate::input::DEFAULT_MAX_BYTES;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Uploads are staged here while they are being summarized.
    pub tmp_dir: PathBuf,
    pub max_upload_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            tmp_dir: PathBuf::from("tmp"),
            max_upload_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl ServerConfig {
    /// `PORT`, `STUDYGENIE_TMP_DIR` and `STUDYGENIE_MAX_UPLOAD_MB`; anything
    /// missing or unparsable keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let tmp_dir = lookup("STUDYGENIE_TMP_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.tmp_dir);

        let max_upload_bytes = lookup("STUDYGENIE_MAX_UPLOAD_MB")
            .and_then(|mb| mb.parse::<u64>().ok())
            .and_then(|mb| mb.checked_mul(1024 * 1024))
            .unwrap_or(defaults.max_upload_bytes);

        Self {
            port,
            tmp_dir,
            max_upload_bytes,
        }
    }
}
