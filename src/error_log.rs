use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::LOG_TIMESTAMP_FORMAT;

/// Append-only text log of skipped and failed photos.
///
/// Lines look like `[2024-05-01 12:00:00] ERROR: /photos/a.jpg - No GPS data found`.
/// Writing never fails the caller.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `tag` is a photo path or a batch-level tag such as `PROCESSING`.
    pub fn log(&self, tag: &str, message: &str) {
        let line = format!(
            "[{}] ERROR: {} - {}",
            Local::now().format(LOG_TIMESTAMP_FORMAT),
            tag,
            message
        );
        if let Err(e) = append_line(&self.path, &line) {
            warn!("Could not write to {}: {}", self.path.display(), e);
        }
    }
}

/// Opens `path` for append, writes one line and closes it again.
pub(crate) fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    file.flush()
}
