use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a run.
///
/// Cloudflare-analytics failures never appear here -- the fetcher
/// absorbs them into a warning plus an omitted report section.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The target path does not exist on the filesystem.
    #[error("Path not found: {}", .path.display())]
    PathNotFound { path: PathBuf },

    /// A directory or file could not be read during measurement.
    #[error("Failed to read {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report (or its destination directory) could not be written.
    #[error("Failed to write report at {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
