use std::path::PathBuf;

use thiserror::Error;

/// Failures the downloader can hit.
///
/// Whether a variant is fatal depends on where it surfaces: anything
/// raised before or during gallery inspection aborts the run, while
/// errors inside the download loop are reported and the same index is
/// retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid gallery URL: {0}")]
    InvalidUrl(String),

    #[error("fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("no images found in gallery")]
    NoImagesFound,

    #[error("filename not found in {0}")]
    FilenameNotFound(String),

    #[error("writing {} failed: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub fn fetch(url: &str, reason: &str) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
