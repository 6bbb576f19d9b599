use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::gallery;

/// Downloads a single image into a target directory, named after the
/// final path segment of its URL.
pub struct Downloader<'a, F: Fetcher> {
    fetcher: &'a F,
    dir: PathBuf,
}

impl<'a, F: Fetcher> Downloader<'a, F> {
    pub fn new(dir: impl Into<PathBuf>, fetcher: &'a F) -> Self {
        Self {
            fetcher,
            dir: dir.into(),
        }
    }

    /// Fetches `url` and writes the body to `<dir>/<filename>`.
    ///
    /// The destination is opened with create + write and no truncate:
    /// an existing file is overwritten from offset 0, and a shorter
    /// body leaves the previous tail bytes in place. A failed write may
    /// leave a partial file behind; nothing is rolled back.
    pub fn download(&self, url: &str) -> Result<PathBuf, Error> {
        let file_name = gallery::file_name_of(url)?;

        let body = self.fetcher.fetch(url).into_body(url)?;

        let path = self.dir.join(file_name);
        let file_error = |source| Error::File {
            path: path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&path)
            .map_err(file_error)?;

        file.write_all(&body).map_err(file_error)?;
        debug!(url, path = %path.display(), bytes = body.len(), "wrote image");

        Ok(path)
    }
}
