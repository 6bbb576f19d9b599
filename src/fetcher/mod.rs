mod ureq_fetcher;

pub use ureq_fetcher::UreqFetcher;

#[cfg(test)]
mod mock_fetcher;

#[cfg(test)]
pub use mock_fetcher::MockFetcher;

use crate::error::Error;

/// Outcome of one HTTP GET, with the body fully read into memory.
#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    InvalidBody,
    NotFound,
    NetworkError,
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn network_error() -> Self {
        Self::NetworkError
    }

    /// Unwraps the body, mapping every failure variant onto [`Error::Fetch`].
    pub fn into_body(self, url: &str) -> Result<Vec<u8>, Error> {
        match self {
            Self::Ok(body) => Ok(body),
            Self::NotFound => Err(Error::fetch(url, "resource not found")),
            Self::NetworkError => Err(Error::fetch(url, "network error")),
            Self::InvalidBody => Err(Error::fetch(url, "unreadable response body")),
        }
    }
}

/// Transport seam: the orchestrator owns one fetcher and injects it
/// into the inspector and the downloader, so tests can substitute a
/// scripted implementation.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Response;
}
