pub mod cli;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod gallery;
pub mod inspector;
pub mod logging;
pub mod run;

pub use downloader::Downloader;
pub use error::Error;
pub use fetcher::{Fetcher, Response, UreqFetcher};
pub use gallery::GalleryRef;
