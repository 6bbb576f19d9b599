//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Sequential image gallery downloader.
///
/// Counts the images on a gallery page, then downloads them one by one
/// into the current directory, retrying failed images indefinitely.
#[derive(Parser, Debug)]
#[command(name = "gallery-downloader")]
#[command(author, version, about)]
pub struct Args {
    /// Gallery page URL, e.g. https://i9i9.to/c/12345
    pub url: String,

    /// Interval between each download in seconds (0 or negative disables the wait)
    #[arg(long, default_value_t = 1.0)]
    pub interval: f64,
}
