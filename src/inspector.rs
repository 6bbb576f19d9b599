use scraper::{Html, Selector};
use tracing::debug;

use crate::error::Error;
use crate::fetcher::Fetcher;

/// One thumbnail container per image on the gallery page.
const THUMB_SELECTOR: &str = "div.thumb-container";

/// Fetches the gallery page once and counts its thumbnail markers.
///
/// Zero matches is an error even when the request succeeded: an empty
/// gallery means either an invalid gallery or a markup change on the
/// target site, and the run cannot proceed.
pub fn count_images<F: Fetcher>(fetcher: &F, url: &str) -> Result<usize, Error> {
    let body = fetcher.fetch(url).into_body(url)?;

    let html = String::from_utf8_lossy(&body);
    let document = Html::parse_document(&html);

    // Static pattern, safe to panic on.
    let selector = Selector::parse(THUMB_SELECTOR).expect("thumbnail selector is valid");

    let count = document.select(&selector).count();
    debug!(url, count, "inspected gallery");

    if count == 0 {
        return Err(Error::NoImagesFound);
    }

    Ok(count)
}
