use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::downloader::Downloader;
use crate::error::Error;
use crate::fetcher::Fetcher;
use crate::gallery::GalleryRef;
use crate::inspector;

/// Drives one full gallery download.
///
/// Inspection errors propagate and abort the run. Inside the loop a
/// failed download is reported and the same index is retried without
/// limit or backoff; a permanently missing image therefore loops
/// forever. The interval sleep happens after every iteration, success
/// or failure, unless `interval <= 0`.
pub fn run<F: Fetcher>(
    fetcher: &F,
    gallery: &GalleryRef,
    interval: f64,
    out_dir: &Path,
) -> Result<(), Error> {
    print!("Scraping {}...", gallery.url());
    io::stdout().flush().ok();

    let count = inspector::count_images(fetcher, gallery.url())?;
    println!("done");
    println!("Found {count} images.");
    info!(id = gallery.id(), count, "gallery inspected");

    let downloader = Downloader::new(out_dir, fetcher);

    let mut index = 1;
    while index <= count {
        let image_url = gallery.image_url(index);
        print!("Downloading {image_url}...");
        io::stdout().flush().ok();

        match downloader.download(&image_url) {
            Ok(path) => {
                println!("done");
                debug!(index, path = %path.display(), "downloaded");
                index += 1;
            }
            Err(err) => {
                println!("{err}");
                println!("Retry...");
            }
        }

        if interval > 0.0 {
            print!("Waiting for {interval} seconds...");
            io::stdout().flush().ok();
            thread::sleep(Duration::from_secs_f64(interval));
            println!("OK.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Instant;

    use super::run;
    use crate::error::Error;
    use crate::fetcher::{MockFetcher, Response};
    use crate::gallery::GalleryRef;

    fn gallery_page(thumbs: usize) -> Response {
        let body = "<div class=\"thumb-container\"></div>".repeat(thumbs);
        Response::ok(body.into_bytes())
    }

    #[test]
    fn test_downloads_every_image_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/42").unwrap();
        let fetcher = MockFetcher::new(vec![
            gallery_page(3),
            Response::ok(b"one".to_vec()),
            Response::ok(b"two".to_vec()),
            Response::ok(b"three".to_vec()),
        ]);

        run(&fetcher, &gallery, 0.0, dir.path()).unwrap();

        assert_eq!(fs::read(dir.path().join("1.jpg")).unwrap(), b"one");
        assert_eq!(fs::read(dir.path().join("2.jpg")).unwrap(), b"two");
        assert_eq!(fs::read(dir.path().join("3.jpg")).unwrap(), b"three");

        assert_eq!(
            fetcher.requests(),
            vec![
                "https://i9i9.to/c/42",
                "https://i.i9i9.to/image/42/1.jpg",
                "https://i.i9i9.to/image/42/2.jpg",
                "https://i.i9i9.to/image/42/3.jpg",
            ]
        );
    }

    #[test]
    fn test_failed_index_is_retried_until_it_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/7").unwrap();
        let fetcher = MockFetcher::new(vec![
            gallery_page(1),
            Response::network_error(),
            Response::not_found(),
            Response::ok(b"finally".to_vec()),
        ]);

        run(&fetcher, &gallery, 0.0, dir.path()).unwrap();

        assert_eq!(fs::read(dir.path().join("1.jpg")).unwrap(), b"finally");

        // Three attempts hit the same image URL; the index never advanced early.
        let image_url = "https://i.i9i9.to/image/7/1.jpg";
        let attempts = fetcher
            .requests()
            .iter()
            .filter(|url| url.as_str() == image_url)
            .count();
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_inspection_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/42").unwrap();
        let fetcher = MockFetcher::new(vec![Response::network_error()]);

        let err = run(&fetcher, &gallery, 0.0, dir.path()).unwrap_err();

        assert!(matches!(err, Error::Fetch { .. }));
        // The run stopped before any image request.
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[test]
    fn test_empty_gallery_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/42").unwrap();
        let fetcher = MockFetcher::new(vec![gallery_page(0)]);

        let err = run(&fetcher, &gallery, 0.0, dir.path()).unwrap_err();

        assert!(matches!(err, Error::NoImagesFound));
    }

    #[test]
    fn test_zero_interval_does_not_sleep() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/42").unwrap();
        let fetcher = MockFetcher::new(vec![
            gallery_page(2),
            Response::ok(b"a".to_vec()),
            Response::ok(b"b".to_vec()),
        ]);

        let started = Instant::now();
        run(&fetcher, &gallery, 0.0, dir.path()).unwrap();

        // Two iterations with a default interval would sleep two
        // seconds; without sleeping this finishes almost instantly.
        assert!(started.elapsed().as_millis() < 500);
    }

    #[test]
    fn test_negative_interval_is_treated_as_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = GalleryRef::parse("https://i9i9.to/c/42").unwrap();
        let fetcher = MockFetcher::new(vec![gallery_page(1), Response::ok(b"a".to_vec())]);

        let started = Instant::now();
        run(&fetcher, &gallery, -1.0, dir.path()).unwrap();

        assert!(started.elapsed().as_millis() < 500);
    }
}
