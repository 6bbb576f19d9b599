use std::process;

use clap::Parser;

use gallery_downloader::cli::Args;
use gallery_downloader::{logging, run, GalleryRef, UreqFetcher};

fn main() {
    logging::init();

    let args = Args::parse();

    let gallery = match GalleryRef::parse(&args.url) {
        Ok(gallery) => gallery,
        Err(err) => fatal(&err),
    };

    let out_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => fatal(&err),
    };

    let fetcher = UreqFetcher::new();

    if let Err(err) = run::run(&fetcher, &gallery, args.interval, &out_dir) {
        fatal(&err);
    }
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    eprintln!("gallery-downloader error: {err}");
    process::exit(1);
}
