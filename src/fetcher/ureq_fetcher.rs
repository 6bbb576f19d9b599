use std::io::Read;

use tracing::debug;
use ureq::Error::Status;

use super::{Fetcher, Response};

/// Blocking HTTP fetcher backed by `ureq`.
///
/// No explicit timeout is configured; the transport default applies.
/// Reading the body to completion releases the underlying connection.
pub struct UreqFetcher;

impl Fetcher for UreqFetcher {
    fn fetch(&self, url: &str) -> Response {
        debug!(url, "GET");

        let response = ureq::request("GET", url).call();

        match response {
            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::invalid_body();
                };

                Response::ok(body)
            }

            Err(Status(404, _)) => Response::not_found(),

            Err(err) => {
                debug!(url, error = %err, "request failed");
                Response::network_error()
            }
        }
    }
}

impl UreqFetcher {
    pub fn new() -> Self {
        UreqFetcher
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
