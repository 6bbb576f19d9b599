use std::cell::RefCell;

use super::{Fetcher, Response};

/// Scripted fetcher for tests. Responses are consumed front to back;
/// once the script runs out every call reports a network error. Each
/// requested URL is recorded so tests can assert attempt counts.
pub struct MockFetcher {
    responses: RefCell<Vec<Response>>,
    requests: RefCell<Vec<String>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Response {
        self.requests.borrow_mut().push(url.to_string());

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error()
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}
