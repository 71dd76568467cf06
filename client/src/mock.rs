//! In-memory [`DexSource`] for tests and offline demos.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::source::DexSource;

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
    Failure(String),
}

#[derive(Debug, Clone)]
struct MockRoute {
    response: MockResponse,
    delay: Option<Duration>,
}

/// Mock source answering from a fixed URL table.
///
/// Unknown URLs answer 404. Every request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    routes: Arc<Mutex<HashMap<String, MockRoute>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a 200 and `body`
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.route(url, MockResponse::Body(body.into()))
    }

    /// Answer `url` with an HTTP error status
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.route(url, MockResponse::Status(status))
    }

    /// Fail `url` at the transport level
    pub fn with_failure(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.route(url, MockResponse::Failure(message.into()))
    }

    /// Delay the answer for an already registered `url`
    pub fn with_delay(self, url: &str, delay: Duration) -> Self {
        if let Some(route) = lock(&self.routes).get_mut(url) {
            route.delay = Some(delay);
        }
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn route(self, url: impl Into<String>, response: MockResponse) -> Self {
        lock(&self.routes).insert(
            url.into(),
            MockRoute {
                response,
                delay: None,
            },
        );
        self
    }
}

#[async_trait]
impl DexSource for MockSource {
    async fn get(&self, url: &str) -> Result<String, SourceError> {
        lock(&self.requests).push(url.to_string());
        let route = lock(&self.routes).get(url).cloned();

        let Some(route) = route else {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: 404,
            });
        };

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match route.response {
            MockResponse::Body(body) => Ok(body),
            MockResponse::Status(status) => Err(SourceError::Status {
                url: url.to_string(),
                status,
            }),
            MockResponse::Failure(message) => Err(SourceError::Transport {
                url: url.to_string(),
                source: message.into(),
            }),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
