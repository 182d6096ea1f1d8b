use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::debug;

use crate::error::RequestFailure;
use crate::metrics::RequestRecord;

/// What every request of a run is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    url: String,
    timeout: Option<Duration>,
}

impl RequestTarget {
    #[must_use]
    pub const fn new(url: String, timeout: Option<Duration>) -> Self {
        Self { url, timeout }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Sends one GET and reports how it went. Never fails: errors are data.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, target: &RequestTarget) -> RequestRecord;
}

#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, target: &RequestTarget) -> RequestRecord {
        let url = match Url::parse(target.url()) {
            Ok(url) => url,
            Err(err) => {
                return RequestRecord::failure(
                    RequestFailure::InvalidUrl {
                        url: target.url().to_owned(),
                        source: err,
                    },
                    Duration::ZERO,
                );
            }
        };

        let mut request_builder = self.client.get(url);
        if let Some(timeout) = target.timeout() {
            request_builder = request_builder.timeout(timeout);
        }
        let request = match request_builder.build() {
            Ok(req) => req,
            Err(err) => {
                return RequestRecord::failure(
                    RequestFailure::BuildRequest { source: err },
                    Duration::ZERO,
                );
            }
        };

        let start = Instant::now();
        match self.client.execute(request).await {
            Ok(response) => {
                let latency = start.elapsed();
                let status = response.status().as_u16();
                // Drain so the connection goes back to the pool.
                if let Err(err) = response.bytes().await {
                    debug!("Failed to read response body: {}", err);
                }
                RequestRecord::response(status, latency)
            }
            Err(err) => {
                RequestRecord::failure(RequestFailure::Transport { source: err }, start.elapsed())
            }
        }
    }
}
