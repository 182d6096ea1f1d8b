use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::ValidationError;

/// Upper bound on the number of requests a single run may send.
pub const MAX_REQUEST_COUNT: usize = 10_000;

/// Scheme prefix every target URL must start with.
const URL_PREFIX: &str = "http";

/// Immutable input of one load test run.
///
/// Only constructible through [`LoadTestConfig::new`], so a value in hand
/// always satisfies `1 <= concurrency <= request_count <= MAX_REQUEST_COUNT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    target_url: String,
    request_count: NonZeroUsize,
    concurrency: NonZeroUsize,
    request_timeout: Option<Duration>,
}

impl LoadTestConfig {
    /// Validates the raw values in the order URL, request count, concurrency.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn new(
        target_url: impl Into<String>,
        request_count: usize,
        concurrency: usize,
    ) -> Result<Self, ValidationError> {
        let target_url = target_url.into();
        validate_url(&target_url)?;
        let request_count = validate_request_count(request_count)?;
        let concurrency = validate_concurrency(concurrency, request_count)?;
        Ok(Self {
            target_url,
            request_count,
            concurrency,
            request_timeout: None,
        })
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub const fn request_count(&self) -> usize {
        self.request_count.get()
    }

    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency.get()
    }

    /// Concurrency as the batch size used by the dispatcher.
    #[must_use]
    pub const fn concurrency_limit(&self) -> NonZeroUsize {
        self.concurrency
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Number of sequential batches the run is split into.
    #[must_use]
    pub const fn batch_count(&self) -> usize {
        self.request_count.get().div_ceil(self.concurrency.get())
    }
}

/// Checks that the URL starts with `http` (covers both `http` and `https`).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidUrlScheme`] with the offending prefix.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with(URL_PREFIX) {
        return Ok(());
    }
    Err(ValidationError::InvalidUrlScheme {
        prefix: url.chars().take(URL_PREFIX.len()).collect(),
    })
}

fn validate_request_count(value: usize) -> Result<NonZeroUsize, ValidationError> {
    let count = NonZeroUsize::new(value).ok_or(ValidationError::RequestCountZero)?;
    if count.get() > MAX_REQUEST_COUNT {
        return Err(ValidationError::RequestCountTooLarge {
            value,
            max: MAX_REQUEST_COUNT,
        });
    }
    Ok(count)
}

fn validate_concurrency(
    value: usize,
    request_count: NonZeroUsize,
) -> Result<NonZeroUsize, ValidationError> {
    let concurrency = NonZeroUsize::new(value).ok_or(ValidationError::ConcurrencyZero)?;
    if concurrency > request_count {
        return Err(ValidationError::ConcurrencyExceedsRequests {
            concurrency: value,
            requests: request_count.get(),
        });
    }
    Ok(concurrency)
}
