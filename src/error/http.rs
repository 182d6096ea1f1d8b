use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}

/// Why a single request produced no HTTP response.
///
/// Stored inside the request record; never propagated out of a run.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build request: {source}")]
    BuildRequest {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
}

impl RequestFailure {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            RequestFailure::InvalidUrl { .. } | RequestFailure::BuildRequest { .. } => false,
            RequestFailure::Transport { source } => source.is_timeout(),
        }
    }

    #[must_use]
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            RequestFailure::InvalidUrl { .. } | RequestFailure::BuildRequest { .. }
        )
    }
}
