use std::time::Duration;

use crate::error::RequestFailure;

use super::report::is_success_status;

#[derive(Debug)]
pub enum RequestOutcome {
    /// A response was received; any status code, not only 2xx.
    Success { status: u16 },
    /// No response: the request could not be built or the transport failed.
    Failure { error: RequestFailure },
}

/// Result of one issued request. Immutable once created.
#[derive(Debug)]
pub struct RequestRecord {
    latency: Duration,
    outcome: RequestOutcome,
}

impl RequestRecord {
    #[must_use]
    pub const fn response(status: u16, latency: Duration) -> Self {
        Self {
            latency,
            outcome: RequestOutcome::Success { status },
        }
    }

    #[must_use]
    pub const fn failure(error: RequestFailure, latency: Duration) -> Self {
        Self {
            latency,
            outcome: RequestOutcome::Failure { error },
        }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }

    #[must_use]
    pub const fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.outcome {
            RequestOutcome::Success { status } => Some(status),
            RequestOutcome::Failure { .. } => None,
        }
    }

    /// A response with a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self.outcome {
            RequestOutcome::Success { status } => is_success_status(status),
            RequestOutcome::Failure { .. } => false,
        }
    }
}
