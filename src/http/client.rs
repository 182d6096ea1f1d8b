use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::LoadTestConfig;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the client shared by every request of a run.
///
/// # Errors
///
/// Returns an error when the underlying TLS backend or resolver cannot be
/// initialised.
pub fn build_client(config: &LoadTestConfig) -> AppResult<Client> {
    let client_builder = Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .pool_max_idle_per_host(config.concurrency());

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            Err(AppError::http(HttpError::BuildClientFailed { source: e }))
        }
    }
}
