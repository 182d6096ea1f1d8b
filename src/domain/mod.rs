//! Validated run configuration shared by the dispatcher and the CLI layer.
mod load;

pub use load::{LoadTestConfig, MAX_REQUEST_COUNT, validate_url};
