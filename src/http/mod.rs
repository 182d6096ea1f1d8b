//! HTTP client setup and single-request execution.
mod client;
mod executor;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use executor::{HttpExecutor, RequestExecutor, RequestTarget};
