//! Per-request records and the reduction into the final report.
mod report;
mod types;


pub use report::{LoadTestReport, is_success_status};
pub use types::{RequestOutcome, RequestRecord};
