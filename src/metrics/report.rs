use std::time::Duration;

use serde::Serialize;
use serde::ser::Serializer;

use super::types::{RequestOutcome, RequestRecord};

const SUCCESS_STATUS_MIN: u16 = 200;
const SUCCESS_STATUS_MAX: u16 = 299;

#[must_use]
pub const fn is_success_status(status: u16) -> bool {
    status >= SUCCESS_STATUS_MIN && status <= SUCCESS_STATUS_MAX
}

/// Summary of a completed run, reduced once from the full record set.
///
/// `average_latency` covers 2xx responses only, both in the numerator and in
/// the denominator. It is `None` when nothing succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadTestReport {
    pub success_count: u64,
    pub total_requests: u64,
    #[serde(
        rename = "average_latency_seconds",
        serialize_with = "serialize_seconds"
    )]
    pub average_latency: Option<Duration>,
    pub non_success_status: u64,
    pub construction_errors: u64,
    pub transport_errors: u64,
    pub timeouts: u64,
}

impl LoadTestReport {
    #[must_use]
    pub fn from_records(records: &[RequestRecord]) -> Self {
        let mut report = Self {
            success_count: 0,
            total_requests: u64::try_from(records.len()).unwrap_or(u64::MAX),
            average_latency: None,
            non_success_status: 0,
            construction_errors: 0,
            transport_errors: 0,
            timeouts: 0,
        };
        let mut success_latency_ns: u128 = 0;

        for record in records {
            match record.outcome() {
                RequestOutcome::Success { status } if is_success_status(*status) => {
                    report.success_count = report.success_count.saturating_add(1);
                    success_latency_ns =
                        success_latency_ns.saturating_add(record.latency().as_nanos());
                }
                RequestOutcome::Success { .. } => {
                    report.non_success_status = report.non_success_status.saturating_add(1);
                }
                RequestOutcome::Failure { error } => {
                    if error.is_construction() {
                        report.construction_errors = report.construction_errors.saturating_add(1);
                    } else if error.is_timeout() {
                        report.timeouts = report.timeouts.saturating_add(1);
                    } else {
                        report.transport_errors = report.transport_errors.saturating_add(1);
                    }
                }
            }
        }

        report.average_latency = success_latency_ns
            .checked_div(u128::from(report.success_count))
            .map(|avg_ns| Duration::from_nanos(u64::try_from(avg_ns).unwrap_or(u64::MAX)));
        report
    }

    /// Average latency of successful requests in seconds, `None` when undefined.
    #[must_use]
    pub fn average_latency_seconds(&self) -> Option<f64> {
        self.average_latency.map(|avg| avg.as_secs_f64())
    }

    #[must_use]
    pub const fn failed_requests(&self) -> u64 {
        self.construction_errors
            .saturating_add(self.transport_errors)
            .saturating_add(self.timeouts)
    }
}

fn serialize_seconds<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(duration) => serializer.serialize_some(&duration.as_secs_f64()),
        None => serializer.serialize_none(),
    }
}
