use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing URL (set --url or provide it in a config file).")]
    MissingUrl,
    #[error("invalid url, expected url to start with http, got {prefix}")]
    InvalidUrlScheme { prefix: String },
    #[error("please enter a number greater than 0")]
    RequestCountZero,
    #[error("number too large, got {value} (max {max})")]
    RequestCountTooLarge { value: usize, max: usize },
    #[error("concurrency must be greater than 0")]
    ConcurrencyZero,
    #[error(
        "cannot concurrently send more requests than number specified. {concurrency} > {requests}"
    )]
    ConcurrencyExceedsRequests { concurrency: usize, requests: usize },
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
}
