use std::time::Duration;

use serde::Deserialize;

use crate::args::OutputFormat;
use crate::args::parsers::parse_duration_arg;
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "requests")]
    pub number: Option<usize>,
    pub concurrency: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub output_format: Option<OutputFormat>,
}

/// Either whole seconds (`timeout = 5`) or a unit string (`timeout = "500ms"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
