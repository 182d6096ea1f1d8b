use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::LoadArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills in values not given on the command line (or via env) from `config`.
///
/// # Errors
///
/// Returns an error when a config value cannot be converted.
pub fn apply_config(
    args: &mut LoadArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_explicit(matches, "number")
        && let Some(number) = config.number
    {
        args.number = number;
    }

    if !is_explicit(matches, "concurrency")
        && let Some(concurrency) = config.concurrency
    {
        args.concurrency = concurrency;
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        let timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "timeout",
                source: err,
            })
        })?;
        args.timeout = Some(timeout);
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
