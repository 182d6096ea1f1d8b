use clap::{ArgMatches, CommandFactory, FromArgMatches};
use crate::app::{print_report, run_load_test};
use crate::args::{Command, LoadArgs, TesterArgs};
use crate::config::{apply_config, load_config};
use crate::domain::LoadTestConfig;
use crate::error::{AppError, AppResult, ValidationError};

/// Parses the command line and runs the selected command.
///
/// # Errors
///
/// Returns configuration and validation errors before any request is sent,
/// and setup errors (runtime, HTTP client) that abort the run.
pub fn run() -> AppResult<()> {
    let matches = TesterArgs::command().get_matches();
    let args = TesterArgs::from_arg_matches(&matches)?;

    crate::logger::init_logging(args.verbose, args.no_color);

    match args.command {
        Command::Load(load) => {
            let load_matches = matches
                .subcommand_matches("load")
                .ok_or_else(|| AppError::from("Missing 'load' arguments."))?;
            run_load(load, load_matches)
        }
    }
}

fn run_load(mut load: LoadArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(load.config.as_deref())? {
        apply_config(&mut load, matches, &config)?;
    }
    let config = build_load_config(&load)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let run = runtime.block_on(run_load_test(config))?;

    print_report(&run.report, load.output_format)
}

fn build_load_config(load: &LoadArgs) -> AppResult<LoadTestConfig> {
    let url = load
        .url
        .clone()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let config = LoadTestConfig::new(url, load.number, load.concurrency)?;
    Ok(config.with_request_timeout(load.timeout))
}
