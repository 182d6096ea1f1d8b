use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUEST_COUNT};
use super::parsers::parse_duration_arg;
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "load_tester",
    version,
    about = "A CLI to HTTP(s) load test your applications",
    long_about = "Allows you to send multiple concurrent requests to a url and view the response results and statistics."
)]
pub struct TesterArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (overridden by LOAD_TESTER_LOG / RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// load test a url by sending HTTP requests to it
    Load(LoadArgs),
}

#[derive(Debug, Args, Clone)]
pub struct LoadArgs {
    /// the url to send requests to
    #[arg(long, short, env = "LOAD_TESTER_URL")]
    pub url: Option<String>,

    /// the number of requests to send to that url
    #[arg(long, short, default_value_t = DEFAULT_REQUEST_COUNT, env = "LOAD_TESTER_NUMBER")]
    pub number: usize,

    /// the number of requests to send concurrently
    #[arg(long, short, default_value_t = DEFAULT_CONCURRENCY, env = "LOAD_TESTER_CONCURRENCY")]
    pub concurrency: usize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Path to a .toml or .json config file
    #[arg(long)]
    pub config: Option<String>,
}
