//! Run orchestration and report rendering for the `load` command.
mod runner;
mod summary;

pub(crate) use runner::run_load_test;
pub(crate) use summary::print_report;
