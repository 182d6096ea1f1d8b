//! Core library for the `load_tester` CLI.
//!
//! The binary sends a fixed number of HTTP GET requests to one URL in
//! sequential batches, at most `concurrency` requests at a time, then reports
//! the success rate and the average latency of successful requests. The
//! dispatcher is generic over [`http::RequestExecutor`] so it can be driven by
//! the `reqwest` executor or by a stand-in.
pub mod args;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;

mod app;
mod entry;
mod logger;

pub use entry::run;
