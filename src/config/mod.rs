//! Configuration file loading and merging into CLI arguments.
mod apply;
mod loader;
mod types;


pub use apply::apply_config;
pub use loader::load_config;
pub use types::{ConfigFile, DurationValue};

#[cfg(test)]
pub(crate) use loader::load_config_file;
