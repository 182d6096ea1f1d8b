pub(crate) const DEFAULT_USER_AGENT: &str = concat!("load_tester/", env!("CARGO_PKG_VERSION"));

/// Config files picked up from the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["load_tester.toml", "load_tester.json"];

pub(crate) const DEFAULT_REQUEST_COUNT: usize = 1;
pub(crate) const DEFAULT_CONCURRENCY: usize = 1;
