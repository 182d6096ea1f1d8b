mod app;
mod config;
mod dispatch;
mod http;
mod validation;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use http::{HttpError, RequestFailure};
pub use validation::ValidationError;
