pub mod config;
pub mod error;
pub mod extractors;
pub mod http;
pub mod telemetry;

pub use error::{AppError, ErrorBody};
