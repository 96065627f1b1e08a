mod config;
mod error;
mod statuses;

pub use config::{PracticumClientConfig, DEFAULT_ENDPOINT};
pub use error::PracticumError;
pub use statuses::PracticumClient;
