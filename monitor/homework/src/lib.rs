//! Homework review monitor.
//!
//! Polls the Practicum homework statuses API, turns the status of the latest
//! submission into a chat message and reports failures to the same chat.

pub mod config;
mod error;
mod monitor;
mod notifier;
mod parser;
mod types;
mod validator;

pub use config::{check_tokens, missing_tokens, Credentials, MonitorConfig, RETRY_PERIOD};
pub use error::HomeworkError;
pub use monitor::{failure_message, HomeworkMonitor, HomeworkSource, PollOutcome, STARTUP_MESSAGE};
pub use notifier::{send_message, Messenger};
pub use parser::{parse_homework, parse_status};
pub use types::HomeworkStatus;
pub use validator::{check_response, current_date};
