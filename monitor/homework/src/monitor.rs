//! The poll loop.
//!
//! Each iteration fetches statuses changed since the cursor, validates the
//! answer, notifies the chat about the latest homework and then sleeps.
//! Failures are reported to the chat once per distinct message text.

use std::time::Duration;

use async_trait::async_trait;
use clients_practicum::{PracticumClient, PracticumError};
use serde_json::Value;

use crate::config::MonitorConfig;
use crate::error::HomeworkError;
use crate::notifier::{send_message, Messenger};
use crate::parser::parse_homework;
use crate::validator::{check_response, current_date};

pub const STARTUP_MESSAGE: &str = "Бот включен";

/// Source of raw homework status answers.
#[async_trait]
pub trait HomeworkSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError>;
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError> {
        self.homework_statuses(from_date).await
    }
}

/// What a single iteration did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The answer held no homeworks.
    NoUpdates,
    /// A status message was sent.
    Notified(String),
    /// The iteration failed; `notified` is false when the same failure was already reported.
    Failed { message: String, notified: bool },
}

/// Text sent to the chat when an iteration fails.
pub fn failure_message(err: &HomeworkError) -> String {
    format!("Сбой в работе программы: {}", err)
}

/// Homework status monitor.
pub struct HomeworkMonitor<S, M> {
    source: S,
    messenger: M,
    retry_period: Duration,
    /// Lower bound of the next fetch window (Unix seconds)
    cursor: i64,
    /// Last failure message sent to the chat
    last_error: Option<String>,
}

impl<S, M> HomeworkMonitor<S, M>
where
    S: HomeworkSource + Send + Sync,
    M: Messenger + Send + Sync,
{
    /// Creates a monitor whose first fetch starts at `from_date`.
    pub fn new(config: MonitorConfig, source: S, messenger: M, from_date: i64) -> Self {
        Self {
            source,
            messenger,
            retry_period: config.retry_period,
            cursor: from_date,
            last_error: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Tells the chat the bot is up.
    pub async fn announce(&self) -> bool {
        send_message(&self.messenger, STARTUP_MESSAGE).await
    }

    /// Polls forever, sleeping `retry_period` after every iteration.
    pub async fn run(&mut self) {
        tracing::info!(cursor = self.cursor, period = ?self.retry_period, "homework monitor started");
        loop {
            let outcome = self.poll_once().await;
            tracing::debug!(?outcome, cursor = self.cursor, "poll iteration finished");
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Runs one iteration without the trailing sleep.
    pub async fn poll_once(&mut self) -> PollOutcome {
        let result = match self.source.fetch(self.cursor).await {
            Ok(response) => {
                let result = self.process(&response).await;
                // The cursor moves with every answer carrying a usable date,
                // even when the homework itself could not be parsed.
                if let Ok(date) = current_date(&response) {
                    self.cursor = date;
                }
                result
            }
            Err(err) => Err(err.into()),
        };

        match result {
            Ok(Some(message)) => PollOutcome::Notified(message),
            Ok(None) => PollOutcome::NoUpdates,
            Err(err) => self.report_failure(err).await,
        }
    }

    async fn process(&self, response: &Value) -> Result<Option<String>, HomeworkError> {
        let homeworks = check_response(response)?;
        current_date(response)?;

        let Some(latest) = homeworks.first() else {
            tracing::debug!("no status changes");
            return Ok(None);
        };
        let latest = latest
            .as_object()
            .ok_or(HomeworkError::HomeworkNotADict)?;
        let message = parse_homework(latest)?;
        send_message(&self.messenger, &message).await;
        Ok(Some(message))
    }

    async fn report_failure(&mut self, err: HomeworkError) -> PollOutcome {
        let message = failure_message(&err);
        tracing::error!(kind = err.kind(), "{}", message);

        let notified = self.last_error.as_deref() != Some(message.as_str());
        if notified {
            send_message(&self.messenger, &message).await;
            self.last_error = Some(message.clone());
        }
        PollOutcome::Failed { message, notified }
    }
}
