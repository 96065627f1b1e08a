//! Configuration types for the homework monitor.

use std::time::Duration;

/// Pause between two poll iterations.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Secrets the bot cannot run without.
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth token for the Practicum API
    pub practicum_token: String,
    /// Telegram Bot API token
    pub telegram_token: String,
    /// Chat that receives the notifications
    pub telegram_chat_id: String,
}

impl Credentials {
    /// Reads the three variables from the process environment; unset reads as empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            practicum_token: var(PRACTICUM_TOKEN),
            telegram_token: var(TELEGRAM_TOKEN),
            telegram_chat_id: var(TELEGRAM_CHAT_ID),
        }
    }
}

// Tokens never reach the logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Names of the credential variables that are empty or blank.
pub fn missing_tokens(credentials: &Credentials) -> Vec<&'static str> {
    [
        (PRACTICUM_TOKEN, &credentials.practicum_token),
        (TELEGRAM_TOKEN, &credentials.telegram_token),
        (TELEGRAM_CHAT_ID, &credentials.telegram_chat_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

/// True when every credential is present.
pub fn check_tokens(credentials: &Credentials) -> bool {
    missing_tokens(credentials).is_empty()
}

/// Loop parameters (clients are passed to `HomeworkMonitor::new`).
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Sleep between iterations
    pub retry_period: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            retry_period: RETRY_PERIOD,
        }
    }
}
