//! Homework bot: poll the Practicum homework API every ten minutes and push review status changes via Telegram.
//!
//! Required environment: PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID.
//! Optional: PRACTICUM_ENDPOINT, RETRY_PERIOD and REQUEST_TIMEOUT (seconds), RUST_LOG.
//! A `.env` file in the working directory is read first.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clients_practicum::{PracticumClient, PracticumClientConfig};
use clients_telegrambot::TelegramBot;
use homework::{check_tokens, missing_tokens, Credentials, HomeworkMonitor, MonitorConfig};
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LOG_DIRECTIVES: &str = "info,homework=debug,clients_practicum=debug,homework_bot=debug";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging(LOG_DIRECTIVES);

    let credentials = Credentials::from_env();
    if let Err(err) = require_credentials(&credentials) {
        tracing::error!("Отсутствует переменная окружения! {:#}", err);
        std::process::exit(1);
    }

    let mut config = MonitorConfig::default();
    if let Some(period) = env_seconds("RETRY_PERIOD")? {
        config.retry_period = period;
    }
    let timeout = env_seconds("REQUEST_TIMEOUT")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT);

    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let mut practicum_config = PracticumClientConfig::new(credentials.practicum_token);
    if let Ok(endpoint) = std::env::var("PRACTICUM_ENDPOINT") {
        practicum_config.endpoint = Url::parse(endpoint.trim())
            .with_context(|| format!("PRACTICUM_ENDPOINT is not a valid URL: {}", endpoint))?;
    }
    let practicum = PracticumClient::new(client.clone(), practicum_config);
    tracing::info!(endpoint = practicum.endpoint(), "polling homework statuses");

    let telegram = TelegramBot::new(
        client,
        credentials.telegram_token,
        credentials.telegram_chat_id,
    );

    let mut monitor = HomeworkMonitor::new(config, practicum, telegram, utils::unix_timestamp());
    monitor.announce().await;
    monitor.run().await;
    Ok(())
}

/// Startup gate: the loop is only entered when every credential is set.
fn require_credentials(credentials: &Credentials) -> Result<()> {
    if !check_tokens(credentials) {
        bail!("missing: {}", missing_tokens(credentials).join(", "));
    }
    Ok(())
}

fn env_seconds(name: &str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(raw) => parse_seconds(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

/// Parses a positive number of seconds.
fn parse_seconds(name: &str, raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a whole number of seconds, got {:?}", name, raw))?;
    if secs == 0 {
        bail!("{} must be greater than zero", name);
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            practicum_token: "p".into(),
            telegram_token: "t".into(),
            telegram_chat_id: "1".into(),
        }
    }

    #[test]
    fn complete_credentials_pass_the_gate() {
        assert!(require_credentials(&credentials()).is_ok());
    }

    #[test]
    fn missing_credentials_stop_startup() {
        let err = require_credentials(&Credentials::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing: PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID"
        );

        let no_chat = Credentials {
            telegram_chat_id: String::new(),
            ..credentials()
        };
        let err = require_credentials(&no_chat).unwrap_err();
        assert_eq!(err.to_string(), "missing: TELEGRAM_CHAT_ID");
    }

    #[test]
    fn parses_seconds() {
        assert_eq!(
            parse_seconds("RETRY_PERIOD", " 600 ").unwrap(),
            Duration::from_secs(600)
        );
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert!(parse_seconds("RETRY_PERIOD", "0").is_err());
        assert!(parse_seconds("RETRY_PERIOD", "ten").is_err());
        assert!(parse_seconds("RETRY_PERIOD", "-5").is_err());
    }
}
