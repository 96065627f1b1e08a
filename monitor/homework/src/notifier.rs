use anyhow::Result;
use async_trait::async_trait;
use clients_telegrambot::TelegramBot;

/// Delivers text to the chat.
#[async_trait]
pub trait Messenger {
    async fn send(&self, text: &str) -> Result<()>;
}

#[async_trait]
impl Messenger for TelegramBot {
    async fn send(&self, text: &str) -> Result<()> {
        self.push_message(text).await
    }
}

/// Sends `text`, logging instead of failing when delivery does not work.
///
/// Returns whether the message was delivered.
pub async fn send_message<M: Messenger + ?Sized>(messenger: &M, text: &str) -> bool {
    tracing::debug!("sending message to chat");
    match messenger.send(text).await {
        Ok(()) => {
            tracing::debug!(message = text, "message sent to chat");
            true
        }
        Err(err) => {
            tracing::error!("message not sent: {:#}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Broken;

    #[async_trait]
    impl Messenger for Broken {
        async fn send(&self, _text: &str) -> Result<()> {
            Err(anyhow!("connection reset"))
        }
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        assert!(!send_message(&Broken, "hello").await);
    }
}
