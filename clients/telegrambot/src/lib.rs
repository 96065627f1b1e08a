use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_base: String,
    api_key: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ErrorReply {
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given API key and chat ID.
    pub fn new(client: Client, api_key: String, chat_id: String) -> Self {
        Self::with_api_base(client, TELEGRAM_API_BASE.to_string(), api_key, chat_id)
    }

    /// Same as `new`, against a different Bot API server.
    pub fn with_api_base(client: Client, api_base: String, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            api_base,
            api_key,
            chat_id,
        }
    }

    /// Sends a text message to the configured chat.
    pub async fn push_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.api_key);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let resp = self.client.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            // Bot API explains rejections in `description`.
            let description = resp
                .json::<ErrorReply>()
                .await
                .ok()
                .and_then(|reply| reply.description)
                .unwrap_or_else(|| "no description".to_string());
            return Err(anyhow!("telegram rejected message ({}): {}", status, description));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn push_message_posts_chat_and_text() {
        let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
        let app = Router::new()
            .route(
                "/botTOKEN/sendMessage",
                post(
                    |State(seen): State<Arc<Mutex<Vec<Value>>>>, Json(body): Json<Value>| async move {
                        seen.lock().unwrap().push(body);
                        Json(json!({ "ok": true }))
                    },
                ),
            )
            .with_state(Arc::clone(&seen));
        let base = serve(app).await;

        let bot = TelegramBot::with_api_base(Client::new(), base, "TOKEN".into(), "42".into());
        bot.push_message("Бот включен").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["chat_id"], "42");
        assert_eq!(seen[0]["text"], "Бот включен");
    }

    #[tokio::test]
    async fn rejection_carries_description() {
        let app = Router::new().route(
            "/botTOKEN/sendMessage",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "ok": false, "description": "Bad Request: chat not found" })),
                )
            }),
        );
        let base = serve(app).await;

        let bot = TelegramBot::with_api_base(Client::new(), base, "TOKEN".into(), "42".into());
        let err = bot.push_message("hello").await.unwrap_err();
        assert!(err.to_string().contains("chat not found"));
    }
}
