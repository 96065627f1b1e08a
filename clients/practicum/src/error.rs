use thiserror::Error;

/// Failures of a single homework statuses request.
#[derive(Debug, Error)]
pub enum PracticumError {
    /// Connection refused, timeout, DNS failure or a body that could not be read.
    #[error("Сбой в получении ответа от API: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API {endpoint} недоступен, код ошибки {status}")]
    StatusNotOk { endpoint: String, status: u16 },

    #[error("Ответ от API не в формате JSON: {0}")]
    Json(#[source] serde_json::Error),
}
