use url::Url;

/// Homework statuses endpoint of the Practicum user API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Configuration for PracticumClient
#[derive(Debug, Clone)]
pub struct PracticumClientConfig {
    /// OAuth token sent in the `Authorization` header
    pub token: String,
    /// Full URL of the homework statuses endpoint
    pub endpoint: Url,
}

impl PracticumClientConfig {
    /// Config pointing at the public endpoint.
    pub fn new(token: String) -> Self {
        Self {
            token,
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
        }
    }
}
