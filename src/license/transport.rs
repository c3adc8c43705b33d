use super::error::NetworkError;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::future::Future;

const USER_AGENT: &str = concat!("licensed-client/", env!("CARGO_PKG_VERSION"));

/// Raw result of one POST: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries a single JSON POST. Only transport-level failures are errors;
/// status handling is left to the caller.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, NetworkError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`NetworkError::Request`] if the TLS backend cannot be set up.
    pub fn new() -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse, NetworkError> {
        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
