use thiserror::Error;

#[derive(Error, Debug)]
pub enum LicenseError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid license key for tier '{tier}'")]
    Authorization { tier: String },

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LicenseError {
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, LicenseError::Configuration(_))
    }

    #[must_use]
    pub fn is_authorization(&self) -> bool {
        matches!(self, LicenseError::Authorization { .. })
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, LicenseError::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, LicenseError>;
