use super::error::{LicenseError, NetworkError, Result};
use super::tier::Tier;
use super::transport::{HttpTransport, Transport, TransportResponse};
use serde_json::{Map, Value, json};

pub const API_ENDPOINT: &str = "https://api.yourpackage.com";

const ERROR_BODY_LIMIT: usize = 200;

/// Client gated on a tier-specific license key.
///
/// Fields are fixed at construction, so the paid-tier key requirement checked
/// in [`LicensedClient::with_transport`] holds for the client's lifetime.
#[derive(Debug, Clone)]
pub struct LicensedClient<T = HttpTransport> {
    license_key: Option<String>,
    tier: Tier,
    transport: T,
}

impl LicensedClient<HttpTransport> {
    /// # Errors
    ///
    /// [`LicenseError::Configuration`] when a paid tier has no key, or
    /// [`LicenseError::Network`] if the HTTP client cannot be built.
    pub fn new(license_key: Option<String>, tier: Tier) -> Result<Self> {
        // Checked before building the HTTP client so a missing key fails first
        require_key(license_key.as_deref(), &tier)?;
        Self::with_transport(license_key, tier, HttpTransport::new()?)
    }
}

impl<T: Transport> LicensedClient<T> {
    /// # Errors
    ///
    /// [`LicenseError::Configuration`] when `tier` is not free and
    /// `license_key` is absent or empty.
    pub fn with_transport(license_key: Option<String>, tier: Tier, transport: T) -> Result<Self> {
        require_key(license_key.as_deref(), &tier)?;
        Ok(Self {
            license_key,
            tier,
            transport,
        })
    }

    #[must_use]
    pub fn license_key(&self) -> Option<&str> {
        self.license_key.as_deref()
    }

    #[must_use]
    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    #[must_use]
    pub fn api_endpoint(&self) -> &'static str {
        API_ENDPOINT
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn validate_license(&self) -> bool {
        self.tier.accepts(self.license_key.as_deref())
    }

    /// Posts `data` to `{API_ENDPOINT}/process` and returns the decoded
    /// response object.
    ///
    /// # Errors
    ///
    /// [`LicenseError::Authorization`] if the key does not validate (no request
    /// is made), or [`LicenseError::Network`] on transport failure, a
    /// non-success status, or a body that is not a JSON object.
    pub async fn api_call(&self, data: &Map<String, Value>) -> Result<Map<String, Value>> {
        if !self.validate_license() {
            return Err(LicenseError::Authorization {
                tier: self.tier.name().to_string(),
            });
        }

        let url = format!("{API_ENDPOINT}/process");
        let payload = json!({
            "data": data,
            "license": self.license_key,
            "tier": self.tier,
        });

        tracing::debug!(%url, tier = %self.tier, "sending licensed request");
        let response = self.transport.post_json(&url, &payload).await?;
        tracing::debug!(status = response.status, "received response");

        Ok(decode_response(response)?)
    }
}

fn require_key(license_key: Option<&str>, tier: &Tier) -> Result<()> {
    if tier.is_free() || license_key.is_some_and(|k| !k.is_empty()) {
        return Ok(());
    }
    Err(LicenseError::Configuration(format!(
        "License key required for paid tier '{tier}'"
    )))
}

fn decode_response(
    response: TransportResponse,
) -> std::result::Result<Map<String, Value>, NetworkError> {
    if !response.is_success() {
        // Keep error pages readable
        let body = if response.body.chars().count() > ERROR_BODY_LIMIT {
            let head: String = response.body.chars().take(ERROR_BODY_LIMIT).collect();
            format!("{head}...")
        } else {
            response.body
        };
        return Err(NetworkError::Status {
            status: response.status,
            body,
        });
    }

    Ok(serde_json::from_str(&response.body)?)
}
