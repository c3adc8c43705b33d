pub mod config;
pub mod license;

pub use config::{ConfigError, Settings};
pub use license::{
    API_ENDPOINT, HttpTransport, LicenseError, LicensedClient, NetworkError, Tier, Transport,
    TransportResponse,
};
