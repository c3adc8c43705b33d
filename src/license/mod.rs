pub mod client;
pub mod error;
pub mod tier;
pub mod transport;

pub use client::{API_ENDPOINT, LicensedClient};
pub use error::{LicenseError, NetworkError};
pub use tier::Tier;
pub use transport::{HttpTransport, Transport, TransportResponse};
