pub mod catalog;
pub mod credentials;
pub mod exchange;

use std::collections::BTreeMap;

use async_trait::async_trait;
use common::{
    models::{ConversionRequest, ExchangeOutcome},
    Result,
};

/// Remote service that knows which currencies exist
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Currency code to display name. Names may be empty when the service
    /// does not supply one.
    async fn fetch_currencies(&self) -> Result<BTreeMap<String, String>>;
}

/// Backend that performs conversions
#[async_trait]
pub trait ConversionBackend: Send + Sync {
    /// Submit one conversion. `Err` covers transport failures, non-success
    /// HTTP statuses and unreadable payloads.
    async fn convert(&self, request: &ConversionRequest) -> Result<ExchangeOutcome>;
}

/// Supplies the anti-forgery token sent with state-changing requests
pub trait CredentialProvider: Send + Sync {
    /// Missing tokens are returned as an empty string and forwarded as-is.
    fn anti_forgery_token(&self) -> String;
}
