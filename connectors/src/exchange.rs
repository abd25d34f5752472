use std::sync::Arc;

use async_trait::async_trait;
use common::{
    models::{ConversionRequest, ExchangeOutcome},
    Error, Result,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::{ConversionBackend, CredentialProvider};

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// The backend's `POST /exchange/` endpoint
pub struct ExchangeEndpoint {
    client: reqwest::Client,
    url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ExchangeEndpoint {
    pub fn new(url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            credentials,
        }
    }
}

#[async_trait]
impl ConversionBackend for ExchangeEndpoint {
    async fn convert(&self, request: &ConversionRequest) -> Result<ExchangeOutcome> {
        debug!(
            "Requesting conversion of {} {} to {} from {}",
            request.amount, request.base, request.target, self.url
        );

        let response = self
            .client
            .post(&self.url)
            .header(CSRF_HEADER, self.credentials.anti_forgery_token())
            .json(request)
            .send()
            .await
            .map_err(Error::HttpError)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Exchange endpoint error: {} - {}", status, error_text);
            return Err(Error::StatusError(status.as_u16()));
        }

        let payload: Value = response.json().await.map_err(|e| {
            Error::ParseError(format!("Failed to parse conversion response: {}", e))
        })?;

        ExchangeOutcome::from_payload(payload)
    }
}
