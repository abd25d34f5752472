use std::collections::BTreeMap;

use async_trait::async_trait;
use common::{Error, Result};
use serde_json::Value;
use tracing::{debug, error};

use crate::CatalogSource;

pub const FRANKFURTER_CURRENCIES_URL: &str = "https://api.frankfurter.app/currencies";

/// Catalog service answering `GET` with a JSON object of `code -> name`
pub struct FrankfurterCatalog {
    client: reqwest::Client,
    url: String,
}

impl FrankfurterCatalog {
    pub fn new() -> Self {
        Self::with_url(FRANKFURTER_CURRENCIES_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for FrankfurterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a `code -> name` object. Non-string names are treated as absent.
pub fn parse_currency_names(payload: Value) -> Result<BTreeMap<String, String>> {
    let Value::Object(entries) = payload else {
        return Err(Error::ParseError(
            "Currency catalog is not a JSON object".to_string(),
        ));
    };

    Ok(entries
        .into_iter()
        .map(|(code, name)| {
            let name = name.as_str().unwrap_or_default().to_string();
            (code, name)
        })
        .collect())
}

#[async_trait]
impl CatalogSource for FrankfurterCatalog {
    async fn fetch_currencies(&self) -> Result<BTreeMap<String, String>> {
        debug!("Fetching currency catalog: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(Error::HttpError)?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Currency catalog error: {}", status);
            return Err(Error::StatusError(status.as_u16()));
        }

        let payload: Value = response.json().await.map_err(|e| {
            Error::ParseError(format!("Failed to parse currency catalog: {}", e))
        })?;

        let names = parse_currency_names(payload)?;
        debug!("Currency catalog returned {} codes", names.len());
        Ok(names)
    }
}
