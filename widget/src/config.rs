use std::sync::Arc;

use common::{
    format::Locale,
    render::{HtmlRenderer, Renderer, TextRenderer},
};
use connectors::{
    catalog::FRANKFURTER_CURRENCIES_URL,
    credentials::{CookieCredentials, StaticCredentials},
    CredentialProvider,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the result region is rendered
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "html")]
    Html,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WidgetConfig {
    pub exchange_url: String,
    pub catalog_url: String,
    /// Raw `Cookie` header the anti-forgery token is read from
    pub cookie: Option<String>,
    /// Explicit token, used instead of the cookie when set
    pub csrf_token: Option<String>,
    pub locale: Locale,
    pub output: OutputFormat,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            exchange_url: "http://127.0.0.1:8000/exchange/".to_string(),
            catalog_url: FRANKFURTER_CURRENCIES_URL.to_string(),
            cookie: None,
            csrf_token: None,
            locale: Locale::default(),
            output: OutputFormat::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let locale = match non_empty("WIDGET_LOCALE") {
            Some(tag) => Locale::from_tag(&tag).unwrap_or_else(|| {
                warn!("Unknown WIDGET_LOCALE {}, using {:?}", tag, defaults.locale);
                defaults.locale
            }),
            None => defaults.locale,
        };

        let output = match non_empty("WIDGET_OUTPUT") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "html" => OutputFormat::Html,
                "text" => OutputFormat::Text,
                other => {
                    warn!("Unknown WIDGET_OUTPUT {}, using text", other);
                    OutputFormat::Text
                }
            },
            None => defaults.output,
        };

        Self {
            exchange_url: non_empty("EXCHANGE_URL").unwrap_or(defaults.exchange_url),
            catalog_url: non_empty("CATALOG_URL").unwrap_or(defaults.catalog_url),
            cookie: non_empty("EXCHANGE_COOKIE"),
            csrf_token: non_empty("EXCHANGE_CSRF_TOKEN"),
            locale,
            output,
        }
    }

    pub fn credentials(&self) -> Arc<dyn CredentialProvider> {
        match (&self.csrf_token, &self.cookie) {
            (Some(token), _) => Arc::new(StaticCredentials::new(token.clone())),
            (None, Some(cookie)) => Arc::new(CookieCredentials::new(cookie.clone())),
            (None, None) => Arc::new(StaticCredentials::default()),
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self.output {
            OutputFormat::Text => Box::new(TextRenderer),
            OutputFormat::Html => Box::new(HtmlRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = WidgetConfig::from_lookup(lookup(&[]));
        assert_eq!(config.exchange_url, "http://127.0.0.1:8000/exchange/");
        assert_eq!(config.catalog_url, FRANKFURTER_CURRENCIES_URL);
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.credentials().anti_forgery_token(), "");
    }

    #[test]
    fn reads_overrides() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("EXCHANGE_URL", "https://rates.example/exchange/"),
            ("WIDGET_LOCALE", "de-DE"),
            ("WIDGET_OUTPUT", "HTML"),
            ("EXCHANGE_COOKIE", "csrftoken=from-cookie"),
        ]));
        assert_eq!(config.exchange_url, "https://rates.example/exchange/");
        assert_eq!(config.locale, Locale::German);
        assert_eq!(config.output, OutputFormat::Html);
        assert_eq!(config.credentials().anti_forgery_token(), "from-cookie");
    }

    #[test]
    fn explicit_token_wins_over_cookie() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("EXCHANGE_COOKIE", "csrftoken=from-cookie"),
            ("EXCHANGE_CSRF_TOKEN", "explicit"),
        ]));
        assert_eq!(config.credentials().anti_forgery_token(), "explicit");
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("WIDGET_LOCALE", "tlh"),
            ("WIDGET_OUTPUT", "pdf"),
            ("CATALOG_URL", "  "),
        ]));
        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.catalog_url, FRANKFURTER_CURRENCIES_URL);
    }
}
