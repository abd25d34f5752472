use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Source currency selected after a catalog load, when present.
pub const DEFAULT_BASE: &str = "USD";
/// Target currency selected after a catalog load, when present.
pub const DEFAULT_TARGET: &str = "PKR";

/// Major currencies used when the catalog service cannot be reached.
const FALLBACK_CURRENCIES: [(&str, &str); 22] = [
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("CHF", "Swiss Franc"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("PKR", "Pakistani Rupee"),
    ("AED", "UAE Dirham"),
    ("SAR", "Saudi Riyal"),
    ("SGD", "Singapore Dollar"),
    ("KRW", "South Korean Won"),
    ("TRY", "Turkish Lira"),
    ("RUB", "Russian Ruble"),
    ("BRL", "Brazilian Real"),
    ("ZAR", "South African Rand"),
    ("MXN", "Mexican Peso"),
    ("NZD", "New Zealand Dollar"),
    ("SEK", "Swedish Krona"),
    ("NOK", "Norwegian Krone"),
];

/// Where a catalog snapshot came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CatalogOrigin {
    #[serde(rename = "service")]
    Service,
    #[serde(rename = "fallback")]
    Fallback,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOrigin::Service => write!(f, "service"),
            CatalogOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// An immutable set of currencies keyed by code, ordered by code ascending.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    currencies: Vec<Currency>,
    /// Whether this snapshot came from the service or the static list
    pub origin: CatalogOrigin,
    /// When this snapshot was built
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Builds a catalog from `code -> name` pairs. Codes are uppercased and
    /// deduplicated; the first name seen for a code is kept.
    pub fn from_names<I, C, N>(entries: I, origin: CatalogOrigin) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut by_code: BTreeMap<String, Currency> = BTreeMap::new();
        for (code, name) in entries {
            let currency = Currency::with_name(code.as_ref(), name.as_ref());
            if currency.code.is_empty() {
                continue;
            }
            by_code.entry(currency.code.clone()).or_insert(currency);
        }

        Self {
            currencies: by_code.into_values().collect(),
            origin,
            loaded_at: Utc::now(),
        }
    }

    /// The fixed list of major currencies.
    pub fn fallback() -> Self {
        Self::from_names(FALLBACK_CURRENCIES, CatalogOrigin::Fallback)
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .binary_search_by(|c| c.code.as_str().cmp(code))
            .ok()
            .map(|idx| &self.currencies[idx])
    }

    /// Default source selection, if this catalog carries it
    pub fn default_base(&self) -> Option<&str> {
        self.get(DEFAULT_BASE).map(|c| c.code.as_str())
    }

    /// Default target selection, if this catalog carries it
    pub fn default_target(&self) -> Option<&str> {
        self.get(DEFAULT_TARGET).map(|c| c.code.as_str())
    }
}
