use serde::{Deserialize, Serialize};

use crate::format::{currency_name, currency_symbol};

/// A currency as shown in the selection widgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Uppercase ISO-style code (e.g., "USD", "PKR")
    pub code: String,
    /// Human-readable name (e.g., "US Dollar")
    pub name: String,
    /// Display glyph (e.g., "$")
    pub symbol: String,
}

impl Currency {
    /// Builds a currency from its code alone, filling name and symbol from the
    /// static tables.
    pub fn new(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        Self {
            name: currency_name(&code).to_string(),
            symbol: currency_symbol(&code).to_string(),
            code,
        }
    }

    /// Builds a currency with a name supplied by the catalog service. A blank
    /// name falls back to the static table.
    pub fn with_name(code: &str, name: &str) -> Self {
        let mut currency = Self::new(code);
        let name = name.trim();
        if !name.is_empty() {
            currency.name = name.to_string();
        }
        currency
    }

    /// Label used for selection entries and result lines: `CODE - Name`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_static_tables() {
        let usd = Currency::new("usd");
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.name, "US Dollar");
        assert_eq!(usd.symbol, "$");
    }

    #[test]
    fn unknown_code_falls_back_to_code() {
        let xyz = Currency::new("XYZ");
        assert_eq!(xyz.name, "XYZ");
        assert_eq!(xyz.symbol, "XYZ");
    }

    #[test]
    fn service_name_wins_unless_blank() {
        assert_eq!(
            Currency::with_name("USD", "United States Dollar").name,
            "United States Dollar"
        );
        assert_eq!(Currency::with_name("EUR", "  ").name, "Euro");
        assert_eq!(Currency::with_name("PKR", "Pakistani Rupee").label(), "PKR - Pakistani Rupee");
    }
}
