//! Presentation helpers: currency names and glyphs, and locale-aware amount
//! formatting.

use serde::{Deserialize, Serialize};

/// English display name for a currency code; unknown codes are returned as-is.
pub fn currency_name(code: &str) -> &str {
    match code {
        "USD" => "US Dollar",
        "EUR" => "Euro",
        "GBP" => "British Pound",
        "JPY" => "Japanese Yen",
        "CAD" => "Canadian Dollar",
        "AUD" => "Australian Dollar",
        "CHF" => "Swiss Franc",
        "CNY" => "Chinese Yuan",
        "INR" => "Indian Rupee",
        "PKR" => "Pakistani Rupee",
        "AED" => "UAE Dirham",
        "SAR" => "Saudi Riyal",
        "KRW" => "South Korean Won",
        "BRL" => "Brazilian Real",
        "RUB" => "Russian Ruble",
        "TRY" => "Turkish Lira",
        "ZAR" => "South African Rand",
        "MXN" => "Mexican Peso",
        "SGD" => "Singapore Dollar",
        "NZD" => "New Zealand Dollar",
        "SEK" => "Swedish Krona",
        "NOK" => "Norwegian Krone",
        "DKK" => "Danish Krone",
        "PLN" => "Polish Zloty",
        "THB" => "Thai Baht",
        "IDR" => "Indonesian Rupiah",
        "HKD" => "Hong Kong Dollar",
        "MYR" => "Malaysian Ringgit",
        "PHP" => "Philippine Peso",
        "CZK" => "Czech Koruna",
        "HUF" => "Hungarian Forint",
        "ILS" => "Israeli Shekel",
        "EGP" => "Egyptian Pound",
        "CLP" => "Chilean Peso",
        "COP" => "Colombian Peso",
        "PEN" => "Peruvian Sol",
        "VND" => "Vietnamese Dong",
        "BDT" => "Bangladeshi Taka",
        "NGN" => "Nigerian Naira",
        "ARS" => "Argentine Peso",
        "QAR" => "Qatari Riyal",
        "KWD" => "Kuwaiti Dinar",
        "OMR" => "Omani Rial",
        "BHD" => "Bahraini Dinar",
        "JOD" => "Jordanian Dinar",
        "LKR" => "Sri Lankan Rupee",
        "NPR" => "Nepalese Rupee",
        "UAH" => "Ukrainian Hryvnia",
        "RON" => "Romanian Leu",
        "BGN" => "Bulgarian Lev",
        "HRK" => "Croatian Kuna",
        "ISK" => "Icelandic Króna",
        "RSD" => "Serbian Dinar",
        "UYU" => "Uruguayan Peso",
        other => other,
    }
}

/// Display glyph for a currency code; unknown codes are returned as-is.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" | "MXN" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "CHF",
        "INR" => "₹",
        "PKR" | "LKR" | "NPR" => "Rs",
        "AED" => "د.إ",
        "SAR" | "OMR" => "﷼",
        "KRW" => "₩",
        "BRL" => "R$",
        "RUB" => "₽",
        "TRY" => "₺",
        "ZAR" => "R",
        "SGD" => "S$",
        "NZD" => "NZ$",
        "SEK" | "NOK" | "DKK" | "ISK" => "kr",
        "PLN" => "zł",
        "THB" => "฿",
        "IDR" => "Rp",
        "HKD" => "HK$",
        "MYR" => "RM",
        "PHP" => "₱",
        "CZK" => "Kč",
        "HUF" => "Ft",
        "ILS" => "₪",
        "EGP" => "E£",
        "CLP" => "CLP$",
        "COP" => "COL$",
        "PEN" => "S/",
        "VND" => "₫",
        "BDT" => "৳",
        "NGN" => "₦",
        "ARS" => "AR$",
        "QAR" => "QR",
        "KWD" => "KD",
        "BHD" => "BD",
        "JOD" => "JD",
        "UAH" => "₴",
        "RON" => "lei",
        "BGN" => "лв",
        "HRK" => "kn",
        "RSD" => "дин",
        "UYU" => "$U",
        other => other,
    }
}

/// Digit grouping conventions for formatted amounts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Locale {
    /// 1,234.50
    #[default]
    #[serde(rename = "en")]
    English,
    /// 1.234,50
    #[serde(rename = "de")]
    German,
    /// 1 234,50 (narrow no-break space)
    #[serde(rename = "fr")]
    French,
    /// 1234.50
    #[serde(rename = "plain")]
    Plain,
}

impl Locale {
    /// Parses a language tag such as `en-US`, `de_DE` or `fr`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(|c| c == '-' || c == '_' || c == '.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Some(Locale::English),
            "de" => Some(Locale::German),
            "fr" => Some(Locale::French),
            "plain" | "c" | "posix" => Some(Locale::Plain),
            _ => None,
        }
    }

    fn group_separator(self) -> Option<char> {
        match self {
            Locale::English => Some(','),
            Locale::German => Some('.'),
            Locale::French => Some('\u{202f}'),
            Locale::Plain => None,
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::English | Locale::Plain => '.',
            Locale::German | Locale::French => ',',
        }
    }

    /// Formats `value` with exactly `decimals` fractional digits and grouped
    /// integer digits.
    pub fn format_number(self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        // "-0.00" is shown as "0.00"
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }

        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                if let Some(sep) = self.group_separator() {
                    out.push(sep);
                }
            }
            out.push(digit);
        }

        if let Some(frac_part) = frac_part {
            out.push(self.decimal_separator());
            out.push_str(frac_part);
        }

        out
    }

    /// `symbol + amount` with two fractional digits.
    pub fn format_amount(self, amount: f64, code: &str) -> String {
        format!("{}{}", currency_symbol(code), self.format_number(amount, 2))
    }
}

/// [`Locale::format_amount`] in the default locale.
pub fn format_amount(amount: f64, code: &str) -> String {
    Locale::default().format_amount(amount, code)
}

/// Exchange rate line: `1 BASE = X.XXXXXX TARGET`.
pub fn format_rate(rate: f64, base: &str, target: &str) -> String {
    format!("1 {} = {:.6} {}", base, rate, target)
}

/// Tidies an amount as it is typed: negatives become `0.01` and more than two
/// fractional digits are rounded to two. Anything unparsable is left alone for
/// validation to reject.
pub fn normalize_amount_input(input: &str) -> String {
    let trimmed = input.trim();
    let Ok(value) = trimmed.parse::<f64>() else {
        return trimmed.to_string();
    };

    if value < 0.0 {
        return "0.01".to_string();
    }

    match trimmed.split_once('.') {
        Some((_, frac)) if frac.len() > 2 => format!("{:.2}", value),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_symbol() {
        assert_eq!(format_amount(1234.5, "USD"), "$1,234.50");
        assert_eq!(format_amount(2785.0, "PKR"), "Rs2,785.00");
        assert_eq!(format_amount(0.5, "EUR"), "€0.50");
        assert_eq!(format_amount(1_000_000.0, "JPY"), "¥1,000,000.00");
        assert_eq!(format_amount(999.999, "GBP"), "£1,000.00");
    }

    #[test]
    fn formats_per_locale() {
        assert_eq!(Locale::German.format_amount(1234.5, "EUR"), "€1.234,50");
        assert_eq!(Locale::French.format_amount(1234.5, "EUR"), "€1\u{202f}234,50");
        assert_eq!(Locale::Plain.format_amount(1234.5, "EUR"), "€1234.50");
        assert_eq!(Locale::English.format_number(-1234.5, 2), "-1,234.50");
        assert_eq!(Locale::English.format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_tag("de_DE.UTF-8"), Some(Locale::German));
        assert_eq!(Locale::from_tag("FR"), Some(Locale::French));
        assert_eq!(Locale::from_tag("C"), Some(Locale::Plain));
        assert_eq!(Locale::from_tag("xx"), None);
    }

    #[test]
    fn unknown_codes_fall_back_to_code() {
        assert_eq!(currency_symbol("XYZ"), "XYZ");
        assert_eq!(currency_name("XYZ"), "XYZ");
        assert_eq!(format_amount(5.0, "XYZ"), "XYZ5.00");
    }

    #[test]
    fn rate_line_has_six_decimals() {
        assert_eq!(format_rate(278.5, "USD", "PKR"), "1 USD = 278.500000 PKR");
        assert_eq!(format_rate(0.0036, "PKR", "USD"), "1 PKR = 0.003600 USD");
    }

    #[test]
    fn amount_input_is_tidied() {
        assert_eq!(normalize_amount_input("-5"), "0.01");
        assert_eq!(normalize_amount_input("12.3456"), "12.35");
        assert_eq!(normalize_amount_input("12.3"), "12.3");
        assert_eq!(normalize_amount_input(" 7 "), "7");
        assert_eq!(normalize_amount_input("abc"), "abc");
    }
}
