//! Pure `state -> render model` functions plus the renderers that turn a model
//! into text for a particular surface.

use serde::{Deserialize, Serialize};

use crate::format::{currency_name, format_rate, Locale};
use crate::models::{Catalog, ConversionResult, FailureReason, WorkflowState};

pub const SUBMIT_LABEL: &str = "Convert Now";
pub const SUBMIT_BUSY_LABEL: &str = "Converting...";
pub const UNSELECTED_LABEL: &str = "Select currency...";
pub const LOADING_LABEL: &str = "Loading currencies...";

const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
const UNAVAILABLE_MESSAGE: &str = "Unable to fetch exchange rates. Please try again.";

/// One entry of a currency selection widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionEntry {
    /// Currency code, empty for the unselected entry
    pub value: String,
    pub label: String,
}

/// Blank entry followed by one `CODE - Name` entry per currency.
pub fn selection_options(catalog: &Catalog) -> Vec<OptionEntry> {
    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(OptionEntry {
        value: String::new(),
        label: UNSELECTED_LABEL.to_string(),
    });
    options.extend(catalog.currencies().iter().map(|c| OptionEntry {
        value: c.code.clone(),
        label: c.label(),
    }));
    options
}

/// Placeholder shown while the catalog is being fetched.
pub fn loading_options() -> Vec<OptionEntry> {
    vec![OptionEntry {
        value: String::new(),
        label: LOADING_LABEL.to_string(),
    }]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    /// `USD - US Dollar`
    pub source: String,
    /// `PKR - Pakistani Rupee`
    pub target: String,
    /// `1 USD = 278.500000 PKR`
    pub rate: String,
    pub original_amount: String,
    /// Emphasized in every renderer
    pub converted_amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCard {
    pub icon: String,
    pub title: String,
    pub message: String,
}

/// Structured content of the result region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderModel {
    Empty,
    Result(ResultCard),
    Error(ErrorCard),
}

impl RenderModel {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderModel::Empty)
    }
}

pub fn render_success(result: &ConversionResult, locale: Locale) -> ResultCard {
    let base = result.base_currency.as_str();
    let target = result.target_currency.as_str();

    ResultCard {
        title: "Conversion Complete".to_string(),
        source: format!("{} - {}", base, currency_name(base)),
        target: format!("{} - {}", target, currency_name(target)),
        rate: format_rate(result.exchange_rate, base, target),
        original_amount: locale.format_amount(result.amount, base),
        converted_amount: locale.format_amount(result.converted_amount, target),
    }
}

pub fn render_failure(reason: &FailureReason) -> ErrorCard {
    let (icon, title, message) = match reason {
        FailureReason::SelectionRequired => (
            "❌",
            "Selection Required",
            "Please select both source and target currencies to continue.",
        ),
        FailureReason::SameCurrency => (
            "⚠️",
            "Same Currency",
            "Please select different currencies for conversion.",
        ),
        FailureReason::InvalidAmount => (
            "💰",
            "Invalid Amount",
            "Please enter a valid positive amount to convert.",
        ),
        FailureReason::NetworkError => ("🌐", "Conversion Failed", NETWORK_ERROR_MESSAGE),
        FailureReason::ConversionUnavailable(message) => (
            "🌐",
            "Conversion Failed",
            message.as_deref().unwrap_or(UNAVAILABLE_MESSAGE),
        ),
    };

    ErrorCard {
        icon: icon.to_string(),
        title: title.to_string(),
        message: message.to_string(),
    }
}

/// The result region for a workflow state. In-flight states show nothing.
pub fn render(state: &WorkflowState, locale: Locale) -> RenderModel {
    match state {
        WorkflowState::Success(result) => RenderModel::Result(render_success(result, locale)),
        WorkflowState::Failure(reason) => RenderModel::Error(render_failure(reason)),
        WorkflowState::Idle | WorkflowState::Validating | WorkflowState::Loading => {
            RenderModel::Empty
        }
    }
}

/// Turns a render model into output for one surface
pub trait Renderer: Send + Sync {
    fn render(&self, model: &RenderModel) -> String;
}

/// Plain text for terminals
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, model: &RenderModel) -> String {
        match model {
            RenderModel::Empty => String::new(),
            RenderModel::Result(card) => format!(
                "💫 {}\n  Source Currency:  {}\n  Target Currency:  {}\n  Exchange Rate:    {}\n  Original Amount:  {}\n  Converted Amount: ** {} **",
                card.title,
                card.source,
                card.target,
                card.rate,
                card.original_amount,
                card.converted_amount
            ),
            RenderModel::Error(card) => format!("{} {}\n  {}", card.icon, card.title, card.message),
        }
    }
}

/// HTML fragments for the result region of a page
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, model: &RenderModel) -> String {
        match model {
            RenderModel::Empty => String::new(),
            RenderModel::Result(card) => {
                let item = |label: &str, value: &str| {
                    format!(
                        r#"<div class="result-item"><span class="result-label">{}:</span><span class="result-value">{}</span></div>"#,
                        label,
                        escape_html(value)
                    )
                };

                format!(
                    r#"<div class="result-card"><div class="result-header"><h3 class="result-title"><span class="result-icon">💫</span>{}</h3></div><div class="result-grid">{}{}{}{}<div class="result-item result-total"><span class="result-label">Converted Amount:</span><div class="result-highlight">{}</div></div></div></div>"#,
                    escape_html(&card.title),
                    item("Source Currency", &card.source),
                    item("Target Currency", &card.target),
                    item("Exchange Rate", &card.rate),
                    item("Original Amount", &card.original_amount),
                    escape_html(&card.converted_amount)
                )
            }
            RenderModel::Error(card) => format!(
                r#"<div class="error-card"><div class="error-header"><span class="error-icon">{}</span><h3 class="error-title">{}</h3></div><p>{}</p></div>"#,
                card.icon,
                escape_html(&card.title),
                escape_html(&card.message)
            ),
        }
    }
}

// Backend messages are untrusted.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
