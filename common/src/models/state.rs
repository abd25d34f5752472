use serde::{Deserialize, Serialize};

use crate::models::ConversionResult;

/// Why a submission ended without a result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FailureReason {
    /// Source or target is not selected
    #[serde(rename = "selection-required")]
    SelectionRequired,
    /// Source and target are the same currency
    #[serde(rename = "same-currency")]
    SameCurrency,
    /// Amount is non-numeric, non-finite, or not positive
    #[serde(rename = "invalid-amount")]
    InvalidAmount,
    /// HTTP failure, transport failure, or an unreadable payload
    #[serde(rename = "network-error")]
    NetworkError,
    /// Backend answered but reported a non-success status
    #[serde(rename = "conversion-unavailable")]
    ConversionUnavailable(Option<String>),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::SelectionRequired => write!(f, "selection-required"),
            FailureReason::SameCurrency => write!(f, "same-currency"),
            FailureReason::InvalidAmount => write!(f, "invalid-amount"),
            FailureReason::NetworkError => write!(f, "network-error"),
            FailureReason::ConversionUnavailable(Some(message)) => write!(f, "{}", message),
            FailureReason::ConversionUnavailable(None) => write!(f, "conversion-unavailable"),
        }
    }
}

/// Where the conversion workflow currently stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    Validating,
    Loading,
    Success(ConversionResult),
    Failure(FailureReason),
}

impl WorkflowState {
    /// True when a result or an error card is on screen.
    pub fn is_displayed(&self) -> bool {
        matches!(self, WorkflowState::Success(_) | WorkflowState::Failure(_))
    }
}
