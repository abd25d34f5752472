mod catalog;
mod conversion;
mod currency;
mod state;

pub use catalog::{Catalog, CatalogOrigin, DEFAULT_BASE, DEFAULT_TARGET};
pub use conversion::{ConversionRequest, ConversionResult, ExchangeOutcome};
pub use currency::Currency;
pub use state::{FailureReason, WorkflowState};
