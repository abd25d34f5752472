//! Selection state and the validate -> convert -> settle workflow.

use std::sync::Arc;

use common::{
    format::{currency_symbol, normalize_amount_input, Locale},
    models::{
        Catalog, ConversionRequest, ExchangeOutcome, FailureReason, WorkflowState, DEFAULT_BASE,
        DEFAULT_TARGET,
    },
    render::{
        loading_options, render, selection_options, RenderModel, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
    },
};
use connectors::ConversionBackend;
use tracing::{debug, error, info};

use crate::{view::View, WidgetError};

/// What the user has picked so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub base: Option<String>,
    pub target: Option<String>,
    /// Amount exactly as typed
    pub amount: String,
}

impl Selection {
    /// Exchanges source and target. Does nothing unless both are selected.
    pub fn swap(&mut self) -> bool {
        if self.base.is_none() || self.target.is_none() {
            return false;
        }
        std::mem::swap(&mut self.base, &mut self.target);
        true
    }
}

/// Empty input means one unit.
pub fn parse_amount(input: &str) -> Result<f64, FailureReason> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(1.0);
    }

    match input.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FailureReason::InvalidAmount),
    }
}

/// Checks a selection without touching the network. An unselected source or
/// target falls back to USD or PKR, whether or not the catalog lists them.
pub fn validate(selection: &Selection) -> Result<ConversionRequest, FailureReason> {
    let base = selection
        .base
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE.to_string());
    let target = selection
        .target
        .clone()
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    if base.trim().is_empty() || target.trim().is_empty() {
        return Err(FailureReason::SelectionRequired);
    }

    if base == target {
        return Err(FailureReason::SameCurrency);
    }

    let amount = parse_amount(&selection.amount)?;

    Ok(ConversionRequest {
        base,
        target,
        amount,
    })
}

/// Restores the submit control and hides the busy indicator when dropped, so
/// every exit from an in-flight conversion settles the view.
struct Settle<'a, V: View> {
    view: &'a mut V,
}

impl<'a, V: View> Settle<'a, V> {
    fn begin(view: &'a mut V) -> Self {
        view.set_submit(false, SUBMIT_BUSY_LABEL);
        view.set_busy(true);
        view.show(&RenderModel::Empty);
        Self { view }
    }
}

impl<V: View> Drop for Settle<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit(true, SUBMIT_LABEL);
        self.view.set_busy(false);
    }
}

/// The converter: selection state, workflow state and the view they drive.
///
/// Submissions take `&mut self`, so a second conversion cannot start until the
/// previous one has settled.
pub struct ConverterWidget<V: View> {
    backend: Arc<dyn ConversionBackend>,
    view: V,
    catalog: Arc<Catalog>,
    selection: Selection,
    state: WorkflowState,
    locale: Locale,
}

impl<V: View> ConverterWidget<V> {
    pub fn new(
        backend: Arc<dyn ConversionBackend>,
        view: V,
        catalog: Arc<Catalog>,
        locale: Locale,
    ) -> Self {
        Self {
            backend,
            view,
            catalog,
            selection: Selection::default(),
            state: WorkflowState::Idle,
            locale,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Puts both selects into their loading placeholder.
    pub fn show_loading_catalog(&mut self) {
        self.view.populate(&loading_options());
    }

    /// Adopts a catalog snapshot: repopulates both selects and resets the
    /// selections to the defaults the catalog carries.
    pub fn apply_catalog(&mut self, catalog: Arc<Catalog>) {
        self.selection.base = catalog.default_base().map(str::to_string);
        self.selection.target = catalog.default_target().map(str::to_string);
        self.catalog = catalog;

        self.list_options();
        self.view
            .select(self.selection.base.as_deref(), self.selection.target.as_deref());
        self.on_base_change();
    }

    /// Redraws the selects from the current catalog.
    pub fn list_options(&mut self) {
        self.view.populate(&selection_options(&self.catalog));
    }

    /// Keeps the amount glyph in step with the source currency.
    pub fn on_base_change(&mut self) {
        if let Some(base) = self.selection.base.as_deref() {
            self.view.set_symbol(currency_symbol(base));
        }
    }

    /// Selects a source currency; an empty code clears the selection.
    pub fn select_base(&mut self, code: &str) -> Result<(), WidgetError> {
        self.selection.base = self.resolve(code)?;
        self.view
            .select(self.selection.base.as_deref(), self.selection.target.as_deref());
        self.on_base_change();
        Ok(())
    }

    /// Selects a target currency; an empty code clears the selection.
    pub fn select_target(&mut self, code: &str) -> Result<(), WidgetError> {
        self.selection.target = self.resolve(code)?;
        self.view
            .select(self.selection.base.as_deref(), self.selection.target.as_deref());
        Ok(())
    }

    pub fn set_amount(&mut self, input: &str) {
        self.selection.amount = normalize_amount_input(input);
    }

    /// Swaps source and target. When an outcome is on screen the conversion is
    /// re-run so it matches the visible selection.
    pub async fn swap(&mut self) -> bool {
        if !self.selection.swap() {
            debug!("Swap ignored, both currencies must be selected");
            return false;
        }

        self.view
            .select(self.selection.base.as_deref(), self.selection.target.as_deref());
        self.on_base_change();

        if self.state.is_displayed() {
            self.submit().await;
        }
        true
    }

    /// Runs one submission through validate, request and settle.
    pub async fn submit(&mut self) -> &WorkflowState {
        self.state = WorkflowState::Validating;

        let request = match validate(&self.selection) {
            Ok(request) => request,
            Err(reason) => {
                debug!("Validation failed: {}", reason);
                self.state = WorkflowState::Failure(reason);
                self.view.show(&render(&self.state, self.locale));
                return &self.state;
            }
        };

        self.state = WorkflowState::Loading;
        let settle = Settle::begin(&mut self.view);

        info!(
            "Converting {} {} to {}",
            request.amount, request.base, request.target
        );
        self.state = match self.backend.convert(&request).await {
            Ok(ExchangeOutcome::Converted(result)) => WorkflowState::Success(result),
            Ok(ExchangeOutcome::Rejected(message)) => {
                debug!("Conversion rejected: {:?}", message);
                WorkflowState::Failure(FailureReason::ConversionUnavailable(message))
            }
            Err(e) => {
                error!("Conversion error: {}", e);
                WorkflowState::Failure(FailureReason::NetworkError)
            }
        };

        settle.view.show(&render(&self.state, self.locale));
        drop(settle);
        &self.state
    }

    fn resolve(&self, code: &str) -> Result<Option<String>, WidgetError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Ok(None);
        }
        match self.catalog.get(&code) {
            Some(currency) => Ok(Some(currency.code.clone())),
            None => Err(WidgetError::UnknownCurrency(code)),
        }
    }
}
