#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::{
    models::{Catalog, CatalogOrigin, ConversionRequest, ConversionResult, ExchangeOutcome},
    render::{OptionEntry, RenderModel},
    Error, Result,
};
use connectors::{CatalogSource, ConversionBackend};
use widget::view::View;

/// Every call the workflow makes on its view, in order
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Populate(Vec<OptionEntry>),
    Select(Option<String>, Option<String>),
    Symbol(String),
    Submit(bool, String),
    Busy(bool),
    Show(RenderModel),
    Notice(String),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn last_shown(&self) -> Option<&RenderModel> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Show(model) => Some(model),
            _ => None,
        })
    }

    pub fn last_symbol(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            ViewEvent::Symbol(symbol) => Some(symbol.as_str()),
            _ => None,
        })
    }

    pub fn submit_enabled(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Submit(enabled, _) => Some(*enabled),
                _ => None,
            })
            .unwrap_or(true)
    }

    pub fn busy(&self) -> bool {
        self.events
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::Busy(busy) => Some(*busy),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl View for RecordingView {
    fn populate(&mut self, options: &[OptionEntry]) {
        self.events.push(ViewEvent::Populate(options.to_vec()));
    }

    fn select(&mut self, base: Option<&str>, target: Option<&str>) {
        self.events.push(ViewEvent::Select(
            base.map(str::to_string),
            target.map(str::to_string),
        ));
    }

    fn set_symbol(&mut self, symbol: &str) {
        self.events.push(ViewEvent::Symbol(symbol.to_string()));
    }

    fn set_submit(&mut self, enabled: bool, label: &str) {
        self.events.push(ViewEvent::Submit(enabled, label.to_string()));
    }

    fn set_busy(&mut self, busy: bool) {
        self.events.push(ViewEvent::Busy(busy));
    }

    fn show(&mut self, model: &RenderModel) {
        self.events.push(ViewEvent::Show(model.clone()));
    }

    fn notice(&mut self, message: &str) {
        self.events.push(ViewEvent::Notice(message.to_string()));
    }
}

/// Backend answering every request with the same canned reply
pub enum Reply {
    Rate(f64),
    Rejected(Option<String>),
    Status(u16),
    /// Never answers
    Hang,
}

pub struct FakeBackend {
    reply: Reply,
    pub requests: Mutex<Vec<ConversionRequest>>,
}

impl FakeBackend {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ConversionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ConversionBackend for FakeBackend {
    async fn convert(&self, request: &ConversionRequest) -> Result<ExchangeOutcome> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Rate(rate) => Ok(ExchangeOutcome::Converted(ConversionResult {
                base_currency: request.base.clone(),
                target_currency: request.target.clone(),
                amount: request.amount,
                converted_amount: (request.amount * rate * 100.0).round() / 100.0,
                exchange_rate: *rate,
            })),
            Reply::Rejected(message) => Ok(ExchangeOutcome::Rejected(message.clone())),
            Reply::Status(code) => Err(Error::StatusError(*code)),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Catalog service with a canned answer
pub struct FakeSource {
    names: Option<BTreeMap<String, String>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn names(pairs: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            names: Some(
                pairs
                    .iter()
                    .map(|(c, n)| (c.to_string(), n.to_string()))
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            names: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_currencies(&self) -> Result<BTreeMap<String, String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.names
            .clone()
            .ok_or_else(|| Error::ParseError("service unreachable".to_string()))
    }
}

pub fn usd_pkr_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_names(
        [("USD", "United States Dollar"), ("PKR", "Pakistani Rupee")],
        CatalogOrigin::Service,
    ))
}
