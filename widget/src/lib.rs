pub mod config;
pub mod error;
pub mod handler;
pub mod service;
pub mod view;
pub mod workflow;

pub use error::WidgetError;
