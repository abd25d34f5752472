use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),
}
