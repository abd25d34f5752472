pub mod error;
pub mod format;
pub mod models;
pub mod render;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
