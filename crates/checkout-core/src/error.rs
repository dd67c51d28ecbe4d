//! Error Types for Checkout Core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unrecognized contribution interval: {0:?}")]
    UnknownInterval(String),
}
