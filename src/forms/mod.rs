//! Request parameter definitions backing the console routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod list;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("Invalid list parameters: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    QueryString(String),

    #[error("{field} must be a positive whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
