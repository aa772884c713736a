use thiserror::Error;

use crate::backend::BackendError;
use crate::export::ExportError;
use crate::forms::FormError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request parameters were rejected; the message is safe to show.
    #[error("{0}")]
    Form(String),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
