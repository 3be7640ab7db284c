use crate::shared::infrastructure::document_store::DocumentStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] DocumentStoreError),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),
}
