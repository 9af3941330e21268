//! Error types for session operations.

use crate::dataset::DatasetError;
use crate::export::ExportError;
use crate::parsing::InputParseError;

use super::store::SessionId;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Error type for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("No dataset loaded")]
    NoDataset,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Input error: {0}")]
    Input(#[from] InputParseError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
