// ==========================================
// Lastmanagement Dashboard - API Error Types
// ==========================================
// User-facing error type of the facade; wraps the
// layer errors and keeps the reason explicit.
// ==========================================

use crate::engine::projection::ProjectionError;
use crate::importer::ImportError;
use thiserror::Error;

/// API-layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("import failed: {0}")]
    Import(#[from] ImportError),

    #[error("projection failed: {0}")]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the API layer
pub type ApiResult<T> = Result<T, ApiError>;
