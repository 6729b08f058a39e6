use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while constructing a session or reloading its models.
///
/// Runtime classification errors are not represented here; they stay in-band
/// as negative raw codes carried by the session-level result enums.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("resource bundle not found: {path:?}")]
    ResourceNotFound { path: PathBuf },

    #[error("hotword model not found: {path:?}")]
    ModelNotFound { path: PathBuf },

    #[error("invalid model specification: {0}")]
    InvalidModelSpec(String),

    #[error("engine initialization failed: {0}")]
    Init(String),

    #[error("model reload failed: {0}")]
    ModelReload(String),
}
