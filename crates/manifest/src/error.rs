//! Error types for script generation.

/// Errors produced while writing a generated script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
