//! Accountant crate error types.

/// Failure to load or store a step configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the expected shape.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
