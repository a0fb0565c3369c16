use thiserror::Error;

/// Raised when a document cannot be loaded at all. Anything less — a broken
/// reference, a malformed sub-node — degrades to an absent value instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),
}
