/// Why a description could not be accepted on a strict path (raw-mode edits,
/// saving while in raw mode). The lenient parser never produces these.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptionError {
    #[error("Invalid JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("Description must be a JSON array of blocks")]
    NotAnArray,
    #[error("Block {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("Table block {index} needs `headers` and `rows` to both be arrays")]
    InvalidTable { index: usize },
    #[error("Failed to serialize description: {0}")]
    Serialize(String),
}

impl DescriptionError {
    pub(crate) fn invalid_json(err: &serde_json::Error) -> Self {
        DescriptionError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
