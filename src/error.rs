use crate::kind::NodeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SarifError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unknown node kind: {0}")]
    UnknownKind(String),

    #[error("Node kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: NodeKind, found: NodeKind },

    #[error("Cannot copy {0} from a null source")]
    NullSource(NodeKind),

    #[error("Cannot rewrite a null root node")]
    NullRoot,

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
