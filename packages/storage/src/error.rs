use formcraft_document::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Export(#[from] ExportError),

    #[error("invalid document key: {0}")]
    InvalidKey(String),
}
