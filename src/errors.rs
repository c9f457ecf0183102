use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregatorError {
    #[error("Search root not found: {0}")]
    RootNotFound(String),

    #[error("Failed to read file list {0}: {1}")]
    FileList(String, String),

    #[error("Failed to write output to {0}: {1}")]
    Write(String, String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Tokenizer Error: {0}")]
    Tokenizer(String),

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}
