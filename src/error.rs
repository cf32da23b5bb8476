use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClyperError {
    #[error("Could not find home directory")]
    HomeDirNotFound,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize data file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Clipboard command failed: {0}")]
    ClipboardCommand(String),

    #[error("Input closed before an answer was given")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, ClyperError>;
