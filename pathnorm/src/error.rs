use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("normalized path is not valid utf-8 (valid up to byte {valid_up_to})")]
    NotUtf8 { valid_up_to: usize },

    #[error("unknown path flavor: {0} (expected posix or windows)")]
    UnknownFlavor(String),

    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

impl From<std::string::FromUtf8Error> for PathError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::NotUtf8 {
            valid_up_to: e.utf8_error().valid_up_to(),
        }
    }
}
