//! Storage errors

use tareas_core::TaskId;
use thiserror::Error;

use crate::codec::DecodeError;

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: DecodeError,
    },

    #[error("No task found with ID {0}")]
    NotFound(TaskId),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
