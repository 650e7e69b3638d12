//! Console errors

use tareas_core::InputError;
use tareas_storage::StorageError;
use thiserror::Error;

/// Console Errors
///
/// `Input` and `Storage` abort the current operation and are reported on the console.
/// `Io` means the console streams themselves failed and ends the session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ConsoleError {
    /// Whether the session can continue after reporting this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConsoleError::Io(_))
    }

    /// Line shown to the user for a recoverable error
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Input(e) => e.to_string(),
            ConsoleError::Storage(StorageError::NotFound(id)) => {
                format!("No task found with ID {id}.")
            }
            ConsoleError::Storage(e @ StorageError::Malformed { .. }) => {
                format!("Import failed: {e}")
            }
            ConsoleError::Storage(StorageError::Io(e)) => format!("File error: {e}"),
            ConsoleError::Io(e) => e.to_string(),
        }
    }
}
