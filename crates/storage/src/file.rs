//! Flat-file persistence
//!
//! Whole-file, synchronous read and write. Loading is all-or-nothing: the first malformed
//! line aborts the load, so callers never see a partial list.

use std::io;
use std::path::Path;

use tareas_core::{Task, TaskId};
use tracing::{debug, warn};

use crate::codec::{DecodeError, TaskCodec};
use crate::error::{Result, StorageError};

/// Fixed data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "tareas.txt";

/// Write every task, one line each, overwriting `path`
pub fn save_tasks(path: &Path, tasks: &[Task], codec: &dyn TaskCodec) -> Result<()> {
    let mut content = String::new();
    for task in tasks {
        content.push_str(&codec.encode(task));
        content.push('\n');
    }

    std::fs::write(path, content)?;
    debug!(path = %path.display(), count = tasks.len(), "tasks saved");
    Ok(())
}

/// Load tasks from `path`
///
/// Returns `Ok(None)` when the file does not exist. Blank lines are skipped.
pub fn load_tasks(path: &Path, codec: &dyn TaskCodec) -> Result<Option<Vec<Task>>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut tasks = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let task = codec
            .decode(line)
            .and_then(|task| {
                if task.id > TaskId::IMPORT_LIMIT {
                    return Err(DecodeError::IdOutOfRange(task.id));
                }
                Ok(task)
            })
            .map_err(|source| {
                warn!(path = %path.display(), line = index + 1, error = %source, "malformed task line");
                StorageError::Malformed {
                    line: index + 1,
                    source,
                }
            })?;
        tasks.push(task);
    }

    debug!(path = %path.display(), count = tasks.len(), "tasks loaded");
    Ok(Some(tasks))
}
