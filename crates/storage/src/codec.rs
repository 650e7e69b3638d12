//! Line codecs
//!
//! One task per line. The store and the console never look at the encoded text, so swapping
//! the comma format for an escaped one only means passing a different `TaskCodec`.

use tareas_core::{Category, Priority, Task, TaskId, UnknownCategory};
use thiserror::Error;

/// Errors decoding a single line
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid id '{0}'")]
    Id(String),

    #[error("id {0} is out of range")]
    IdOutOfRange(TaskId),

    #[error(transparent)]
    Category(#[from] UnknownCategory),

    #[error("invalid priority '{0}'")]
    Priority(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a task to one line of text and back
pub trait TaskCodec {
    /// Encoded line, without the trailing newline
    fn encode(&self, task: &Task) -> String;

    fn decode(&self, line: &str) -> Result<Task, DecodeError>;
}

/// `id,name,description,category,priority`
///
/// Embedded commas are written as-is, so a name or description containing one will not decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvLineCodec;

impl CsvLineCodec {
    const FIELDS: usize = 5;
}

impl TaskCodec for CsvLineCodec {
    fn encode(&self, task: &Task) -> String {
        format!(
            "{},{},{},{},{}",
            task.id,
            task.name,
            task.description,
            task.category,
            task.priority.as_flag()
        )
    }

    fn decode(&self, line: &str) -> Result<Task, DecodeError> {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != Self::FIELDS {
            return Err(DecodeError::FieldCount(parts.len()));
        }

        let id = parts[0]
            .trim()
            .parse::<u64>()
            .map_err(|_| DecodeError::Id(parts[0].to_string()))?;
        let category: Category = parts[3].parse()?;
        let priority =
            Priority::parse_flag(parts[4]).ok_or_else(|| DecodeError::Priority(parts[4].to_string()))?;

        Ok(Task::new(TaskId(id), parts[1], parts[2], category, priority))
    }
}

/// One JSON object per line (escapes commas and newlines)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesCodec;

impl TaskCodec for JsonLinesCodec {
    fn encode(&self, task: &Task) -> String {
        // Task is plain data with string keys; serialization cannot fail.
        serde_json::to_string(task).unwrap_or_default()
    }

    fn decode(&self, line: &str) -> Result<Task, DecodeError> {
        Ok(serde_json::from_str(line)?)
    }
}
