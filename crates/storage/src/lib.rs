// Tareas Storage Layer
//
// In-memory task store plus flat-file persistence behind a pluggable line codec

pub mod codec;
pub mod error;
pub mod file;
pub mod store;

pub use codec::{CsvLineCodec, DecodeError, JsonLinesCodec, TaskCodec};
pub use error::{Result, StorageError};
pub use file::{load_tasks, save_tasks, DEFAULT_DATA_FILE};
pub use store::{IdGenerator, TaskStore};
