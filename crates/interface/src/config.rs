//! Console configuration

use std::path::PathBuf;

use tareas_storage::DEFAULT_DATA_FILE;

/// Console 配置
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Export / import target
    pub data_file: PathBuf,

    /// Menu prompt
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            prompt: "Select an option: ".to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
