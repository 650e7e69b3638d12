//! Task management core types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// First identifier handed out by a fresh store
    pub const FIRST: TaskId = TaskId(1);

    /// Largest identifier accepted from a data file. Everything above is kept free so the
    /// generator can always hand out a fresh id after an import.
    pub const IMPORT_LIMIT: TaskId = TaskId(i64::MAX as u64);

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task category (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Work,
    Leisure,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Personal, Category::Work, Category::Leisure];

    /// Literal variant name, as written to the data file
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Leisure => "Leisure",
        }
    }

    /// "Personal, Work, Leisure"
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive match on the variant name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Task priority flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn from_bool(high: bool) -> Self {
        if high { Priority::High } else { Priority::Normal }
    }

    pub fn is_high(self) -> bool {
        matches!(self, Priority::High)
    }

    /// Parse a boolean literal (`true` / `false`, any case)
    pub fn parse_flag(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(Priority::High)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(Priority::Normal)
        } else {
            None
        }
    }

    /// `True` / `False`, as written to the data file
    pub fn as_flag(self) -> &'static str {
        if self.is_high() { "True" } else { "False" }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
        }
    }
}

/// Core task structure
///
/// Fields are fixed once the task exists; the store only ever inserts or removes whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl Task {
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            priority,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Description: {}, Category: {}, Priority: {}",
            self.id,
            self.name,
            self.description,
            self.category,
            self.priority.label()
        )
    }
}
