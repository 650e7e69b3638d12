//! In-memory task store
//!
//! Keeps tasks in insertion order and owns the identifier generator.

use tareas_core::{Category, Priority, Task, TaskId};
use tracing::{debug, info};

use crate::error::{Result, StorageError};

/// Monotonic identifier generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGenerator {
    next: TaskId,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { next: TaskId::FIRST }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next call to `allocate` will return
    pub fn peek(&self) -> TaskId {
        self.next
    }

    pub fn allocate(&mut self) -> TaskId {
        let id = self.next;
        self.next = id.next();
        id
    }

    /// Moves past `id` if it is not already behind us. Never moves backwards.
    pub fn observe(&mut self, id: TaskId) {
        if id >= self.next {
            self.next = id.next();
        }
    }
}

/// In-memory task store
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task with the next identifier and append it
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
    ) -> &Task {
        let id = self.ids.allocate();
        let task = Task::new(id, name, description, category, priority);
        debug!(%id, category = %task.category, "task created");
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Tasks of `category`, in insertion order
    pub fn filter_by_category(&self, category: Category) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.category == category)
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StorageError::NotFound(id))?;
        let removed = self.tasks.remove(index);
        debug!(%id, "task deleted");
        Ok(removed)
    }

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the whole collection, advancing the generator past every loaded id
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        for task in &tasks {
            self.ids.observe(task.id);
        }
        info!(count = tasks.len(), next_id = %self.ids.peek(), "task list replaced");
        self.tasks = tasks;
    }

    pub fn next_id(&self) -> TaskId {
        self.ids.peek()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
