//! Console - 文本菜单控制器
//!
//! 状态机：
//! - MenuPrompt: 显示菜单并读取选项
//! - Create / Filter / Delete / Export / Import: 单次操作，结束后回到 MenuPrompt
//! - Exit: 终止状态
//!
//! The console is generic over its input and output streams, so a session can be driven by
//! canned input and its transcript inspected afterwards.

use std::io::{BufRead, Write};

use tareas_core::{
    decode_line, parse_category, parse_priority, parse_task_id, validate_text, Category,
};
use tareas_storage::{load_tasks, save_tasks, CsvLineCodec, TaskCodec, TaskStore};
use tracing::{debug, info};

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Console state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    MenuPrompt,
    Create,
    Filter,
    Delete,
    Export,
    Import,
    Exit,
}

impl ConsoleState {
    /// Map a menu choice ("1".."6") to the state it selects
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(ConsoleState::Create),
            "2" => Some(ConsoleState::Filter),
            "3" => Some(ConsoleState::Delete),
            "4" => Some(ConsoleState::Export),
            "5" => Some(ConsoleState::Import),
            "6" => Some(ConsoleState::Exit),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == ConsoleState::Exit
    }
}

const MENU: &str = "\n--- TASK MANAGER ---
1. Create task
2. Find tasks by category
3. Delete task
4. Export tasks
5. Import tasks
6. Exit";

/// Text console over a task store
pub struct Console<R, W> {
    config: ConsoleConfig,
    store: TaskStore,
    codec: Box<dyn TaskCodec>,
    input: R,
    output: W,
    state: ConsoleState,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            config,
            store: TaskStore::new(),
            codec: Box::new(CsvLineCodec),
            input,
            output,
            state: ConsoleState::MenuPrompt,
        }
    }

    /// Use a different line format for export / import
    pub fn with_codec(mut self, codec: impl TaskCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the Exit state
    pub fn run(&mut self) -> Result<()> {
        info!("console started");
        while !self.state.is_terminal() {
            self.step()?;
        }
        self.output.flush()?;
        info!("console exited");
        Ok(())
    }

    /// Execute the current state and move to the next one
    ///
    /// Recoverable errors are printed and the machine returns to the menu. Only failures of
    /// the console streams are returned.
    pub fn step(&mut self) -> Result<ConsoleState> {
        let current = self.state;
        let outcome = match current {
            ConsoleState::MenuPrompt => self.menu(),
            ConsoleState::Create => self.create().map(|_| ConsoleState::MenuPrompt),
            ConsoleState::Filter => self.filter().map(|_| ConsoleState::MenuPrompt),
            ConsoleState::Delete => self.delete().map(|_| ConsoleState::MenuPrompt),
            ConsoleState::Export => self.export().map(|_| ConsoleState::MenuPrompt),
            ConsoleState::Import => self.import().map(|_| ConsoleState::MenuPrompt),
            ConsoleState::Exit => Ok(ConsoleState::Exit),
        };

        let next = match outcome {
            Ok(next) => next,
            Err(e) if e.is_recoverable() => {
                debug!(state = ?current, error = %e, "operation aborted");
                writeln!(self.output, "{}", e.user_message())?;
                ConsoleState::MenuPrompt
            }
            Err(e) => return Err(e),
        };

        debug!(from = ?current, to = ?next, "state transition");
        self.state = next;
        Ok(next)
    }

    fn menu(&mut self) -> Result<ConsoleState> {
        writeln!(self.output, "{MENU}")?;
        let prompt = self.config.prompt.clone();
        let Some(choice) = self.ask(&prompt)? else {
            // end of input
            return Ok(ConsoleState::Exit);
        };

        match ConsoleState::from_choice(&choice) {
            Some(next) => Ok(next),
            None => {
                writeln!(self.output, "Invalid option, try again.")?;
                Ok(ConsoleState::MenuPrompt)
            }
        }
    }

    fn create(&mut self) -> Result<()> {
        let name = self.answer("Name: ")?;
        let name = validate_text("name", &name)?;

        let description = self.answer("Description: ")?;
        let description = validate_text("description", &description)?;

        let category = self.answer(&format!("Category ({}): ", Category::choices()))?;
        let category = parse_category(&category)?;

        let priority = self.answer("High priority? (true/false): ")?;
        let priority = parse_priority(&priority)?;

        let task = self.store.create(name, description, category, priority);
        info!(id = %task.id, "task created from console");
        writeln!(self.output, "Task created successfully!")?;
        Ok(())
    }

    fn filter(&mut self) -> Result<()> {
        let prompt = format!("Enter the category to search ({}): ", Category::choices());
        let category = self.answer(&prompt)?;
        let category = parse_category(&category)?;

        writeln!(self.output, "\nTasks of category {category}:")?;
        for task in self.store.filter_by_category(category) {
            writeln!(self.output, "{task}")?;
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let answer = self.answer("Enter the ID of the task to delete: ")?;
        let Some(id) = parse_task_id(&answer)? else {
            writeln!(self.output, "No task found with ID {}.", answer.trim())?;
            return Ok(());
        };

        self.store.delete_by_id(id)?;
        writeln!(self.output, "Task deleted successfully.")?;
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        save_tasks(&self.config.data_file, self.store.tasks(), self.codec.as_ref())?;
        info!(path = %self.config.data_file.display(), count = self.store.len(), "tasks exported");
        writeln!(self.output, "Tasks exported to {}", self.config.data_file.display())?;
        Ok(())
    }

    fn import(&mut self) -> Result<()> {
        match load_tasks(&self.config.data_file, self.codec.as_ref())? {
            Some(tasks) => {
                self.store.replace_all(tasks);
                writeln!(self.output, "Tasks imported successfully.")?;
            }
            None => {
                writeln!(self.output, "File {} not found.", self.config.data_file.display())?;
            }
        }
        Ok(())
    }

    /// Prompt and read one line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = decode_line(buf)?;
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for a field; end of input reads as an empty answer
    fn answer(&mut self, prompt: &str) -> Result<String> {
        Ok(self.ask(prompt)?.unwrap_or_default())
    }
}
