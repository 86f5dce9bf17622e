//! Interactive menu loop driving a [`TaskManager`]
//!
//! The shell owns the manager for the lifetime of the session. Task numbers
//! typed by the user are 1-based and converted to 0-based indexes here.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use thiserror::Error;
use tracing::debug;

use super::definition::Cli;
use super::{render, MenuChoice};
use crate::task::{Task, TaskError, TaskManager};

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub color: bool,
    pub clear_screen: bool,
    pub date_format: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            date_format: crate::task::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl From<&Cli> for ShellOptions {
    fn from(cli: &Cli) -> Self {
        let no_color_env = std::env::var("NO_COLOR").ok();
        Self {
            color: render::color_enabled(cli.no_color, no_color_env.as_deref()),
            clear_screen: !cli.no_clear,
            date_format: cli.date_format.clone(),
        }
    }
}

#[derive(Debug, Error)]
enum ShellError {
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("{0}")]
    Input(String),

    #[error("end of input")]
    Eof,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type ActionResult = std::result::Result<String, ShellError>;

pub struct Shell<R, W> {
    manager: TaskManager,
    input: R,
    output: W,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self::with_manager(TaskManager::new(), input, output, options)
    }

    pub fn with_manager(manager: TaskManager, input: R, output: W, options: ShellOptions) -> Self {
        Self {
            manager,
            input,
            output,
            options,
        }
    }

    pub fn into_parts(self) -> (TaskManager, W) {
        (self.manager, self.output)
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.options.clear_screen {
                execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            render::categories(&mut self.output, &self.manager.category_names())?;
            render::menu(&mut self.output)?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };
            let choice = MenuChoice::parse(&line);
            debug!(input = line.trim(), ?choice, "menu selection");

            let result = match choice {
                Some(MenuChoice::Quit) => break,
                Some(choice) => self.dispatch(choice),
                None => Err(ShellError::Input(format!(
                    "Unknown option '{}'.",
                    line.trim()
                ))),
            };

            match result {
                Ok(message) if message.is_empty() => {}
                Ok(message) => writeln!(self.output, "{}", message)?,
                Err(ShellError::Eof) => break,
                Err(ShellError::Io(err)) => return Err(err.into()),
                Err(err) => writeln!(self.output, "{}", err)?,
            }

            if self.prompt("Press Enter to continue...")?.is_none() {
                break;
            }
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ActionResult {
        match choice {
            MenuChoice::AddCategory => {
                let name = self.read_category("Enter the new category name: ")?;
                self.manager.add_category(&name)?;
                Ok(format!("Category '{}' added successfully.", name))
            }
            MenuChoice::DeleteCategory => {
                let name = self.read_category("Enter the category name to delete: ")?;
                self.manager.delete_category(&name)?;
                Ok(format!("Category '{}' deleted successfully.", name))
            }
            MenuChoice::DisplayTasks => {
                render::tasks(
                    &mut self.output,
                    &self.manager.list_all_tasks(),
                    &self.options.date_format,
                    self.options.color,
                )?;
                Ok(String::new())
            }
            MenuChoice::AddTask => {
                let category = self.read_category("Enter the category name: ")?;
                let description = self.read_required("Describe your task: ")?;
                let label = format!("Enter the due date ({}): ", self.options.date_format);
                let due = self.read_date(&label)?;
                self.manager
                    .add_task(&category, Task::new(description, due))?;
                Ok("Task added successfully.".to_string())
            }
            MenuChoice::DeleteTask => {
                let category = self.read_category("Enter the category name: ")?;
                let index = self.read_index("Enter the task number to delete: ")?;
                self.manager.delete_task(&category, index)?;
                Ok("Task deleted successfully.".to_string())
            }
            MenuChoice::MoveWithinCategory => {
                let category = self.read_category("Enter the category name: ")?;
                let from = self.read_index("Enter the task number to move: ")?;
                let to = self.read_index("Enter the new position: ")?;
                self.manager
                    .move_task_within_category(&category, from, to)?;
                Ok("Task moved successfully.".to_string())
            }
            MenuChoice::MoveBetweenCategories => {
                let source = self.read_category("Enter the source category name: ")?;
                let index = self.read_index("Enter the task number to move: ")?;
                let destination = self.read_category("Enter the destination category name: ")?;
                self.manager
                    .move_task_between_categories(&source, index, &destination)?;
                Ok("Task moved successfully.".to_string())
            }
            MenuChoice::HighlightTask => {
                let category = self.read_category("Enter the category name: ")?;
                let index = self.read_index("Enter the task number to highlight: ")?;
                self.manager.highlight_task(&category, index)?;
                Ok("Task highlighted successfully.".to_string())
            }
            MenuChoice::Export => Ok(serde_json::to_string_pretty(
                &self.manager.list_all_tasks(),
            )?),
            MenuChoice::Quit => Ok(String::new()),
        }
    }

    /// Print `label` and read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_required(&mut self, label: &str) -> std::result::Result<String, ShellError> {
        let line = self.prompt(label)?.ok_or(ShellError::Eof)?;
        let value = line.trim();
        if value.is_empty() {
            return Err(ShellError::Input("A value is required.".to_string()));
        }
        Ok(value.to_string())
    }

    fn read_category(&mut self, label: &str) -> std::result::Result<String, ShellError> {
        match self.read_required(label) {
            Err(ShellError::Input(_)) => {
                let message = "Category name cannot be empty.".to_string();
                Err(ShellError::Input(message))
            }
            other => other,
        }
    }

    fn read_index(&mut self, label: &str) -> std::result::Result<usize, ShellError> {
        let raw = self.read_required(label)?;
        let number: usize = raw
            .parse()
            .map_err(|_| ShellError::Input(format!("'{}' is not a valid number.", raw)))?;
        number
            .checked_sub(1)
            .ok_or_else(|| ShellError::Input("Task numbers start at 1.".to_string()))
    }

    fn read_date(&mut self, label: &str) -> std::result::Result<NaiveDate, ShellError> {
        let raw = self.read_required(label)?;
        NaiveDate::parse_from_str(&raw, &self.options.date_format).map_err(|_| {
            ShellError::Input(format!(
                "'{}' is not a valid date (expected {}).",
                raw, self.options.date_format
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> ShellOptions {
        ShellOptions {
            color: false,
            clear_screen: false,
            ..ShellOptions::default()
        }
    }

    fn run(script: &str) -> (TaskManager, String) {
        let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), options());
        shell.run().unwrap();
        let (manager, out) = shell.into_parts();
        (manager, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (manager, out) = run("q\n");
        assert!(manager.category_names().is_empty());
        assert!(out.contains("Choose an option: "));
        assert!(!out.contains("Press Enter"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (_, out) = run("");
        assert!(out.contains("Categories:"));
    }

    #[test]
    fn test_add_category_message() {
        let (manager, out) = run("1\nWork\n\nq\n");
        assert_eq!(manager.category_names(), vec!["Work"]);
        assert!(out.contains("Category 'Work' added successfully."));
        assert!(out.contains("- Work"));
    }

    #[test]
    fn test_duplicate_category_message() {
        let (manager, out) = run("1\nWork\n\n1\nWork\n\nq\n");
        assert_eq!(manager.category_names().len(), 1);
        assert!(out.contains("Category 'Work' already exists."));
    }

    #[test]
    fn test_unknown_option() {
        let (_, out) = run("x\n\nq\n");
        assert!(out.contains("Unknown option 'x'."));
    }

    #[test]
    fn test_task_number_zero_rejected() {
        let (_, out) = run("1\nWork\n\n5\nWork\n0\n\nq\n");
        assert!(out.contains("Task numbers start at 1."));
    }

    #[test]
    fn test_bad_number_rejected() {
        let (_, out) = run("1\nWork\n\n8\nWork\nfirst\n\nq\n");
        assert!(out.contains("'first' is not a valid number."));
    }

    #[test]
    fn test_bad_date_rejected() {
        let (manager, out) = run("1\nWork\n\n4\nWork\nReport\n31/12/2026\n\nq\n");
        assert!(manager.category("Work").unwrap().is_empty());
        assert!(out.contains("'31/12/2026' is not a valid date (expected %Y-%m-%d)."));
    }

    #[test]
    fn test_empty_category_name_rejected() {
        let (manager, out) = run("1\n   \n\nq\n");
        assert!(manager.category_names().is_empty());
        assert!(out.contains("Category name cannot be empty."));
    }

    #[test]
    fn test_eof_mid_action() {
        let (manager, _) = run("1\n");
        assert!(manager.category_names().is_empty());
    }
}
