//! Task data model

use chrono::NaiveDate;
use std::fmt;

/// Date format used when a task renders itself
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    due: NaiveDate,
    important: bool,
}

impl Task {
    /// Create a new task, not marked important
    pub fn new(description: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            description: description.into(),
            due,
            important: false,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due(&self) -> NaiveDate {
        self.due
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    /// Render with a caller-chosen chrono date format
    pub fn render(&self, date_format: &str) -> String {
        format!(
            "{} (Due: {})",
            self.description,
            self.due.format(date_format)
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_DATE_FORMAT))
    }
}
