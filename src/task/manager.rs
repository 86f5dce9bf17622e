//! Category registry and every mutation the shell can request

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::error::{Result, TaskError};
use super::{Category, Task};

/// A task prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// 1-based position within its category
    pub number: usize,
    pub description: String,
    pub due: NaiveDate,
    pub important: bool,
}

/// A category and its tasks, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub tasks: Vec<TaskView>,
}

/// Owns all categories. Categories keep their insertion order.
#[derive(Debug, Default)]
pub struct TaskManager {
    categories: Vec<Category>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        if self.position(name).is_some() {
            warn!(category = name, "rejected duplicate category");
            return Err(TaskError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(Category::new(name));
        debug!(category = name, "category added");
        Ok(())
    }

    /// Delete a category together with its tasks
    pub fn delete_category(&mut self, name: &str) -> Result<Category> {
        let idx = self.require(name)?;
        let removed = self.categories.remove(idx);
        debug!(category = name, tasks = removed.len(), "category deleted");
        Ok(removed)
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(Category::name).collect()
    }

    pub fn list_all_tasks(&self) -> Vec<CategoryView> {
        self.categories
            .iter()
            .map(|category| CategoryView {
                name: category.name().to_string(),
                tasks: category
                    .tasks()
                    .iter()
                    .enumerate()
                    .map(|(i, task)| TaskView {
                        number: i + 1,
                        description: task.description().to_string(),
                        due: task.due(),
                        important: task.is_important(),
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn add_task(&mut self, category: &str, task: Task) -> Result<()> {
        let idx = self.require(category)?;
        debug!(category, task = task.description(), "task added");
        self.categories[idx].add(task);
        Ok(())
    }

    pub fn delete_task(&mut self, category: &str, index: usize) -> Result<Task> {
        let idx = self.require(category)?;
        let removed = self.categories[idx].remove(index)?;
        debug!(category, index, "task deleted");
        Ok(removed)
    }

    pub fn move_task_within_category(
        &mut self,
        category: &str,
        from: usize,
        to: usize,
    ) -> Result<()> {
        let idx = self.require(category)?;
        self.categories[idx].move_task(from, to)?;
        debug!(category, from, to, "task moved within category");
        Ok(())
    }

    /// Move a task to the end of another category.
    ///
    /// Both categories and the index are validated before either side is
    /// touched, so a failure never loses or duplicates the task.
    pub fn move_task_between_categories(
        &mut self,
        source: &str,
        index: usize,
        destination: &str,
    ) -> Result<()> {
        let src = self.require(source)?;
        let dst = self.require(destination)?;

        let task = self.categories[src].remove(index)?;
        self.categories[dst].add(task);
        debug!(source, index, destination, "task moved between categories");
        Ok(())
    }

    pub fn highlight_task(&mut self, category: &str, index: usize) -> Result<()> {
        let idx = self.require(category)?;
        self.categories[idx].get_mut(index)?.set_important(true);
        debug!(category, index, "task highlighted");
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name() == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name).ok_or_else(|| {
            debug!(category = name, "category lookup failed");
            TaskError::CategoryNotFound(name.to_string())
        })
    }
}
