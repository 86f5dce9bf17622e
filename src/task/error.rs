use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Category '{0}' already exists.")]
    DuplicateCategory(String),

    #[error("Category '{0}' does not exist.")]
    CategoryNotFound(String),

    #[error("Invalid task number {}: category has {len} task(s).", .index.saturating_add(1))]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TaskError>;
