//! Task management module
//!
//! In-memory to-do model:
//! - Tasks with a due date and an importance flag
//! - Categories holding ordered task lists
//! - A manager owning every category by unique name

pub mod category;
pub mod error;
pub mod manager;
pub mod model;

pub use category::Category;
pub use error::{Result, TaskError};
pub use manager::{CategoryView, TaskManager, TaskView};
pub use model::{Task, DEFAULT_DATE_FORMAT};
