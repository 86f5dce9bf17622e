//! Taskdeck library - In-memory to-do lists grouped into categories

pub mod cli;
pub mod task;
