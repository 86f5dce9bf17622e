//! Console front end: argument parsing, menu loop and rendering

pub mod definition;
pub mod menu;
pub mod render;
pub mod shell;

pub use definition::{Cli, Commands};
pub use menu::MenuChoice;
pub use shell::{Shell, ShellOptions};
