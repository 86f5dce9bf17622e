//! Console rendering for categories and tasks

use std::io::{self, Write};

use crossterm::style::Stylize;

use super::MenuChoice;
use crate::task::{CategoryView, TaskView};

/// Color is off when disabled by flag or by a non-empty `NO_COLOR`
pub fn color_enabled(disabled_by_flag: bool, no_color_env: Option<&str>) -> bool {
    !disabled_by_flag && no_color_env.is_none_or(str::is_empty)
}

pub fn categories<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    writeln!(out, "\nCategories:")?;
    for name in names {
        writeln!(out, "- {}", name)?;
    }
    writeln!(out)
}

pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.key(), choice.label())?;
    }
    Ok(())
}

pub fn task_line(task: &TaskView, date_format: &str) -> String {
    format!(
        "{}. {} (Due: {})",
        task.number,
        task.description,
        task.due.format(date_format)
    )
}

/// Important tasks are red, or carry a '!' prefix when color is off
pub fn tasks<W: Write>(
    out: &mut W,
    views: &[CategoryView],
    date_format: &str,
    color: bool,
) -> io::Result<()> {
    if views.is_empty() {
        writeln!(out, "\nNo categories yet.")?;
        return Ok(());
    }

    for view in views {
        writeln!(out, "\nCategory: {}", view.name)?;
        for task in &view.tasks {
            let line = task_line(task, date_format);
            match (task.important, color) {
                (true, true) => writeln!(out, "{}", line.red())?,
                (true, false) => writeln!(out, "! {}", line)?,
                (false, _) => writeln!(out, "{}", line)?,
            }
        }
    }
    Ok(())
}
