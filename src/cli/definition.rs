//! Command-line definition

use chrono::format::{Item, StrftimeItems};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::task::DEFAULT_DATE_FORMAT;

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Console to-do list manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Mark important tasks with '!' instead of color
    #[arg(long)]
    pub no_color: bool,

    /// Keep previous output instead of clearing the screen each round
    #[arg(long)]
    pub no_clear: bool,

    /// Date format for entering and showing due dates (chrono syntax)
    #[arg(long, default_value = DEFAULT_DATE_FORMAT, value_parser = parse_date_format)]
    pub date_format: String,

    /// Print debug logs to stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_date_format(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("date format cannot be empty".to_string());
    }
    if StrftimeItems::new(s).any(|item| matches!(item, Item::Error)) {
        return Err(format!("invalid date format: {}", s));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
        assert!(!cli.no_clear);
        assert_eq!(cli.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_custom_date_format() {
        let cli = Cli::parse_from(["taskdeck", "--date-format", "%d/%m/%Y", "--no-color"]);
        assert_eq!(cli.date_format, "%d/%m/%Y");
        assert!(cli.no_color);
    }

    #[test]
    fn test_invalid_date_format_rejected() {
        assert!(Cli::try_parse_from(["taskdeck", "--date-format", "%Q"]).is_err());
        assert!(Cli::try_parse_from(["taskdeck", "--date-format", " "]).is_err());
    }

    #[test]
    fn test_completion_subcommand() {
        let cli = Cli::parse_from(["taskdeck", "completion", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completion { shell: Shell::Bash })
        ));
    }
}
