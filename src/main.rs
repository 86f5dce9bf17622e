//! Taskdeck - Console to-do list manager

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{Cli, Commands, Shell, ShellOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .with_writer(io::stderr)
            .init();
    }

    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "taskdeck", &mut io::stdout());
        return Ok(());
    }

    let options = ShellOptions::from(&cli);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), options).run()
}
