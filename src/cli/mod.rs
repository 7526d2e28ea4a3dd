// src/cli/mod.rs
use clap::Parser;
use inquire::InquireError;
use std::error::Error;

pub mod commands;
pub mod form;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

/// Password security tool: analyze strength or generate custom wordlists.
///
/// Run without arguments to open the interactive menu.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Launch the form interface
    #[arg(long)]
    pub gui: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// True when a prompt was aborted with Ctrl+C.
pub fn is_interrupted(err: &(dyn Error + 'static)) -> bool {
    matches!(err.downcast_ref::<InquireError>(), Some(InquireError::OperationInterrupted))
}

/// True when a prompt was dismissed with Esc.
pub fn is_canceled(err: &(dyn Error + 'static)) -> bool {
    matches!(err.downcast_ref::<InquireError>(), Some(InquireError::OperationCanceled))
}
