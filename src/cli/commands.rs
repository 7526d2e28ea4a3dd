// src/cli/commands.rs
use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze the strength of a given password
    Analyze {
        /// The password string to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Generate a custom wordlist based on personal inputs
    Generate {
        /// User name or nickname
        #[arg(long, default_value = "")]
        name: String,

        /// Pet name
        #[arg(long, default_value = "")]
        pet: String,

        /// Important date (e.g., a birthday)
        #[arg(long, default_value = "")]
        date: String,

        /// Output file name [default: custom_wordlist.txt or WORDLIST_OUTPUT]
        #[arg(long)]
        output: Option<PathBuf>,

        /// Maximum wordlist size [default: 50000 or WORDLIST_MAX]
        #[arg(long)]
        max: Option<usize>,
    },
}
