// src/cli/menu.rs
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::analysis::ZxcvbnEstimator;
use crate::cli::{form, handlers, is_canceled, is_interrupted};
use crate::config::Config;
use crate::generators::collect_seed_words;
use crate::models::WordlistOptions;

const LAUNCH_FORM: &str = "🖥️  Launch form mode";
const ANALYZE: &str = "🔍  Analyze a password";
const GENERATE: &str = "📝  Generate custom wordlist";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 PASSWORD SECURITY TOOL     ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![LAUNCH_FORM, ANALYZE, GENERATE, EXIT];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) => continue,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let result = match selection {
            LAUNCH_FORM => {
                log::info!("Switching to form mode from menu");
                return form::run_form(config);
            }
            ANALYZE => analyze_action(),
            GENERATE => generate_action(config),
            EXIT => break,
            _ => {
                println!("❌ Invalid choice.");
                pause()
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if is_interrupted(&*e) => break,
            Err(e) if is_canceled(&*e) => continue,
            Err(e) => return Err(e),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn analyze_action() -> Result<(), Box<dyn Error>> {
    let password = Password::new("Enter password to analyze:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    if let Err(e) = handlers::handle_analyze(&ZxcvbnEstimator, &password, false) {
        log::error!("Analysis failed: {}", e);
        println!("❌ {}", e);
    }
    pause()
}

fn generate_action(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("\n--- Wordlist Generator ---");
    let name = Text::new("Enter name/nickname (or press Enter to skip):").prompt()?;
    let pet = Text::new("Enter pet name (or press Enter to skip):").prompt()?;
    let date = Text::new("Enter important date (or press Enter to skip):").prompt()?;

    let default_output = config.wordlist_output.display().to_string();
    let output = Text::new("Enter output filename:")
        .with_default(&default_output)
        .prompt()?;

    let options = WordlistOptions {
        output: output_path(&output, config),
        max_words: config.wordlist_max,
    };
    let seeds = collect_seed_words([name, pet, date]);

    if let Err(e) = handlers::handle_generate(&seeds, &options, false) {
        log::error!("Wordlist generation failed: {}", e);
        println!("❌ Failed to generate wordlist: {}", e);
    }
    pause()
}

// An empty answer falls back to the configured output file
fn output_path(answer: &str, config: &Config) -> std::path::PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        config.wordlist_output.clone()
    } else {
        std::path::PathBuf::from(answer)
    }
}

fn pause() -> Result<(), Box<dyn Error>> {
    Text::new("Press enter to continue...").prompt()?;
    Ok(())
}
