// src/cli/form.rs
//
// Two-panel form front end, reachable with `--gui` or from the menu.
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use std::error::Error;
use std::path::PathBuf;

use crate::analysis::{analyze_password, ZxcvbnEstimator};
use crate::cli::{is_canceled, is_interrupted};
use crate::config::Config;
use crate::generators::{collect_seed_words, GeneratorError, WordlistGenerator};
use crate::models::WordlistOptions;

const ANALYZE_PANEL: &str = "Analyze Password";
const GENERATE_PANEL: &str = "Generate Wordlist";
const CLOSE: &str = "Close";

pub fn run_form(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("\n=== Password Security Tool ===");

    loop {
        let panel = match Select::new("Panel:", vec![ANALYZE_PANEL, GENERATE_PANEL, CLOSE]).prompt() {
            Ok(panel) => panel,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        let result = match panel {
            ANALYZE_PANEL => analyze_panel(),
            GENERATE_PANEL => generate_panel(config),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(e) if is_interrupted(&*e) => break,
            Err(e) if is_canceled(&*e) => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn analyze_panel() -> Result<(), Box<dyn Error>> {
    let password = Password::new("Enter Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_display_toggle_enabled()
        .with_help_message("Ctrl+R to show or hide the password")
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        println!("⚠️  Input Required: Please enter a password to analyze.");
        return Ok(());
    }

    match analyze_password(&ZxcvbnEstimator, &password) {
        Ok(report) => println!("\n{}", report.render_compact()),
        Err(e) => {
            log::error!("Form analysis failed: {}", e);
            println!("❌ {}", e);
        }
    }
    Ok(())
}

fn generate_panel(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("\nBase Word Inputs:");
    let name = Text::new("Name/Nickname:").prompt()?;
    let pet = Text::new("Pet Name:").prompt()?;
    let date = Text::new("Important Date:").prompt()?;
    println!("⚠️  For authorized security testing only");

    let seeds = collect_seed_words([name, pet, date]);
    if seeds.is_empty() {
        println!("⚠️  Input Required: Please provide at least one input.");
        return Ok(());
    }

    let default_output = config.wordlist_output.display().to_string();
    let Some(answer) = Text::new("Save as:")
        .with_default(&default_output)
        .with_help_message("Esc to cancel")
        .prompt_skippable()?
    else {
        return Ok(());
    };
    if answer.trim().is_empty() {
        return Ok(());
    }

    let options = WordlistOptions {
        output: with_default_extension(PathBuf::from(answer.trim())),
        max_words: config.wordlist_max,
    };

    match WordlistGenerator::new().generate(&seeds, &options) {
        Ok(summary) => println!(
            "✅ Success: Wordlist generated successfully!\nSaved to: {}",
            summary.output.display()
        ),
        Err(GeneratorError::NoInput) => println!("⚠️  Input Required: Please provide at least one input."),
        Err(e) => {
            log::error!("Form wordlist generation failed: {}", e);
            println!("❌ Failed to save wordlist: {}", e);
        }
    }
    Ok(())
}

// Save dialogs default to a .txt extension
fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension("txt");
    }
    path
}
