// src/cli/handlers.rs
use std::error::Error;
use std::io::{self, Write};

use crate::analysis::{analyze_password, StrengthEstimator, ZxcvbnEstimator};
use crate::cli::CliCommand;
use crate::config::Config;
use crate::generators::{collect_seed_words, GeneratorError, WordlistGenerator};
use crate::models::{StrengthReport, WordlistOptions, WordlistSummary};
use crate::utils::{format_count, format_size_kb};

const RULE: &str = "============================================================";

pub const ETHICS_NOTICE: &str = "⚠️  ETHICAL USE ONLY: Use this list for authorized security testing only.";

// Dispatch a parsed subcommand
pub fn handle_command(command: CliCommand, config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Analyze { password } => {
            log::info!("Running analyze command");
            handle_analyze(&ZxcvbnEstimator, &password, json)?;
        }
        CliCommand::Generate { name, pet, date, output, max } => {
            log::info!("Running generate command");
            let options = WordlistOptions {
                output: output.unwrap_or_else(|| config.wordlist_output.clone()),
                max_words: max.unwrap_or(config.wordlist_max),
            };
            let seeds = collect_seed_words([name, pet, date]);
            handle_generate(&seeds, &options, json)?;
        }
    }
    Ok(())
}

pub fn handle_analyze<E: StrengthEstimator + ?Sized>(
    estimator: &E,
    password: &str,
    json: bool,
) -> Result<StrengthReport, Box<dyn Error>> {
    let report = analyze_password(estimator, password)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render(console::colors_enabled()));
    }

    Ok(report)
}

/// Generate and save a wordlist, printing progress and a summary.
///
/// Returns `Ok(None)` when no seed words were supplied; nothing is written
/// in that case.
pub fn handle_generate(
    seeds: &[String],
    options: &WordlistOptions,
    json: bool,
) -> Result<Option<WordlistSummary>, Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_to(&mut out, seeds, options, json)
}

fn generate_to<W: Write>(
    out: &mut W,
    seeds: &[String],
    options: &WordlistOptions,
    json: bool,
) -> Result<Option<WordlistSummary>, Box<dyn Error>> {
    if seeds.is_empty() {
        log::warn!("Wordlist generation skipped: no seed words");
        writeln!(out, "❌ Error: Please provide at least one input.")?;
        return Ok(None);
    }

    if options.max_words == 0 {
        log::warn!("Maximum wordlist size is 0, the output file will be empty");
    }

    if !json {
        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "         CUSTOM WORDLIST GENERATOR")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "\n🔧 Base words provided: {}", seeds.join(", "))?;
        writeln!(out, "\n⚙️  Generating capitalization variations...")?;
        writeln!(out, "⚙️  Applying leetspeak transformations...")?;
        writeln!(out, "⚙️  Adding common suffixes...")?;
        if seeds.len() > 1 {
            writeln!(out, "⚙️  Creating word combinations...")?;
        }
    }

    let summary = match WordlistGenerator::new().generate(seeds, options) {
        Ok(summary) => summary,
        Err(GeneratorError::NoInput) => {
            log::warn!("Wordlist generation skipped: no seed words");
            writeln!(out, "❌ Error: Please provide at least one input.")?;
            return Ok(None);
        }
        Err(e) => {
            log::error!("Wordlist generation failed: {}", e);
            return Err(Box::new(e));
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write_summary(out, &summary)?;
    }

    Ok(Some(summary))
}

fn write_summary<W: Write>(out: &mut W, summary: &WordlistSummary) -> io::Result<()> {
    writeln!(out, "\n✅ Successfully generated {} unique passwords", format_count(summary.count))?;
    writeln!(out, "📁 Wordlist saved to: {}", summary.output.display())?;
    writeln!(out, "📊 File size: {}", format_size_kb(summary.size_bytes))?;
    writeln!(out, "\n{}", ETHICS_NOTICE)?;
    writeln!(out, "{}\n", RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Estimate;

    struct FixedEstimator;

    impl StrengthEstimator for FixedEstimator {
        fn estimate(&self, _password: &str) -> crate::analysis::strength::Result<Estimate> {
            Ok(Estimate {
                score: 2,
                warning: None,
                suggestions: vec!["Add another word or two".to_string()],
                crack_time_display: "5 hours".to_string(),
            })
        }
    }

    #[test]
    fn test_handle_analyze_returns_report() {
        let report = handle_analyze(&FixedEstimator, "Tr0ub4dor", true).unwrap();
        assert_eq!(report.score, 2);
        assert_eq!(report.length, 9);
    }

    #[test]
    fn test_generate_without_seeds_prints_only_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("list.txt"),
            max_words: 100,
        };

        let mut out = Vec::new();
        let summary = generate_to(&mut out, &[], &options, false).unwrap();

        assert!(summary.is_none());
        assert!(!options.output.exists());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "❌ Error: Please provide at least one input.\n"
        );
    }

    #[test]
    fn test_generate_prints_banner_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("list.txt"),
            max_words: 100,
        };
        let seeds = collect_seed_words(["sam", "", "rex"]);

        let mut out = Vec::new();
        let summary = generate_to(&mut out, &seeds, &options, false).unwrap().unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(summary.count, 100);
        assert!(options.output.exists());
        assert!(printed.contains("🔧 Base words provided: sam, rex"));
        assert!(printed.contains("Creating word combinations"));
        assert!(printed.contains("✅ Successfully generated 100 unique passwords"));
        assert!(printed.contains(ETHICS_NOTICE));
    }

    #[test]
    fn test_generate_json_summary() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("list.txt"),
            max_words: 10,
        };

        let mut out = Vec::new();
        generate_to(&mut out, &["rex".to_string()], &options, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["count"], 10);
        assert!(!String::from_utf8(out).unwrap().contains("CUSTOM WORDLIST GENERATOR"));
    }

    #[test]
    fn test_generate_zero_max_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("list.txt"),
            max_words: 0,
        };

        let mut out = Vec::new();
        let summary = generate_to(&mut out, &["rex".to_string()], &options, false).unwrap().unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.size_bytes, 0);
        assert_eq!(std::fs::read_to_string(&options.output).unwrap(), "");
    }

    #[test]
    fn test_generate_zero_max_without_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("list.txt"),
            max_words: 0,
        };

        let mut out = Vec::new();
        assert!(generate_to(&mut out, &[], &options, false).unwrap().is_none());
        assert!(String::from_utf8(out).unwrap().contains("Please provide at least one input"));
        assert!(!options.output.exists());
    }
}
