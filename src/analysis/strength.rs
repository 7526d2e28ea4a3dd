// src/analysis/strength.rs
use std::fmt::{self, Write};
use console::style;
use serde::Serialize;
use thiserror::Error;

use crate::analysis::entropy::{calculate_entropy, CharacterComposition};
use crate::models::{Estimate, StrengthReport};
use crate::utils::{check_mark, mask_password};

/// Entropy below this many bits triggers an extra advisory.
pub const LOW_ENTROPY_THRESHOLD: f64 = 28.0;

const RULE: &str = "============================================================";

#[derive(Error, Debug)]
pub enum StrengthError {
    #[error("Strength estimator error: {0}")]
    Estimator(String),
}

pub type Result<T> = std::result::Result<T, StrengthError>;

/// Source of heuristic strength scores.
pub trait StrengthEstimator {
    fn estimate(&self, password: &str) -> Result<Estimate>;
}

/// Estimator backed by the zxcvbn crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn estimate(&self, password: &str) -> Result<Estimate> {
        // zxcvbn refuses blank input; score it as the weakest possible password
        if password.is_empty() {
            return Ok(blank_estimate());
        }

        let entropy = zxcvbn::zxcvbn(password, &[])
            .map_err(|e| StrengthError::Estimator(e.to_string()))?;

        let feedback = entropy.feedback().as_ref();
        let warning = feedback
            .and_then(|f| f.warning())
            .map(|w| w.to_string());
        let suggestions = feedback
            .map(|f| f.suggestions().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        Ok(Estimate {
            score: entropy.score(),
            warning,
            suggestions,
            crack_time_display: entropy
                .crack_times()
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
        })
    }
}

fn blank_estimate() -> Estimate {
    Estimate {
        score: 0,
        warning: None,
        suggestions: vec![
            "Use a few words, avoid common phrases.".to_string(),
            "No need for symbols, digits, or uppercase letters.".to_string(),
        ],
        crack_time_display: "less than a second".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Moderate,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    fn emoji(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "🚨",
            StrengthLabel::Weak => "🚩",
            StrengthLabel::Moderate => "🤔",
            StrengthLabel::Strong => "💪",
            StrengthLabel::VeryStrong => "🛡️",
        }
    }

    fn styled(&self, colored: bool) -> String {
        let text = format!("{} {}", self, self.emoji());
        if !colored {
            return text;
        }
        match self {
            StrengthLabel::VeryWeak | StrengthLabel::Weak => style(text).red().bold().to_string(),
            StrengthLabel::Moderate => style(text).yellow().bold().to_string(),
            StrengthLabel::Strong | StrengthLabel::VeryStrong => style(text).green().bold().to_string(),
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "VERY WEAK"),
            StrengthLabel::Weak => write!(f, "WEAK"),
            StrengthLabel::Moderate => write!(f, "MODERATE"),
            StrengthLabel::Strong => write!(f, "STRONG"),
            StrengthLabel::VeryStrong => write!(f, "VERY STRONG"),
        }
    }
}

/// Score a password and combine the estimate with the entropy figures.
pub fn analyze_password<E: StrengthEstimator + ?Sized>(
    estimator: &E,
    password: &str,
) -> Result<StrengthReport> {
    let estimate = estimator.estimate(password)?;
    let entropy_bits = calculate_entropy(password);

    log::info!(
        "Analyzed password of length {}: score {}/4, entropy {} bits",
        password.chars().count(),
        estimate.score,
        entropy_bits
    );

    Ok(StrengthReport {
        length: password.chars().count(),
        score: estimate.score,
        label: StrengthLabel::from_score(estimate.score),
        warning: estimate.warning,
        suggestions: estimate.suggestions,
        crack_time_display: estimate.crack_time_display,
        entropy_bits,
        composition: CharacterComposition::of(password),
    })
}

impl StrengthReport {
    pub fn is_low_entropy(&self) -> bool {
        self.entropy_bits < LOW_ENTROPY_THRESHOLD
    }

    /// Full analysis block as printed by the CLI and the menu.
    pub fn render(&self, colored: bool) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_full(&mut out, colored);
        out
    }

    fn write_full(&self, out: &mut String, colored: bool) -> fmt::Result {
        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "           PASSWORD STRENGTH ANALYSIS")?;
        writeln!(out, "{}", RULE)?;

        writeln!(out, "\n📊 Password: {} (length: {})", mask_password(self.length), self.length)?;
        writeln!(out, "🔐 Strength Score: {}/4 - {}", self.score, self.label.styled(colored))?;
        writeln!(out, "⏱️  Estimated Crack Time: {}", self.crack_time_display)?;
        writeln!(out, "🎲 Entropy: {} bits", self.entropy_bits)?;

        writeln!(out, "\n🔤 Character Composition:")?;
        writeln!(out, "   • Lowercase: {}", check_mark(self.composition.lowercase))?;
        writeln!(out, "   • Uppercase: {}", check_mark(self.composition.uppercase))?;
        writeln!(out, "   • Numbers: {}", check_mark(self.composition.digits))?;
        writeln!(out, "   • Symbols: {}", check_mark(self.composition.symbols))?;

        if let Some(warning) = &self.warning {
            writeln!(out, "\n⚠️  Warning: {}", warning)?;
        }

        if self.suggestions.is_empty() {
            writeln!(out, "\n✅ Great job! No major suggestions needed.")?;
        } else {
            writeln!(out, "\n💡 Suggestions to Improve:")?;
            for suggestion in &self.suggestions {
                writeln!(out, "   • {}", suggestion)?;
            }
        }

        if self.is_low_entropy() {
            writeln!(
                out,
                "\n⚠️  Low Entropy Warning: Consider using a longer password with mixed character types."
            )?;
        }

        writeln!(out, "\n{}", RULE)
    }

    /// Short layout used by the form panel.
    pub fn render_compact(&self) -> String {
        let mut out = format!(
            "Password Length: {}\nStrength Score: {}/4\nCrack Time: {}\nEntropy: {} bits\n\n",
            self.length, self.score, self.crack_time_display, self.entropy_bits
        );

        if let Some(warning) = &self.warning {
            out.push_str(&format!("Warning: {}\n\n", warning));
        }

        if !self.suggestions.is_empty() {
            out.push_str("Suggestions:\n");
            for suggestion in &self.suggestions {
                out.push_str(&format!("  • {}\n", suggestion));
            }
        }

        out
    }
}
