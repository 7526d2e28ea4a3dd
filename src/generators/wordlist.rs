// src/generators/wordlist.rs
use std::io::{self, Write};
use std::ops::RangeInclusive;
use chrono::Utc;
use thiserror::Error;

use super::{expand_leet, CandidateSet};
use crate::models::{WordlistOptions, WordlistSummary};

pub const DEFAULT_MAX_WORDS: usize = 50_000;
pub const DEFAULT_OUTPUT_FILE: &str = "custom_wordlist.txt";

/// Words fed through the leetspeak stage.
pub const LEET_SAMPLE_SIZE: usize = 100;
/// Leetspeak variants kept per sampled word.
pub const LEET_VARIANTS_PER_WORD: usize = 10;
/// Words fed through the suffix stage.
pub const SUFFIX_SAMPLE_SIZE: usize = 500;

pub const YEARS: RangeInclusive<u16> = 1980..=2025;
pub const COMMON_NUMBERS: &[&str] = &["1", "12", "123", "1234", "123456", "!", "!@", "!!", "@123"];
pub const SPECIAL_CHARS: &[&str] = &["!", "@", "#", "$", "!@", "123", "321"];

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No input provided: at least one seed word is required")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Trim the raw inputs and drop the empty ones.
pub fn collect_seed_words<I, S>(inputs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Write one candidate per line. Returns the number of bytes written.
pub fn write_wordlist<W: Write>(words: &[String], sink: &mut W) -> io::Result<u64> {
    let mut written = 0u64;
    for word in words {
        writeln!(sink, "{}", word)?;
        written += word.len() as u64 + 1;
    }
    sink.flush()?;
    Ok(written)
}

#[derive(Debug, Default)]
pub struct WordlistGenerator;

impl WordlistGenerator {
    pub fn new() -> Self {
        WordlistGenerator
    }

    /// Run the full pipeline and return the sorted candidates, at most
    /// `max_words` of them.
    pub fn build<S: AsRef<str>>(&self, seeds: &[S], max_words: usize) -> Result<Vec<String>> {
        let seeds = collect_seed_words(seeds);
        if seeds.is_empty() {
            return Err(GeneratorError::NoInput);
        }

        let mut candidates = CandidateSet::new();

        add_seed_words(&mut candidates, &seeds);
        log::debug!("Seed stage: {} candidates", candidates.len());

        add_case_variants(&mut candidates);
        log::debug!("Case stage: {} candidates", candidates.len());

        add_leet_variants(&mut candidates);
        log::debug!("Leetspeak stage: {} candidates", candidates.len());

        add_suffix_variants(&mut candidates);
        log::debug!("Suffix stage: {} candidates", candidates.len());

        if seeds.len() > 1 {
            add_combinations(&mut candidates, &seeds);
            log::debug!("Combination stage: {} candidates", candidates.len());
        }

        let total = candidates.len();
        let words = candidates.into_sorted(max_words);
        if words.len() < total {
            log::info!("Wordlist truncated from {} to {} entries", total, words.len());
        }
        Ok(words)
    }

    /// Build the wordlist and write it to `sink`. Returns the entry count.
    #[cfg(test)]
    pub fn write_to<S: AsRef<str>, W: Write>(
        &self,
        seeds: &[S],
        max_words: usize,
        sink: &mut W,
    ) -> Result<usize> {
        let words = self.build(seeds, max_words)?;
        write_wordlist(&words, sink)?;
        Ok(words.len())
    }

    /// Build the wordlist and save it to `options.output`.
    ///
    /// The output file is only created once the seeds have been validated.
    pub fn generate<S: AsRef<str>>(&self, seeds: &[S], options: &WordlistOptions) -> Result<WordlistSummary> {
        let words = self.build(seeds, options.max_words)?;

        let mut writer = crate::utils::create_output_file(&options.output)?;
        let size_bytes = write_wordlist(&words, &mut writer)?;

        log::info!(
            "Wrote {} candidates ({} bytes) to {}",
            words.len(),
            size_bytes,
            options.output.display()
        );

        Ok(WordlistSummary {
            count: words.len(),
            output: options.output.clone(),
            size_bytes,
            generated_at: Utc::now(),
        })
    }
}

fn add_seed_words(candidates: &mut CandidateSet, seeds: &[String]) {
    candidates.extend(seeds.iter().map(|seed| seed.to_lowercase()));
}

fn add_case_variants(candidates: &mut CandidateSet) {
    for word in candidates.sample(candidates.len()) {
        candidates.insert(capitalize(&word));
        candidates.insert(word.to_uppercase());
        if word.chars().count() > 1 {
            candidates.insert(capitalize(&word));
        }
    }
}

fn add_leet_variants(candidates: &mut CandidateSet) {
    let variants: Vec<String> = candidates
        .sample(LEET_SAMPLE_SIZE)
        .iter()
        .flat_map(|word| expand_leet(word).into_iter().take(LEET_VARIANTS_PER_WORD))
        .collect();
    candidates.extend(variants);
}

fn add_suffix_variants(candidates: &mut CandidateSet) {
    let mut suffixed = Vec::new();
    for word in candidates.sample(SUFFIX_SAMPLE_SIZE) {
        for year in YEARS {
            suffixed.push(format!("{}{}", word, year));
            suffixed.push(format!("{}{}", year, word));
        }
        for number in COMMON_NUMBERS {
            suffixed.push(format!("{}{}", word, number));
        }
        for special in SPECIAL_CHARS {
            suffixed.push(format!("{}{}", word, special));
        }
    }
    candidates.extend(suffixed);
}

fn add_combinations(candidates: &mut CandidateSet, seeds: &[String]) {
    for (i, first) in seeds.iter().enumerate() {
        for (j, second) in seeds.iter().enumerate() {
            if i == j {
                continue;
            }
            let combined = format!("{}{}", first, second);
            candidates.insert(capitalize(&combined));
            candidates.insert(combined);
            candidates.insert(format!("{}_{}", first, second));
            candidates.insert(format!("{}-{}", first, second));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn build(seeds: &[&str]) -> Vec<String> {
        WordlistGenerator::new().build(seeds, DEFAULT_MAX_WORDS).unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("rex"), "Rex");
        assert_eq!(capitalize("sAMREX"), "Samrex");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("1990"), "1990");
    }

    #[test]
    fn test_collect_seed_words() {
        let seeds = collect_seed_words(["  rex ", "", "   ", "2024"]);
        assert_eq!(seeds, vec!["rex", "2024"]);
    }

    #[test]
    fn test_single_seed_coverage() {
        let words = build(&["rex"]);
        for expected in ["rex", "Rex", "REX", "rex2024", "2024rex", "rex123", "rex!", "r3x", "R3X1980"] {
            assert!(words.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_single_seed_exact_size() {
        // 6 case/leet words, each with 92 year forms and 13 distinct suffixes.
        assert_eq!(build(&["rex"]).len(), 6 + 6 * 105);
    }

    #[test]
    fn test_seed_is_lowercased() {
        let words = build(&["ReX"]);
        assert!(words.contains(&"rex".to_string()));
        assert!(!words.contains(&"ReX".to_string()));
    }

    #[test]
    fn test_pairwise_combinations() {
        let words = build(&["sam", "rex"]);
        for expected in ["samrex", "rexsam", "sam_rex", "rex_sam", "sam-rex", "rex-sam", "Samrex", "Rexsam"] {
            assert!(words.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_no_combinations_for_single_seed() {
        let words = build(&["sam"]);
        assert!(!words.iter().any(|w| w.contains('_')));
        assert!(!words.iter().any(|w| w.contains('-')));
    }

    #[test]
    fn test_sorted_unique_and_capped() {
        let generator = WordlistGenerator::new();
        let words = generator.build(&["sam", "rex", "0412"], 250).unwrap();
        assert_eq!(words.len(), 250);
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));

        let full = generator.build(&["sam", "rex", "0412"], DEFAULT_MAX_WORDS).unwrap();
        assert!(full.len() <= DEFAULT_MAX_WORDS);
        assert_eq!(&full[..250], &words[..]);
    }

    #[test]
    fn test_deterministic_output() {
        let generator = WordlistGenerator::new();
        let seeds = ["alice", "fluffy", "19900101"];

        let mut first = Vec::new();
        let mut second = Vec::new();
        generator.write_to(&seeds, 5_000, &mut first).unwrap();
        generator.write_to(&seeds, 5_000, &mut second).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_format() {
        let mut sink = Vec::new();
        let count = WordlistGenerator::new().write_to(&["rex"], 3, &mut sink).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(sink).unwrap(), "1980R3X\n1980R3x\n1980REX\n");
    }

    #[test]
    fn test_empty_seeds_rejected() {
        let generator = WordlistGenerator::new();
        let mut sink = Vec::new();
        let err = generator.write_to(&["", "  "], 10, &mut sink).unwrap_err();
        assert!(matches!(err, GeneratorError::NoInput));
        assert!(sink.is_empty());

        let no_seeds: [&str; 0] = [];
        assert!(matches!(generator.build(&no_seeds, 10), Err(GeneratorError::NoInput)));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("words.txt"),
            max_words: 1_000,
        };

        let summary = WordlistGenerator::new().generate(&["rex"], &options).unwrap();
        let content = fs::read_to_string(&options.output).unwrap();

        assert_eq!(summary.count, 636);
        assert_eq!(content.lines().count(), summary.count);
        assert!(content.ends_with('\n'));
        assert_eq!(summary.size_bytes, content.len() as u64);
        assert_eq!(summary.output, options.output);
    }

    #[test]
    fn test_generate_without_input_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("words.txt"),
            max_words: 1_000,
        };

        let result = WordlistGenerator::new().generate(&[""], &options);
        assert!(matches!(result, Err(GeneratorError::NoInput)));
        assert!(!options.output.exists());
    }

    #[test]
    fn test_unwritable_sink_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let options = WordlistOptions {
            output: dir.path().join("missing").join("words.txt"),
            max_words: 10,
        };

        let result = WordlistGenerator::new().generate(&["rex"], &options);
        assert!(matches!(result, Err(GeneratorError::Io(_))));
    }

    #[test]
    fn test_leet_stage_caps_variants_per_word() {
        let mut candidates = CandidateSet::new();
        candidates.insert("galaxies".to_string());
        add_leet_variants(&mut candidates);

        assert!(expand_leet("galaxies").len() > LEET_VARIANTS_PER_WORD);
        assert_eq!(candidates.len(), LEET_VARIANTS_PER_WORD);
    }

    #[test]
    fn test_leet_stage_samples_first_words() {
        let mut candidates: CandidateSet = (0..LEET_SAMPLE_SIZE + 5).map(|i| format!("e{}", i)).collect();
        add_leet_variants(&mut candidates);

        assert!(candidates.contains("30"));
        assert!(candidates.contains(&format!("3{}", LEET_SAMPLE_SIZE - 1)));
        assert!(!candidates.contains(&format!("3{}", LEET_SAMPLE_SIZE)));
        assert_eq!(candidates.len(), LEET_SAMPLE_SIZE + 5 + LEET_SAMPLE_SIZE);
    }

    #[test]
    fn test_case_stage_variants() {
        let mut candidates: CandidateSet = ["rex", "x"].iter().map(|s| s.to_string()).collect();
        add_case_variants(&mut candidates);

        assert_eq!(candidates.into_vec(), vec!["rex", "x", "Rex", "REX", "X"]);
    }

    #[test]
    fn test_suffix_stage_samples_first_words() {
        let mut candidates: CandidateSet = (0..SUFFIX_SAMPLE_SIZE + 5).map(|i| format!("w{}", i)).collect();
        add_suffix_variants(&mut candidates);

        assert!(candidates.contains("w0!"));
        assert!(candidates.contains(&format!("w{}2025", SUFFIX_SAMPLE_SIZE - 1)));
        assert!(!candidates.contains(&format!("w{}!", SUFFIX_SAMPLE_SIZE)));
    }
}
