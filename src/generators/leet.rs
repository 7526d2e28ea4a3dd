// src/generators/leet.rs
use super::CandidateSet;

/// Letter substitutions, applied in this order.
pub const LEET_TABLE: &[(char, &[&str])] = &[
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5", "$"]),
    ('t', &["7"]),
    ('l', &["1"]),
    ('g', &["9"]),
];

/// Every leetspeak variant of `word`, the word itself first.
///
/// Each table entry is applied to all variants produced so far, replacing
/// every occurrence of the lowercase letter (and, separately, the uppercase
/// letter) at once. The result grows combinatorially; callers cap it.
pub fn expand_leet(word: &str) -> Vec<String> {
    let mut variants = CandidateSet::new();
    variants.insert(word.to_string());

    for (letter, replacements) in LEET_TABLE {
        let targets = [*letter, letter.to_ascii_uppercase()];
        let current = variants.sample(variants.len());

        for variant in &current {
            for replacement in replacements.iter() {
                for target in targets {
                    let substituted = variant.replace(target, replacement);
                    if substituted != *variant {
                        variants.insert(substituted);
                    }
                }
            }
        }
    }

    variants.into_vec()
}
