// src/generators/mod.rs
mod candidates;
mod leet;
mod wordlist;

pub use candidates::CandidateSet;
pub use leet::expand_leet;
pub use wordlist::{
    collect_seed_words, GeneratorError, WordlistGenerator, DEFAULT_MAX_WORDS, DEFAULT_OUTPUT_FILE,
};
