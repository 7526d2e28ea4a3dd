// src/analysis/entropy.rs
use serde::Serialize;

/// The 32 ASCII punctuation characters counted as symbols.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 32;

/// Which character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterComposition {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterComposition {
    pub fn of(password: &str) -> Self {
        Self {
            lowercase: password.chars().any(char::is_lowercase),
            uppercase: password.chars().any(char::is_uppercase),
            digits: password.chars().any(|c| c.is_ascii_digit()),
            symbols: password.chars().any(|c| PUNCTUATION.contains(c)),
        }
    }

    /// Size of the combined alphabet of every class present.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += LOWERCASE_POOL;
        }
        if self.uppercase {
            size += UPPERCASE_POOL;
        }
        if self.digits {
            size += DIGIT_POOL;
        }
        if self.symbols {
            size += SYMBOL_POOL;
        }
        size
    }
}

/// Coarse entropy estimate in bits: `length * log2(charset_size)`, rounded to
/// two decimals. Zero when no known class is present.
pub fn calculate_entropy(password: &str) -> f64 {
    let charset_size = CharacterComposition::of(password).charset_size();
    if charset_size == 0 {
        return 0.0;
    }

    let length = password.chars().count() as f64;
    let entropy = length * f64::from(charset_size).log2();
    (entropy * 100.0).round() / 100.0
}
