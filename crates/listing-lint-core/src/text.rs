//! Keyword tokenization.
//!
//! Turns listing text into lowercase alphabetic tokens. Only ASCII letters
//! form tokens; digits, punctuation and other characters split them, and runs
//! shorter than three letters are discarded as noise.

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of at least three ASCII lowercase letters.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]{3,}").expect("valid regex"));

/// Lowercased listing text ready to be scanned for tokens.
///
/// Iterating is lazy and can be restarted any number of times; each pass
/// yields the same tokens in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    text: String,
}

impl Tokens {
    /// Join description and title with a space and lowercase the result.
    pub fn new(description: &str, title: &str) -> Self {
        Self {
            text: format!("{description} {title}").to_lowercase(),
        }
    }

    /// Scan tokens in source order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        WORD_PATTERN.find_iter(&self.text).map(|m| m.as_str())
    }
}
