//! Word lists used by keyword extraction.

use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency words that never surface as keywords.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "with", "from", "this", "that", "have", "are", "was", "were", "been",
        "has", "had", "you", "your", "our", "their", "will", "can", "about", "all", "but", "not",
        "more",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is a stopword. Expects a lowercase token.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Drop stopwords from a token stream, preserving order.
pub fn without_stopwords<'a, I>(tokens: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().filter(|token| !is_stopword(token))
}
