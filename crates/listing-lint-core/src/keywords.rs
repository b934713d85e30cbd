//! Keyword frequency ranking.
//!
//! Counts non-stopword tokens and ranks them by count. Ties keep the order in
//! which the words first appeared, so the ranking is deterministic without
//! falling back to alphabetical order.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::Tokens;
use crate::word_lists::without_stopwords;

/// Number of keywords reported by a product analysis.
pub const MAX_KEYWORDS: usize = 8;

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordEntry {
    /// Lowercase alphabetic word, at least three letters long.
    pub word: String,
    /// Number of occurrences (always at least 1).
    pub count: usize,
}

/// Count tokens, keeping first-seen order.
pub fn count_frequencies<'a, I>(tokens: I) -> IndexMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut freq: IndexMap<&str, usize> = IndexMap::new();
    for token in tokens {
        *freq.entry(token).or_insert(0) += 1;
    }
    freq
}

/// Rank counted words by descending count and keep the first `limit`.
pub fn rank(freq: IndexMap<&str, usize>, limit: usize) -> Vec<KeywordEntry> {
    let mut ranked: Vec<KeywordEntry> = freq
        .into_iter()
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
        })
        .collect();

    // Stable: equal counts stay in first-occurrence order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Extract the top [`MAX_KEYWORDS`] keywords from a description and title.
pub fn extract_keywords(description: &str, title: &str) -> Vec<KeywordEntry> {
    extract_keywords_with_limit(description, title, MAX_KEYWORDS)
}

/// Extract the top `limit` keywords from a description and title.
#[tracing::instrument(skip(description, title), fields(text_len = description.len() + title.len()))]
pub fn extract_keywords_with_limit(
    description: &str,
    title: &str,
    limit: usize,
) -> Vec<KeywordEntry> {
    let tokens = Tokens::new(description, title);
    let freq = count_frequencies(without_stopwords(tokens.iter()));
    tracing::debug!(unique_words = freq.len(), "counted keyword candidates");
    rank(freq, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[KeywordEntry]) -> Vec<(&str, usize)> {
        entries.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn cat_sat_on_the_mat() {
        let keywords = extract_keywords("the cat sat on the mat and the cat ran", "");
        assert_eq!(
            pairs(&keywords),
            vec![("cat", 2), ("sat", 1), ("mat", 1), ("ran", 1)]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_not_alphabetical() {
        let keywords = extract_keywords("zebra apple mango", "");
        assert_eq!(
            pairs(&keywords),
            vec![("zebra", 1), ("apple", 1), ("mango", 1)]
        );
    }

    #[test]
    fn later_word_with_higher_count_moves_ahead() {
        let keywords = extract_keywords("alpha beta gamma gamma beta gamma", "");
        assert_eq!(
            pairs(&keywords),
            vec![("gamma", 3), ("beta", 2), ("alpha", 1)]
        );
    }

    #[test]
    fn truncates_to_eight() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let keywords = extract_keywords(text, "");
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0].word, "one");
        assert_eq!(keywords[7].word, "eight");
    }

    #[test]
    fn stopwords_never_rank_even_when_frequent() {
        let keywords = extract_keywords("the the the the the and and and mug", "the");
        assert_eq!(pairs(&keywords), vec![("mug", 1)]);
    }

    #[test]
    fn title_words_are_counted_after_description() {
        let keywords = extract_keywords("poster print", "Poster");
        assert_eq!(pairs(&keywords), vec![("poster", 2), ("print", 1)]);
    }

    #[test]
    fn empty_text_has_no_keywords() {
        assert!(extract_keywords("", "").is_empty());
    }

    #[test]
    fn custom_limit() {
        let keywords = extract_keywords_with_limit("red blue green red", "", 2);
        assert_eq!(pairs(&keywords), vec![("red", 2), ("blue", 1)]);
        assert!(extract_keywords_with_limit("red blue", "", 0).is_empty());
    }

    #[test]
    fn count_frequencies_keeps_insertion_order() {
        let freq = count_frequencies(["b", "a", "b", "c"]);
        let order: Vec<(&str, usize)> = freq.into_iter().collect();
        assert_eq!(order, vec![("b", 2), ("a", 1), ("c", 1)]);
    }
}
