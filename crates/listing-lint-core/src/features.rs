//! Feature vector derived from product fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::product::ProductFields;

/// Numeric and boolean signals feeding the scorer and the recommender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureVector {
    /// Title length in UTF-16 code units, as browsers count string length.
    pub title_length: usize,
    /// Whitespace-separated words in the description.
    pub word_count: usize,
    /// Number of tags.
    pub tag_count: usize,
    /// The description has at least one word.
    pub has_description: bool,
    /// A price was extracted.
    pub has_price: bool,
    /// A merchant was extracted.
    pub has_merchant: bool,
}

impl FeatureVector {
    /// Derive the feature vector for a product.
    ///
    /// Presence of price and merchant is plain non-emptiness, so a
    /// whitespace-only value still counts as present. The description is
    /// present only when it contains a word.
    #[tracing::instrument(skip_all)]
    pub fn from_fields(fields: &ProductFields) -> Self {
        let word_count = count_words(&fields.description);
        Self {
            title_length: fields.title.encode_utf16().count(),
            word_count,
            tag_count: fields.tags.len(),
            has_description: word_count > 0,
            has_price: !fields.price.is_empty(),
            has_merchant: !fields.merchant.is_empty(),
        }
    }
}

/// Count words by whitespace splitting.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
