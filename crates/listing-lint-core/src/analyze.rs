//! Product listing analysis.
//!
//! Runs the whole pipeline over one set of product fields: keyword
//! extraction, feature derivation, scoring and recommendations. The result
//! depends only on the input, so repeated calls return equal results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::keywords::{self, KeywordEntry};
use crate::product::ProductFields;
use crate::recommendations;
use crate::seo;

/// Outcome of analyzing one product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Whitespace-separated words in the description.
    pub word_count: usize,
    /// Title length in UTF-16 code units.
    pub title_length: usize,
    /// Number of tags.
    pub tag_count: usize,
    /// Up to eight keywords, most frequent first.
    pub keywords: Vec<KeywordEntry>,
    /// SEO score in `0..=100`.
    pub seo_score: u8,
    /// Improvement suggestions in check order.
    pub recommendations: Vec<String>,
}

/// Analyze a product listing.
///
/// Never fails: empty fields produce zero metrics and no keywords.
#[tracing::instrument(skip_all, fields(title_len = fields.title.len(), tags = fields.tags.len()))]
pub fn analyze_product(fields: &ProductFields) -> AnalysisResult {
    let features = FeatureVector::from_fields(fields);
    let keywords = keywords::extract_keywords(&fields.description, &fields.title);
    let seo_score = seo::seo_score(&features);
    let recommendations = recommendations::recommend(&features, seo_score)
        .iter()
        .map(|rec| rec.message().to_string())
        .collect();

    tracing::debug!(
        seo_score,
        keywords = keywords.len(),
        "product analysis complete"
    );

    AnalysisResult {
        word_count: features.word_count,
        title_length: features.title_length,
        tag_count: features.tag_count,
        keywords,
        seo_score,
        recommendations,
    }
}
