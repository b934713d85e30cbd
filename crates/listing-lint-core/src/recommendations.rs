//! Improvement suggestions for a scored listing.
//!
//! A perfect score yields a single success message. Otherwise each check runs
//! independently and in a fixed order: title, description, tags, overall.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::seo::MAX_SCORE;

/// Title lengths below this ask for a longer title.
const TITLE_MIN: usize = 30;
/// Title lengths above this ask for a shorter title.
const TITLE_MAX: usize = 80;
/// Descriptions with fewer words ask for more detail.
const DESCRIPTION_MIN_WORDS: usize = 50;
/// Listings with fewer tags ask for more.
const TAGS_MIN: usize = 5;
/// Scores below this need overall improvement.
const SCORE_NEEDS_WORK: u8 = 50;
/// Scores below this (and at least [`SCORE_NEEDS_WORK`]) are a good foundation.
const SCORE_GOOD: u8 = 75;

/// A single improvement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// The listing already scores 100.
    StrongSeo,
    /// Title shorter than 30 characters.
    ExpandTitle,
    /// Title longer than 80 characters.
    TitleTooLong,
    /// Description shorter than 50 words.
    AddDescription,
    /// Fewer than 5 tags.
    AddTags,
    /// Score below 50.
    NeedsImprovement,
    /// Score from 50 up to 74.
    GoodFoundation,
}

impl Recommendation {
    /// Stable identifier for scripting.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::StrongSeo => "strong-seo",
            Self::ExpandTitle => "expand-title",
            Self::TitleTooLong => "title-too-long",
            Self::AddDescription => "add-description",
            Self::AddTags => "add-tags",
            Self::NeedsImprovement => "needs-improvement",
            Self::GoodFoundation => "good-foundation",
        }
    }

    /// Human-readable advice.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::StrongSeo => "Excellent! This product has strong SEO optimization.",
            Self::ExpandTitle => "Consider expanding the product title (aim for 30-80 characters).",
            Self::TitleTooLong => "Title may be too long. Consider keeping it under 80 characters.",
            Self::AddDescription => "Add more detailed product description (aim for 100+ words).",
            Self::AddTags => "Add more relevant tags to improve discoverability (aim for 10+).",
            Self::NeedsImprovement => {
                "Overall SEO needs improvement. Focus on title, description, and tags."
            }
            Self::GoodFoundation => "Good foundation. Minor improvements will boost SEO score.",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Suggest improvements for a listing with the given features and score.
#[tracing::instrument(skip(features))]
pub fn recommend(features: &FeatureVector, score: u8) -> Vec<Recommendation> {
    if score == MAX_SCORE {
        return vec![Recommendation::StrongSeo];
    }

    let mut recs = Vec::new();

    if features.title_length < TITLE_MIN {
        recs.push(Recommendation::ExpandTitle);
    } else if features.title_length > TITLE_MAX {
        recs.push(Recommendation::TitleTooLong);
    }

    if features.word_count < DESCRIPTION_MIN_WORDS {
        recs.push(Recommendation::AddDescription);
    }

    if features.tag_count < TAGS_MIN {
        recs.push(Recommendation::AddTags);
    }

    if score < SCORE_NEEDS_WORK {
        recs.push(Recommendation::NeedsImprovement);
    } else if score < SCORE_GOOD {
        recs.push(Recommendation::GoodFoundation);
    }

    recs
}
