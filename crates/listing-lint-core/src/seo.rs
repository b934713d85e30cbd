//! SEO scoring.
//!
//! Each metric maps onto a fixed number of points through a list of tiers.
//! Tiers are checked top-down and the first match wins; a value that matches
//! no tier earns nothing. Presence flags add a flat bonus each. The sum is
//! clamped to [`MAX_SCORE`].
//!
//! | Metric           | Tiers                                   |
//! |------------------|-----------------------------------------|
//! | title length     | 30..=80 → 25, ≥ 20 → 15, ≥ 10 → 5       |
//! | description words| ≥ 100 → 25, ≥ 50 → 15, ≥ 20 → 5         |
//! | tags             | ≥ 10 → 20, ≥ 5 → 12, ≥ 1 → 5            |
//! | has description  | 10                                      |
//! | has price        | 10                                      |
//! | has merchant     | 10                                      |

use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Highest possible score.
pub const MAX_SCORE: u8 = 100;

/// A metric range and the points it earns.
type Tier = (RangeInclusive<usize>, u32);

const TITLE_TIERS: &[Tier] = &[(30..=80, 25), (20..=usize::MAX, 15), (10..=usize::MAX, 5)];

const WORD_TIERS: &[Tier] = &[
    (100..=usize::MAX, 25),
    (50..=usize::MAX, 15),
    (20..=usize::MAX, 5),
];

const TAG_TIERS: &[Tier] = &[
    (10..=usize::MAX, 20),
    (5..=usize::MAX, 12),
    (1..=usize::MAX, 5),
];

const DESCRIPTION_BONUS: u32 = 10;
const PRICE_BONUS: u32 = 10;
const MERCHANT_BONUS: u32 = 10;

/// Points earned by each part of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// Points from title length.
    pub title: u32,
    /// Points from description word count.
    pub description: u32,
    /// Points from tag count.
    pub tags: u32,
    /// Bonus for having a description.
    pub has_description: u32,
    /// Bonus for having a price.
    pub has_price: u32,
    /// Bonus for having a merchant.
    pub has_merchant: u32,
    /// Sum of all parts before clamping.
    pub total: u32,
    /// Final score in `0..=100`.
    pub score: u8,
}

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 75 and above.
    Good,
    /// 50 to 74.
    Medium,
    /// Below 50.
    Low,
}

impl ScoreBand {
    /// Classify a score.
    pub const fn from_score(score: u8) -> Self {
        match score {
            75.. => Self::Good,
            50..=74 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Returns the band as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn tier_points(value: usize, tiers: &[Tier]) -> u32 {
    tiers
        .iter()
        .find(|(range, _)| range.contains(&value))
        .map_or(0, |(_, points)| *points)
}

const fn bonus(present: bool, points: u32) -> u32 {
    if present { points } else { 0 }
}

/// Score a feature vector, keeping the contribution of each part.
#[tracing::instrument(skip_all)]
pub fn score_breakdown(features: &FeatureVector) -> ScoreBreakdown {
    let title = tier_points(features.title_length, TITLE_TIERS);
    let description = tier_points(features.word_count, WORD_TIERS);
    let tags = tier_points(features.tag_count, TAG_TIERS);
    let has_description = bonus(features.has_description, DESCRIPTION_BONUS);
    let has_price = bonus(features.has_price, PRICE_BONUS);
    let has_merchant = bonus(features.has_merchant, MERCHANT_BONUS);

    let total = title + description + tags + has_description + has_price + has_merchant;
    let score = u8::try_from(total.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE);

    tracing::debug!(total, score, "computed SEO score");

    ScoreBreakdown {
        title,
        description,
        tags,
        has_description,
        has_price,
        has_merchant,
        total,
        score,
    }
}

/// Score a feature vector in `0..=100`.
pub fn seo_score(features: &FeatureVector) -> u8 {
    score_breakdown(features).score
}
