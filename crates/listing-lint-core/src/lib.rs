//! Core library for listing-lint.
//!
//! Keyword and SEO analytics for product listings. Given the fields a page
//! extractor pulled from a product page, this crate ranks the most frequent
//! keywords, scores the listing from 0 to 100, and suggests improvements.
//!
//! # Modules
//!
//! - [`product`] - Product fields as produced by an extractor
//! - [`text`] - Keyword tokenization
//! - [`word_lists`] - Stopwords
//! - [`keywords`] - Frequency counting and ranking
//! - [`features`] - Feature vector derivation
//! - [`seo`] - Tiered SEO scoring
//! - [`recommendations`] - Improvement suggestions
//! - [`analyze`] - The full analysis pipeline
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use listing_lint_core::{ProductFields, analyze_product};
//!
//! let fields = ProductFields {
//!     title: "Retro Sunset Poster".to_string(),
//!     description: "A retro sunset poster for your wall".to_string(),
//!     ..ProductFields::default()
//! };
//!
//! let result = analyze_product(&fields);
//! assert_eq!(result.keywords[0].word, "retro");
//! assert!(result.seo_score <= 100);
//! ```
#![deny(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod error;
pub mod features;
pub mod keywords;
pub mod product;
pub mod recommendations;
pub mod seo;
pub mod text;
pub mod word_lists;

pub use analyze::{AnalysisResult, analyze_product};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use features::FeatureVector;
pub use keywords::{KeywordEntry, MAX_KEYWORDS, extract_keywords};
pub use product::ProductFields;
pub use recommendations::Recommendation;
pub use seo::{MAX_SCORE, ScoreBand, ScoreBreakdown};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
