//! Error types for listing-lint-core.
//!
//! The analytics functions themselves are infallible. These errors cover the
//! edges around them: configuration loading and validating the product fields
//! handed over by an extractor.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while accepting product fields from an extractor.
#[derive(Error, Debug)]
pub enum InputError {
    /// Neither a title nor a price was extracted.
    #[error("this page is not a product page")]
    NotAProductPage,

    /// The extractor output could not be parsed as product fields.
    #[error("invalid product fields: {0}")]
    InvalidFields(#[from] serde_json::Error),

    /// The input exceeds the configured size limit.
    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Size of the rejected input in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`InputError`].
pub type InputResult<T> = Result<T, InputError>;
