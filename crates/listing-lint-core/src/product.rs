//! Product fields as handed over by a page extractor.
//!
//! Extractors emit a flat JSON object with camelCase keys. Every field is
//! optional on the wire and defaults to an empty string (or an empty tag
//! list), so a partially scraped page still deserializes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};

/// Raw fields extracted from a rendered product page.
///
/// Values are display strings exactly as they appeared on the page. Price,
/// rating and review count are not parsed into numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductFields {
    /// Product title.
    pub title: String,
    /// Price as displayed, including currency symbols.
    pub price: String,
    /// Merchant, brand or designer name.
    pub merchant: String,
    /// Breadcrumb trail, typically joined with `" > "`.
    pub breadcrumbs: String,
    /// Product tags in page order.
    pub tags: Vec<String>,
    /// Review count as displayed.
    pub review_count: String,
    /// Rating as displayed.
    pub rating: String,
    /// Product description text.
    pub description: String,
    /// Primary product image URL.
    pub image_url: String,
}

impl ProductFields {
    /// Parse extractor output.
    ///
    /// Missing keys default to empty values; unknown keys are ignored.
    pub fn from_json(json: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that the extracted fields describe a product page at all.
    ///
    /// A page with neither a title nor a price is rejected before analysis.
    pub fn ensure_product_page(&self) -> InputResult<()> {
        if self.title.is_empty() && self.price.is_empty() {
            return Err(InputError::NotAProductPage);
        }
        Ok(())
    }
}

/// Reject inputs larger than `limit` bytes. `None` disables the check.
pub const fn check_input_size(size: usize, limit: Option<usize>) -> InputResult<()> {
    match limit {
        Some(limit) if size > limit => Err(InputError::TooLarge { size, limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_default_to_empty() {
        let fields = ProductFields::from_json(r#"{"title": "Mug"}"#).unwrap();
        assert_eq!(fields.title, "Mug");
        assert!(fields.price.is_empty());
        assert!(fields.tags.is_empty());
        assert!(fields.image_url.is_empty());
    }

    #[test]
    fn reads_camel_case_keys() {
        let json = r#"{
            "title": "Custom Mug",
            "reviewCount": "1,204",
            "imageUrl": "https://img.example/mug.png",
            "tags": ["mug", "coffee"]
        }"#;
        let fields = ProductFields::from_json(json).unwrap();
        assert_eq!(fields.review_count, "1,204");
        assert_eq!(fields.image_url, "https://img.example/mug.png");
        assert_eq!(fields.tags, vec!["mug", "coffee"]);
    }

    #[test]
    fn malformed_json_is_invalid_fields() {
        let err = ProductFields::from_json("{not json").unwrap_err();
        assert!(matches!(err, InputError::InvalidFields(_)));
    }

    #[test]
    fn page_without_title_or_price_is_rejected() {
        let fields = ProductFields {
            merchant: "Acme".to_string(),
            ..ProductFields::default()
        };
        assert!(matches!(
            fields.ensure_product_page(),
            Err(InputError::NotAProductPage)
        ));
    }

    #[test]
    fn price_alone_is_enough() {
        let fields = ProductFields {
            price: "$12.95".to_string(),
            ..ProductFields::default()
        };
        assert!(fields.ensure_product_page().is_ok());
    }

    #[test]
    fn input_size_limit() {
        assert!(check_input_size(10, None).is_ok());
        assert!(check_input_size(10, Some(10)).is_ok());
        assert!(matches!(
            check_input_size(11, Some(10)),
            Err(InputError::TooLarge { size: 11, limit: 10 })
        ));
    }
}
