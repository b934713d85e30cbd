//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes listing analytics over the MCP protocol, making it
//! available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! the CLI commands use; each `#[tool]` method delegates to core functions
//! rather than implementing analytics directly.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use listing_lint_core::product::check_input_size;
use listing_lint_core::seo::score_breakdown;
use listing_lint_core::{FeatureVector, ProductFields, ScoreBand, analyze_product, keywords};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_product` and `score_listing` tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ProductParams {
    /// Fields extracted from the product page. Missing fields default to empty.
    pub fields: ProductFields,
}

/// Parameters for the `extract_keywords` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ExtractKeywordsParams {
    /// Text to scan, typically a product description.
    pub text: String,
    /// Optional title, scanned after the text.
    #[serde(default)]
    pub title: String,
    /// Number of keywords to return (default 8).
    pub limit: Option<usize>,
}

/// MCP server exposing listing analytics to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new(Some(listing_lint_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

/// Total size of all text in a set of product fields.
fn fields_size(fields: &ProductFields) -> usize {
    [
        &fields.title,
        &fields.price,
        &fields.merchant,
        &fields.breadcrumbs,
        &fields.review_count,
        &fields.rating,
        &fields.description,
        &fields.image_url,
    ]
    .iter()
    .map(|s| s.len())
    .sum::<usize>()
        + fields.tags.iter().map(String::len).sum::<usize>()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
        }
    }

    /// Validate tool input size and product-page shape.
    fn accept_fields(&self, fields: &ProductFields) -> Result<(), McpError> {
        check_input_size(fields_size(fields), self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        fields
            .ensure_product_page()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full listing analysis.
    #[tool(
        description = "Analyze extracted product fields. Returns word count, title length, tag count, top keywords, SEO score (0-100), and recommendations."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_product(
        &self,
        Parameters(params): Parameters<ProductParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_product", "executing MCP tool");
        self.accept_fields(&params.fields)?;

        let result = analyze_product(&params.fields);
        let json = to_json(&result)?;

        tracing::info!(
            tool = "analyze_product",
            seo_score = result.seo_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Per-part score breakdown.
    #[tool(
        description = "Score extracted product fields and show the points earned by title, description, tags, and presence of description, price, and merchant."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_listing(
        &self,
        Parameters(params): Parameters<ProductParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_listing", "executing MCP tool");
        self.accept_fields(&params.fields)?;

        let features = FeatureVector::from_fields(&params.fields);
        let breakdown = score_breakdown(&features);
        let json = to_json(&serde_json::json!({
            "features": features,
            "breakdown": breakdown,
            "band": ScoreBand::from_score(breakdown.score),
        }))?;

        tracing::info!(
            tool = "score_listing",
            score = breakdown.score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Keyword ranking for free text.
    #[tool(
        description = "Rank the most frequent keywords (three or more letters, stopwords removed) in text. Ties keep first-occurrence order."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn extract_keywords(
        &self,
        Parameters(params): Parameters<ExtractKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "extract_keywords", limit = ?params.limit, "executing MCP tool");
        check_input_size(
            params.text.len() + params.title.len(),
            self.max_input_bytes,
        )
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let limit = params.limit.unwrap_or(listing_lint_core::MAX_KEYWORDS);
        let entries = keywords::extract_keywords_with_limit(&params.text, &params.title, limit);
        let json = to_json(&entries)?;

        tracing::info!(
            tool = "extract_keywords",
            count = entries.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_product on extracted product fields for keywords, \
                 SEO score and recommendations.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> ProjectServer {
        ProjectServer::default()
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let info = ServerHandler::get_info(&server());
        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });
        let result = server().get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(json_of(&result)["name"], env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn analyze_product_tool_works() {
        let params = Parameters(ProductParams {
            fields: ProductFields {
                title: "Mug".to_string(),
                price: "$9".to_string(),
                description: "the cat sat on the mat and the cat ran".to_string(),
                ..ProductFields::default()
            },
        });
        let result = server()
            .analyze_product(params)
            .expect("analyze_product should succeed");
        let json = json_of(&result);
        assert_eq!(json["seoScore"], 20);
        assert_eq!(json["keywords"][0]["word"], "cat");
        assert_eq!(json["keywords"][0]["count"], 2);
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn analyze_product_rejects_non_product_page() {
        let params = Parameters(ProductParams {
            fields: ProductFields::default(),
        });
        assert!(server().analyze_product(params).is_err());
    }

    #[test]
    fn analyze_product_enforces_input_limit() {
        let params = Parameters(ProductParams {
            fields: ProductFields {
                title: "A fairly long product title".to_string(),
                ..ProductFields::default()
            },
        });
        assert!(ProjectServer::new(Some(8)).analyze_product(params).is_err());
    }

    #[test]
    fn score_listing_tool_works() {
        let params = Parameters(ProductParams {
            fields: ProductFields {
                title: "Hand Lettered Botanical Tote Bag".to_string(),
                price: "$22".to_string(),
                ..ProductFields::default()
            },
        });
        let result = server()
            .score_listing(params)
            .expect("score_listing should succeed");
        let json = json_of(&result);
        assert_eq!(json["breakdown"]["title"], 25);
        assert_eq!(json["breakdown"]["score"], 35);
        assert_eq!(json["band"], "low");
    }

    #[test]
    fn extract_keywords_tool_works() {
        let params = Parameters(ExtractKeywordsParams {
            text: "zebra apple zebra mango".to_string(),
            title: String::new(),
            limit: Some(2),
        });
        let result = server()
            .extract_keywords(params)
            .expect("extract_keywords should succeed");
        let json = json_of(&result);
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["word"], "zebra");
        assert_eq!(entries[1]["word"], "apple");
    }
}
