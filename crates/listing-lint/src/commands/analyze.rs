//! Analyze command: keywords, SEO score and recommendations for a listing.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use listing_lint_core::{AnalysisResult, ProductFields, ScoreBand, analyze_product};

use super::read_product_fields;

/// Placeholder for fields the extractor could not find.
const NOT_FOUND: &str = "Not found";

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// JSON file of extracted product fields.
    pub file: Utf8PathBuf,

    /// Minimum acceptable SEO score (0-100).
    #[arg(long)]
    pub min_score: Option<u8>,
}

/// JSON output: the analysis plus the outcome of the min-score gate.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    below_min: bool,
}

/// Analyze a product listing and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing analyze command");

    let fields = read_product_fields(&args.file, max_input_bytes)?;
    let result = analyze_product(&fields);
    let min_score = args.min_score.or(config_min_score);
    let below_min = min_score.is_some_and(|min| result.seo_score < min);

    if global_json {
        let report = AnalyzeReport {
            result: &result,
            min_score,
            below_min,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&fields, &result);

    if let Some(min) = min_score
        && below_min
    {
        bail!(
            "{} scores {} (min: {}). Follow the recommendations above.",
            args.file,
            result.seo_score,
            min,
        );
    }

    Ok(())
}

/// The value itself, or the placeholder when the extractor found nothing.
fn or_not_found(value: &str) -> &str {
    if value.is_empty() { NOT_FOUND } else { value }
}

/// Format keywords as `word (count)` pairs.
fn format_keywords(result: &AnalysisResult) -> Option<String> {
    if result.keywords.is_empty() {
        return None;
    }
    let parts: Vec<String> = result
        .keywords
        .iter()
        .map(|k| format!("{} ({})", k.word, k.count))
        .collect();
    Some(parts.join(", "))
}

fn print_report(fields: &ProductFields, result: &AnalysisResult) {
    println!("{}", or_not_found(&fields.title).bold());

    println!();
    println!("  {} {}", "Price:".dimmed(), or_not_found(&fields.price));
    println!("  {} {}", "Merchant:".dimmed(), or_not_found(&fields.merchant));
    println!(
        "  {} {}",
        "Breadcrumbs:".dimmed(),
        or_not_found(&fields.breadcrumbs)
    );
    println!("  {} {}", "Rating:".dimmed(), or_not_found(&fields.rating));
    println!(
        "  {} {}",
        "Reviews:".dimmed(),
        or_not_found(&fields.review_count)
    );
    if fields.tags.is_empty() {
        println!("  {} {}", "Tags:".dimmed(), "No tags found".yellow());
    } else {
        println!("  {} {}", "Tags:".dimmed(), fields.tags.join(", "));
    }

    println!();
    println!(
        "  {} {} words, title {} chars, {} tags",
        "Metrics:".cyan(),
        result.word_count,
        result.title_length,
        result.tag_count,
    );

    let score = result.seo_score.to_string();
    let band = ScoreBand::from_score(result.seo_score);
    let painted = match band {
        ScoreBand::Good => score.green().to_string(),
        ScoreBand::Medium => score.yellow().to_string(),
        ScoreBand::Low => score.red().to_string(),
    };
    println!("  {} {painted}/100 ({band})", "SEO score:".cyan());

    match format_keywords(result) {
        Some(keywords) => println!("  {} {keywords}", "Keywords:".cyan()),
        None => println!("  {} {}", "Keywords:".cyan(), "No keywords detected".yellow()),
    }

    if !result.recommendations.is_empty() {
        println!("\n  {}", "Recommendations:".cyan());
        for (i, rec) in result.recommendations.iter().enumerate() {
            println!("    {}. {rec}", i + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fields(tmp: &TempDir, json: &str) -> Utf8PathBuf {
        let path = tmp.path().join("listing.json");
        fs::write(&path, json).unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn placeholder_for_empty_values() {
        assert_eq!(or_not_found(""), NOT_FOUND);
        assert_eq!(or_not_found("$12"), "$12");
    }

    #[test]
    fn keywords_format_as_word_and_count() {
        let fields = ProductFields {
            title: "Mug".to_string(),
            description: "cat mug cat".to_string(),
            ..ProductFields::default()
        };
        let result = analyze_product(&fields);
        assert_eq!(
            format_keywords(&result).as_deref(),
            Some("cat (2), mug (2)")
        );
        assert!(format_keywords(&analyze_product(&ProductFields::default())).is_none());
    }

    #[test]
    fn analyze_text_output_succeeds() {
        let tmp = TempDir::new().unwrap();
        let file = write_fields(&tmp, r#"{"title": "Mug", "price": "$9"}"#);
        let args = AnalyzeArgs {
            file,
            min_score: None,
        };
        assert!(cmd_analyze(args, false, None, None).is_ok());
    }

    #[test]
    fn analyze_fails_below_min_score() {
        let tmp = TempDir::new().unwrap();
        let file = write_fields(&tmp, r#"{"title": "Mug", "price": "$9"}"#);
        let args = AnalyzeArgs {
            file,
            min_score: None,
        };
        let err = cmd_analyze(args, false, Some(50), None).unwrap_err();
        assert!(err.to_string().contains("scores 10 (min: 50)"));
    }

    #[test]
    fn cli_min_score_overrides_config() {
        let tmp = TempDir::new().unwrap();
        let file = write_fields(&tmp, r#"{"title": "Mug", "price": "$9"}"#);
        let args = AnalyzeArgs {
            file,
            min_score: Some(10),
        };
        assert!(cmd_analyze(args, false, Some(90), None).is_ok());
    }

    #[test]
    fn json_report_carries_gate_outcome() {
        let result = analyze_product(&ProductFields {
            title: "Mug".to_string(),
            price: "$9".to_string(),
            ..ProductFields::default()
        });
        let report = AnalyzeReport {
            result: &result,
            min_score: Some(90),
            below_min: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["seoScore"], 10);
        assert_eq!(json["minScore"], 90);
        assert_eq!(json["belowMin"], true);

        let ungated = AnalyzeReport {
            result: &result,
            min_score: None,
            below_min: false,
        };
        let json = serde_json::to_value(&ungated).unwrap();
        assert!(json.get("minScore").is_none());
        assert_eq!(json["belowMin"], false);
    }

    #[test]
    fn json_output_reports_instead_of_failing() {
        let tmp = TempDir::new().unwrap();
        let file = write_fields(&tmp, r#"{"title": "Mug", "price": "$9"}"#);
        let args = AnalyzeArgs {
            file,
            min_score: Some(90),
        };
        assert!(cmd_analyze(args, true, None, None).is_ok());
    }
}
