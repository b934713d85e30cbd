//! Score command: per-part SEO score breakdown.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use listing_lint_core::seo::score_breakdown;
use listing_lint_core::{FeatureVector, ScoreBand, ScoreBreakdown};

use super::read_product_fields;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file of extracted product fields.
    pub file: Utf8PathBuf,

    /// Minimum acceptable SEO score (0-100).
    #[arg(long)]
    pub min_score: Option<u8>,
}

#[derive(Serialize)]
struct ScoreReport {
    features: FeatureVector,
    breakdown: ScoreBreakdown,
    band: ScoreBand,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u8>,
    below_min: bool,
}

/// Print how each part of a listing contributes to its SEO score.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_score = ?args.min_score, "executing score command");

    let fields = read_product_fields(&args.file, max_input_bytes)?;
    let features = FeatureVector::from_fields(&fields);
    let breakdown = score_breakdown(&features);
    let min_score = args.min_score.or(config_min_score);

    let report = ScoreReport {
        features,
        breakdown,
        band: ScoreBand::from_score(breakdown.score),
        min_score,
        below_min: min_score.is_some_and(|min| breakdown.score < min),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.below_min {
        print_breakdown(&report);
        bail!(
            "{} scores {} (min: {}).",
            args.file,
            breakdown.score,
            min_score.unwrap_or(0),
        );
    } else {
        print_breakdown(&report);
    }

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn print_breakdown(report: &ScoreReport) {
    let f = &report.features;
    let b = &report.breakdown;
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Title length".dimmed(),
        f.title_length,
        b.title
    );
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Words".dimmed(),
        f.word_count,
        b.description
    );
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Tags".dimmed(),
        f.tag_count,
        b.tags
    );
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Description".dimmed(),
        yes_no(f.has_description),
        b.has_description
    );
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Price".dimmed(),
        yes_no(f.has_price),
        b.has_price
    );
    println!(
        "  {:<14} {:>5}  {:>3} pts",
        "Merchant".dimmed(),
        yes_no(f.has_merchant),
        b.has_merchant
    );

    let line = format!("{}/100 ({})", b.score, report.band);
    match report.band {
        ScoreBand::Good => println!("  {} {}", "SEO score:".bold(), line.green()),
        ScoreBand::Medium => println!("  {} {}", "SEO score:".bold(), line.yellow()),
        ScoreBand::Low => println!("  {} {}", "SEO score:".bold(), line.red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn listing(tmp: &TempDir) -> Utf8PathBuf {
        let path = tmp.path().join("listing.json");
        fs::write(
            &path,
            r#"{"title": "Hand Lettered Botanical Tote Bag", "price": "$22", "merchant": "Fern & Ink"}"#,
        )
        .unwrap();
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn score_text_succeeds() {
        let tmp = TempDir::new().unwrap();
        let args = ScoreArgs {
            file: listing(&tmp),
            min_score: None,
        };
        assert!(cmd_score(args, false, None, None).is_ok());
    }

    #[test]
    fn score_json_succeeds() {
        let tmp = TempDir::new().unwrap();
        let args = ScoreArgs {
            file: listing(&tmp),
            min_score: Some(100),
        };
        assert!(cmd_score(args, true, None, None).is_ok());
    }

    #[test]
    fn score_gate_fails_below_min() {
        let tmp = TempDir::new().unwrap();
        let args = ScoreArgs {
            file: listing(&tmp),
            min_score: None,
        };
        // title 32 chars (25) + price (10) + merchant (10)
        let err = cmd_score(args, false, Some(60), None).unwrap_err();
        assert!(err.to_string().contains("scores 45 (min: 60)"));
    }
}
