//! Keywords command: rank the most frequent words in a text file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use listing_lint_core::MAX_KEYWORDS;
use listing_lint_core::keywords::extract_keywords_with_limit;

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// Text file to scan, typically a product description.
    pub file: Utf8PathBuf,

    /// Title text scanned after the file contents.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Number of keywords to show.
    #[arg(long, default_value_t = MAX_KEYWORDS)]
    pub limit: usize,
}

/// Print the top keywords of a text file.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file, limit = args.limit))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = args.limit, "executing keywords command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let keywords = extract_keywords_with_limit(&content, &args.title, args.limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else if keywords.is_empty() {
        println!("{}", "No keywords detected".yellow());
    } else {
        let width = keywords.iter().map(|k| k.word.len()).max().unwrap_or(0);
        for k in &keywords {
            println!("{:<width$}  {}", k.word, k.count.cyan());
        }
    }

    Ok(())
}
