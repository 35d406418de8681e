//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::Serialize;

use crate::classifier::{Classification, ClassifierStats};
use crate::cli::args::{NbayesArgs, OutputFormat};
use crate::error::{NbayesError, Result};

/// Smoothed probability of one word under one category.
#[derive(Debug, Clone, Serialize)]
pub struct WordProbability {
    pub category: String,
    pub word: String,
    pub probability: f64,
}

/// Result structure for the demo command.
#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub word_probabilities: Vec<WordProbability>,
    pub query: Vec<String>,
    pub ranking: Vec<Classification>,
}

/// Result structure for the classify command.
#[derive(Debug, Serialize)]
pub struct ClassificationReport {
    pub query: Vec<String>,
    pub ranking: Vec<Classification>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for DemoReport {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Word probabilities:");
        for p in &self.word_probabilities {
            let _ = writeln!(out, "  P({} | {}) = {:.4}", p.word, p.category, p.probability);
        }
        let _ = writeln!(out);
        out.push_str(&render_ranking(&self.query, &self.ranking));
        out
    }
}

impl HumanOutput for ClassificationReport {
    fn render_human(&self) -> String {
        render_ranking(&self.query, &self.ranking)
    }
}

impl HumanOutput for ClassifierStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Vocabulary size: {}", self.vocabulary_size);
        let _ = writeln!(out, "Training examples: {}", self.total_examples);
        for c in &self.categories {
            let _ = writeln!(
                out,
                "  {}: examples={} words={} distinct={} denominator={} prior={:.4}",
                c.category, c.examples, c.total_words, c.distinct_words, c.denominator, c.prior
            );
        }
        out
    }
}

fn render_ranking(query: &[String], ranking: &[Classification]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query: {}", query.join(" "));
    if ranking.is_empty() {
        let _ = writeln!(out, "No categories trained.");
        return out;
    }
    for (i, result) in ranking.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", i + 1, result);
    }
    out
}

/// Render a result in the requested format.
pub fn format_result<T>(result: &T, args: &NbayesArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human()),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)
            } else {
                serde_json::to_string(result)
            };
            json.map_err(NbayesError::from)
        }
    }
}

/// Print a result in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &NbayesArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    let rendered = format_result(result, args)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
