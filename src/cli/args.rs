//! Command line argument parsing for the nbayes CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};

use crate::classifier::{ClassifierConfig, DenominatorPolicy, TrainingExample};

/// nbayes - multinomial Naive Bayes text classification
#[derive(Parser, Debug, Clone)]
#[command(name = "nbayes")]
#[command(about = "Train and run a multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NbayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4+=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Recompute smoothing denominators with the current vocabulary size
    #[arg(long, env = "NBAYES_LIVE_DENOMINATOR")]
    pub live_denominator: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NbayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Classifier configuration selected by the global flags.
    pub fn classifier_config(&self) -> ClassifierConfig {
        let policy = if self.live_denominator {
            DenominatorPolicy::Live
        } else {
            DenominatorPolicy::TrainingSnapshot
        };
        ClassifierConfig::default().with_denominator_policy(policy)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train the built-in textbook sample and show every intermediate value
    Demo,

    /// Train from inline examples and rank categories for a query
    Classify(ClassifyArgs),

    /// Train from inline examples and show the accumulated statistics
    Stats(StatsArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Demo => "demo",
            Command::Classify(_) => "classify",
            Command::Stats(_) => "stats",
        }
    }
}

/// Arguments for classifying
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training example as CATEGORY:word word ... (repeatable)
    #[arg(short, long = "example", value_name = "EXAMPLE", required = true)]
    pub examples: Vec<TrainingExample>,

    /// Query words
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Only show the best N categories (at least 1)
    #[arg(
        short,
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub top: Option<usize>,
}

/// Arguments for showing statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Training example as CATEGORY:word word ... (repeatable)
    #[arg(short, long = "example", value_name = "EXAMPLE", required = true)]
    pub examples: Vec<TrainingExample>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
