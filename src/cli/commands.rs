//! Command implementations for the nbayes CLI.

use anyhow::Context;
use log::info;

use crate::classifier::{ClassifierConfig, ClassifierStats, NaiveBayes, TrainingExample};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{NbayesError, Result};

/// Training set of the worked example in Manning, Raghavan & Schütze,
/// "Introduction to Information Retrieval", chapter 13.
pub const DEMO_TRAINING: [(&str, &[&str]); 4] = [
    ("yes", &["Chinese", "Beijing", "Chinese"]),
    ("yes", &["Chinese", "Chinese", "Shanghai"]),
    ("yes", &["Chinese", "Monaco"]),
    ("no", &["Tokyo", "Japan", "Chinese"]),
];

/// Query of the same worked example.
pub const DEMO_QUERY: [&str; 5] = ["Chinese", "Chinese", "Chinese", "Tokyo", "Japan"];

const DEMO_PROBED_WORDS: [&str; 3] = ["Chinese", "Tokyo", "Japan"];

/// Run a command for the binary, naming the failed subcommand in the error.
pub fn run(args: NbayesArgs) -> anyhow::Result<()> {
    let name = args.command.name();
    execute_command(args).with_context(|| format!("{name} failed"))
}

/// Execute a CLI command.
pub fn execute_command(args: NbayesArgs) -> Result<()> {
    let config = args.classifier_config();
    match &args.command {
        Command::Demo => {
            let report = run_demo(config)?;
            output_result("Textbook example", &report, &args)
        }
        Command::Classify(classify_args) => {
            let report = run_classify(classify_args, config)?;
            output_result("Classification", &report, &args)
        }
        Command::Stats(stats_args) => {
            let stats = run_stats(stats_args, config)?;
            output_result("Classifier statistics", &stats, &args)
        }
    }
}

/// Train the textbook sample and collect probabilities and the ranking.
pub fn run_demo(config: ClassifierConfig) -> Result<DemoReport> {
    let mut nb = NaiveBayes::with_config(config);
    for (category, words) in DEMO_TRAINING {
        nb.train(category, words)?;
    }

    let mut word_probabilities = Vec::new();
    for category in ["yes", "no"] {
        for word in DEMO_PROBED_WORDS {
            word_probabilities.push(WordProbability {
                category: category.to_string(),
                word: word.to_string(),
                probability: nb.word_probability(category, word)?,
            });
        }
    }

    Ok(DemoReport {
        word_probabilities,
        query: DEMO_QUERY.iter().map(|w| w.to_string()).collect(),
        ranking: nb.classify(&DEMO_QUERY),
    })
}

/// Train from the inline examples and rank the query words.
pub fn run_classify(args: &ClassifyArgs, config: ClassifierConfig) -> Result<ClassificationReport> {
    if args.top == Some(0) {
        return Err(NbayesError::invalid_argument("--top must be at least 1"));
    }
    let nb = train_from(&args.examples, config)?;

    let mut ranking = nb.classify(&args.words);
    if let Some(top) = args.top {
        ranking.truncate(top);
    }

    Ok(ClassificationReport {
        query: args.words.clone(),
        ranking,
    })
}

/// Train from the inline examples and report the statistics.
pub fn run_stats(args: &StatsArgs, config: ClassifierConfig) -> Result<ClassifierStats> {
    Ok(train_from(&args.examples, config)?.stats())
}

fn train_from(examples: &[TrainingExample], config: ClassifierConfig) -> Result<NaiveBayes> {
    let mut nb = NaiveBayes::with_config(config);
    nb.train_batch(examples)?;
    info!(
        "trained {} examples over {} categories",
        examples.len(),
        nb.categories().len()
    );
    Ok(nb)
}
