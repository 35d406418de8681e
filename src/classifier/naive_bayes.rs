//! Multinomial Naive Bayes over pre-tokenized words.
//!
//! The model keeps four tables:
//!
//! - the vocabulary, the union of every word ever trained,
//! - word counts per category,
//! - the number of training examples per category,
//! - a smoothing denominator per category, `|vocabulary| + words in category`,
//!   written whenever that category is trained.
//!
//! Scores are natural logs: `ln(prior) + Σ ln((count(w) + 1) / denominator)`.
//! They are only meaningful for ranking categories against each other.

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use rayon::prelude::*;

use super::classification::{
    CategoryStats, Classification, ClassifierStats, TrainingExample, rank_order,
};
use super::config::{ClassifierConfig, DenominatorPolicy};
use crate::error::{NbayesError, Result};

/// Laplace-smoothed multinomial Naive Bayes classifier.
///
/// Not internally synchronized. Wrap it in
/// [`SharedClassifier`](super::SharedClassifier) to share it across threads.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    vocabulary: AHashSet<String>,
    word_count: AHashMap<String, AHashMap<String, u64>>,
    category_count: AHashMap<String, u64>,
    denominator: AHashMap<String, u64>,
    config: ClassifierConfig,
}

impl NaiveBayes {
    /// Create an empty classifier with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty classifier with the given configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Configuration the classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Add one training example for `category`.
    ///
    /// `words` may be empty; the example still counts towards the category
    /// prior. Fails without touching any state if `category` is empty.
    pub fn train<I, W>(&mut self, category: &str, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        validate_category(category)?;

        *self.category_count.entry(category.to_owned()).or_insert(0) += 1;

        let counter = self.word_count.entry(category.to_owned()).or_default();
        let mut submitted = 0usize;
        for word in words {
            let word = word.as_ref();
            if !self.vocabulary.contains(word) {
                self.vocabulary.insert(word.to_owned());
            }
            match counter.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counter.insert(word.to_owned(), 1);
                }
            }
            submitted += 1;
        }

        let total: u64 = counter.values().sum();
        let denominator = self.vocabulary.len() as u64 + total;
        self.denominator.insert(category.to_owned(), denominator);

        debug!(
            "trained '{category}' with {submitted} words (vocabulary={}, denominator={denominator})",
            self.vocabulary.len()
        );
        Ok(())
    }

    /// Train every example in order.
    ///
    /// All categories are validated up front, so an invalid example leaves
    /// the classifier unchanged.
    pub fn train_batch(&mut self, examples: &[TrainingExample]) -> Result<()> {
        for (i, example) in examples.iter().enumerate() {
            validate_category(&example.category)
                .map_err(|e| NbayesError::invalid_argument(format!("example {i}: {e}")))?;
        }
        for example in examples {
            self.train(&example.category, &example.words)?;
        }
        debug!("trained batch of {} examples", examples.len());
        Ok(())
    }

    /// Forget everything that was trained.
    pub fn clear(&mut self) {
        self.vocabulary.clear();
        self.word_count.clear();
        self.category_count.clear();
        self.denominator.clear();
        debug!("classifier cleared");
    }

    /// Score every trained category and rank them by score, highest first.
    ///
    /// Equal scores are ordered by category name. Returns an empty vector if
    /// nothing has been trained.
    pub fn classify<W>(&self, words: &[W]) -> Vec<Classification>
    where
        W: AsRef<str> + Sync,
    {
        let total = self.total_examples();
        let categories: Vec<(&String, u64)> = self
            .category_count
            .iter()
            .map(|(category, &examples)| (category, examples))
            .collect();

        let score_one = |&(category, examples): &(&String, u64)| {
            let denominator = self.smoothing_denominator(category)?;
            let score = self.log_score(category, examples, total, denominator, words);
            trace!("category '{category}' scored {score}");
            Some(Classification::new(category.as_str(), score))
        };

        let mut results: Vec<Classification> = if categories.len() >= self.config.parallel_threshold
        {
            categories.par_iter().filter_map(score_one).collect()
        } else {
            categories.iter().filter_map(score_one).collect()
        };

        results.sort_by(rank_order);
        results
    }

    /// The best scoring category, or `None` if nothing has been trained.
    pub fn predict<W>(&self, words: &[W]) -> Option<Classification>
    where
        W: AsRef<str> + Sync,
    {
        self.classify(words).into_iter().next()
    }

    /// Smoothed probability of `word` given `category`: `(count + 1) / denominator`.
    pub fn word_probability(&self, category: &str, word: &str) -> Result<f64> {
        let denominator = self
            .smoothing_denominator(category)
            .ok_or_else(|| NbayesError::category_not_found(category))?;
        Ok(self.smoothed(category, word, denominator))
    }

    /// Log score of `words` under `category`.
    pub fn score<W: AsRef<str>>(&self, category: &str, words: &[W]) -> Result<f64> {
        let examples = self
            .category_count
            .get(category)
            .copied()
            .ok_or_else(|| NbayesError::category_not_found(category))?;
        let denominator = self
            .smoothing_denominator(category)
            .ok_or_else(|| NbayesError::category_not_found(category))?;
        Ok(self.log_score(category, examples, self.total_examples(), denominator, words))
    }

    fn log_score<W: AsRef<str>>(
        &self,
        category: &str,
        examples: u64,
        total: u64,
        denominator: u64,
        words: &[W],
    ) -> f64 {
        let mut score = (examples as f64 / total as f64).ln();
        for word in words {
            score += self.smoothed(category, word.as_ref(), denominator).ln();
        }
        score
    }

    // A category trained only on empty examples before any word was seen has
    // a cached denominator of 0; it is floored at 1 here.
    fn smoothed(&self, category: &str, word: &str, denominator: u64) -> f64 {
        let count = self.word_count(category, word);
        (count + 1) as f64 / denominator.max(1) as f64
    }

    fn smoothing_denominator(&self, category: &str) -> Option<u64> {
        match self.config.denominator_policy {
            DenominatorPolicy::TrainingSnapshot => self.denominator.get(category).copied(),
            DenominatorPolicy::Live => {
                if !self.category_count.contains_key(category) {
                    return None;
                }
                Some(self.vocabulary.len() as u64 + self.total_words(category))
            }
        }
    }

    /// Number of distinct words seen across all categories.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `word` has been seen in any category.
    pub fn contains_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Trained category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.category_count.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of training examples seen for `category` (0 if never trained).
    pub fn category_count(&self, category: &str) -> u64 {
        self.category_count.get(category).copied().unwrap_or(0)
    }

    /// Occurrences of `word` within `category`.
    pub fn word_count(&self, category: &str, word: &str) -> u64 {
        self.word_count
            .get(category)
            .and_then(|counter| counter.get(word))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all word counts of `category`.
    pub fn total_words(&self, category: &str) -> u64 {
        self.word_count
            .get(category)
            .map(|counter| counter.values().sum())
            .unwrap_or(0)
    }

    /// Denominator cached by the last `train` call for `category`.
    pub fn denominator(&self, category: &str) -> Option<u64> {
        self.denominator.get(category).copied()
    }

    /// Number of training examples over all categories.
    pub fn total_examples(&self) -> u64 {
        self.category_count.values().sum()
    }

    /// True until the first successful `train` and again after `clear`.
    pub fn is_empty(&self) -> bool {
        self.category_count.is_empty()
    }

    /// Per-category counts, denominators and priors, sorted by category.
    pub fn stats(&self) -> ClassifierStats {
        let total_examples = self.total_examples();
        let categories = self
            .categories()
            .into_iter()
            .map(|category| {
                let examples = self.category_count(category);
                CategoryStats {
                    category: category.to_owned(),
                    examples,
                    total_words: self.total_words(category),
                    distinct_words: self.word_count.get(category).map_or(0, |c| c.len()),
                    denominator: self.denominator(category).unwrap_or(0),
                    prior: examples as f64 / total_examples as f64,
                }
            })
            .collect();

        ClassifierStats {
            vocabulary_size: self.vocabulary.len(),
            total_examples,
            categories,
        }
    }
}

fn validate_category(category: &str) -> Result<()> {
    if category.is_empty() {
        return Err(NbayesError::invalid_argument("category must not be empty"));
    }
    Ok(())
}
