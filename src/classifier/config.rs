//! Configuration for the Naive Bayes classifier.

use serde::{Deserialize, Serialize};

/// How the smoothing denominator of a category is obtained at scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominatorPolicy {
    /// Use the denominator cached by the last `train` call for the category.
    ///
    /// The cached value is `vocabulary_size + category_word_total` with the
    /// vocabulary size as it was when that category was last trained. Words
    /// introduced later by other categories are not reflected, so earlier
    /// categories keep a smaller denominator.
    #[default]
    TrainingSnapshot,

    /// Recompute `vocabulary_size + category_word_total` with the current
    /// vocabulary size on every lookup.
    Live,
}

/// Configuration for [`NaiveBayes`](super::NaiveBayes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Denominator used for Laplace smoothing.
    pub denominator_policy: DenominatorPolicy,

    /// Minimum number of trained categories before `classify` scores
    /// categories on the rayon thread pool.
    pub parallel_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            denominator_policy: DenominatorPolicy::TrainingSnapshot,
            parallel_threshold: 64,
        }
    }
}

impl ClassifierConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the denominator policy.
    pub fn with_denominator_policy(mut self, policy: DenominatorPolicy) -> Self {
        self.denominator_policy = policy;
        self
    }

    /// Set the category count from which scoring runs in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
