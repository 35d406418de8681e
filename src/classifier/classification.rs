//! Values passed into and returned from the classifier.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NbayesError, Result};

/// A category paired with its natural-log score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Category name.
    pub category: String,
    /// Log prior plus summed log word probabilities.
    pub score: f64,
}

impl Classification {
    /// Pair `category` with `score`.
    pub fn new<S: Into<String>>(category: S, score: f64) -> Self {
        Self {
            category: category.into(),
            score,
        }
    }

    /// Category name.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Natural-log score.
    pub fn score(&self) -> f64 {
        self.score
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category={} score={}", self.category, self.score)
    }
}

/// Order by score descending, then category name ascending.
pub(crate) fn rank_order(a: &Classification, b: &Classification) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.category.cmp(&b.category))
}

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingExample {
    /// Category label.
    pub category: String,
    /// Pre-tokenized words.
    pub words: Vec<String>,
}

impl TrainingExample {
    /// Build an example from any iterable of words.
    pub fn new<C, I, W>(category: C, words: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            category: category.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses `category:word word word`. Words are split on whitespace.
impl FromStr for TrainingExample {
    type Err = NbayesError;

    fn from_str(s: &str) -> Result<Self> {
        let (category, words) = s.split_once(':').ok_or_else(|| {
            NbayesError::invalid_argument(format!(
                "expected CATEGORY:WORDS, got '{s}'"
            ))
        })?;
        let category = category.trim();
        if category.is_empty() {
            return Err(NbayesError::invalid_argument(format!(
                "missing category in '{s}'"
            )));
        }
        Ok(Self::new(category, words.split_whitespace()))
    }
}

/// Per-category statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    /// Number of `train` calls for the category.
    pub examples: u64,
    /// Sum of all word counts.
    pub total_words: u64,
    /// Number of distinct words seen in the category.
    pub distinct_words: usize,
    /// Cached smoothing denominator.
    pub denominator: u64,
    /// `examples / total_examples`.
    pub prior: f64,
}

/// Snapshot of the classifier's accumulated statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierStats {
    pub vocabulary_size: usize,
    pub total_examples: u64,
    /// Sorted by category name.
    pub categories: Vec<CategoryStats>,
}
