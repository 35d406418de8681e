//! Thread-safe handle around [`NaiveBayes`].
//!
//! Training and clearing take the write lock; every read takes the shared
//! lock, so any number of threads may classify concurrently while writers are
//! serialized.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use parking_lot::RwLock;

use super::classification::{Classification, ClassifierStats, TrainingExample};
use super::config::ClassifierConfig;
use super::naive_bayes::NaiveBayes;
use crate::error::Result;

#[derive(Debug, Default)]
struct Inner {
    model: RwLock<NaiveBayes>,
    generation: AtomicU64,
}

/// Cloneable, shareable classifier. Clones refer to the same model.
#[derive(Debug, Clone, Default)]
pub struct SharedClassifier {
    inner: Arc<Inner>,
}

impl SharedClassifier {
    /// Create a handle around an empty classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle around an empty classifier with the given configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self::from_model(NaiveBayes::with_config(config))
    }

    /// Take ownership of an already trained model.
    pub fn from_model(model: NaiveBayes) -> Self {
        Self {
            inner: Arc::new(Inner {
                model: RwLock::new(model),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Train one example under the write lock.
    pub fn train<I, W>(&self, category: &str, words: I) -> Result<()>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut model = self.inner.model.write();
        model.train(category, words)?;
        self.bump();
        Ok(())
    }

    /// Train a batch under the write lock; a rejected batch changes nothing.
    pub fn train_batch(&self, examples: &[TrainingExample]) -> Result<()> {
        let mut model = self.inner.model.write();
        model.train_batch(examples)?;
        self.bump();
        Ok(())
    }

    /// Forget everything that was trained.
    pub fn clear(&self) {
        self.inner.model.write().clear();
        self.bump();
    }

    /// Rank every trained category under the read lock.
    pub fn classify<W>(&self, words: &[W]) -> Vec<Classification>
    where
        W: AsRef<str> + Sync,
    {
        self.inner.model.read().classify(words)
    }

    /// The best scoring category, or `None` if nothing has been trained.
    pub fn predict<W>(&self, words: &[W]) -> Option<Classification>
    where
        W: AsRef<str> + Sync,
    {
        self.inner.model.read().predict(words)
    }

    /// Log score of `words` under `category`.
    pub fn score<W: AsRef<str>>(&self, category: &str, words: &[W]) -> Result<f64> {
        self.inner.model.read().score(category, words)
    }

    /// Smoothed probability of `word` given `category`.
    pub fn word_probability(&self, category: &str, word: &str) -> Result<f64> {
        self.inner.model.read().word_probability(category, word)
    }

    /// Statistics of the current model.
    pub fn stats(&self) -> ClassifierStats {
        self.inner.model.read().stats()
    }

    /// Copy of the current model, for reading without holding the lock.
    pub fn snapshot(&self) -> NaiveBayes {
        self.inner.model.read().clone()
    }

    /// Number of successful writes so far. Changes whenever the model does.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    fn bump(&self) {
        let generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("shared classifier at generation {generation}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_model() {
        let shared = SharedClassifier::new();
        let other = shared.clone();

        shared.train("yes", ["Chinese", "Beijing"]).unwrap();
        assert_eq!(other.stats().total_examples, 1);
        assert_eq!(other.generation(), 1);

        other.clear();
        assert!(shared.classify(&["Chinese"]).is_empty());
        assert_eq!(shared.generation(), 2);
    }

    #[test]
    fn test_failed_write_keeps_generation() {
        let shared = SharedClassifier::new();
        assert!(shared.train("", ["word"]).is_err());
        assert_eq!(shared.generation(), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedClassifier::new();
        shared.train("yes", ["Chinese"]).unwrap();

        let snapshot = shared.snapshot();
        shared.train("no", ["Tokyo"]).unwrap();

        assert_eq!(snapshot.categories(), vec!["yes"]);
        assert_eq!(shared.stats().categories.len(), 2);
    }

    #[test]
    fn test_concurrent_training() {
        let shared = SharedClassifier::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let category = if i % 2 == 0 { "even" } else { "odd" };
                    for _ in 0..25 {
                        shared.train(category, ["tick", "tock"]).unwrap();
                        let _ = shared.classify(&["tick"]);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = shared.stats();
        assert_eq!(stats.total_examples, 200);
        assert_eq!(stats.vocabulary_size, 2);
        for category in &stats.categories {
            assert_eq!(category.examples, 100);
            assert_eq!(category.total_words, 200);
        }
        assert_eq!(shared.generation(), 200);
    }
}
