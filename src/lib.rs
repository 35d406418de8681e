//! # nbayes
//!
//! A small multinomial Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Incremental training from pre-tokenized word sequences
//! - Laplace (add-one) smoothing
//! - Log-space scoring and full category ranking
//! - Optional thread-safe handle for shared use

pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::classifier::{
        Classification, ClassifierConfig, DenominatorPolicy, NaiveBayes, SharedClassifier,
        TrainingExample,
    };
    pub use crate::error::{NbayesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
