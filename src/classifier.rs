//! Naive Bayes text classification.
//!
//! [`NaiveBayes`] is the single-threaded model. [`SharedClassifier`] wraps it
//! behind a read/write lock for hosts that train and classify from several
//! threads.
//!
//! ```
//! use nbayes::classifier::NaiveBayes;
//!
//! let mut nb = NaiveBayes::new();
//! nb.train("yes", ["Chinese", "Beijing", "Chinese"]).unwrap();
//! nb.train("no", ["Tokyo", "Japan", "Chinese"]).unwrap();
//!
//! let ranking = nb.classify(&["Chinese", "Beijing"]);
//! assert_eq!(ranking[0].category(), "yes");
//! ```

pub mod classification;
pub mod config;
pub mod naive_bayes;
pub mod shared;

pub use classification::{CategoryStats, Classification, ClassifierStats, TrainingExample};
pub use config::{ClassifierConfig, DenominatorPolicy};
pub use naive_bayes::NaiveBayes;
pub use shared::SharedClassifier;
