//! Error types for the nbayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NbayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use nbayes::error::{NbayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NbayesError::invalid_argument("category must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for nbayes operations.
#[derive(Error, Debug)]
pub enum NbayesError {
    /// A caller supplied an argument the classifier cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Scoring was requested for a category that was never trained.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with NbayesError.
pub type Result<T> = std::result::Result<T, NbayesError>;

impl NbayesError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        NbayesError::InvalidArgument(msg.into())
    }

    /// Create a new category not found error.
    pub fn category_not_found<S: Into<String>>(category: S) -> Self {
        NbayesError::CategoryNotFound(category.into())
    }
}
