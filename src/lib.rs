//! # Rusty-id3
//!
//! `rusty-id3` induces ID3 decision trees from integer-coded categorical data and
//! measures their error rate on held-out examples.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! Each row holds the attribute values followed by the class label:
//!
//! ```rust
//! use rusty_id3::data::dataset::Dataset;
//! use rusty_id3::metrics::evaluation::NoMatchPolicy;
//! use rusty_id3::trees::classifier::DecisionTreeClassifier;
//!
//! let train = Dataset::from_rows(&[
//!     vec![0, 0, 0],
//!     vec![0, 1, 1],
//!     vec![1, 0, 1],
//!     vec![1, 1, 1],
//! ])
//! .unwrap();
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&train).unwrap();
//!
//! assert_eq!(model.classify(&[0, 1]).unwrap(), 1);
//!
//! let evaluation = model.evaluate(&train, NoMatchPolicy::Abort).unwrap();
//! assert_eq!(evaluation.error_rate, 0.0);
//! ```

/// Datasets and data loading
pub mod data;
/// Error type
pub mod errors;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
