//! Errors
//!
//! Error type shared by the dataset reader, the tree builder and the evaluator.
use thiserror::Error;

/// Errors that can occur while loading data, inducing a tree or classifying with it.
#[derive(Debug, Error)]
pub enum Id3Error {
    /// A data file could not be opened.
    #[error("Unable to open file {path}: {source}")]
    FileUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A token could not be read as a non-negative integer.
    #[error("Input is not valid: token {token:?} on line {line}.")]
    InvalidToken { token: String, line: u64 },
    /// A row has a different width than the first row.
    #[error("Row {row} has {found} columns, expected {expected}.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row has no columns at all, so there is no class label.
    #[error("Rows must contain at least the class column.")]
    MissingClassColumn,
    /// Malformed csv input.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Plurality value requested for zero examples.
    #[error("Cannot take the plurality value of an empty example set.")]
    EmptyExampleSet,
    /// A dataset with zero rows.
    #[error("The dataset contains no rows.")]
    EmptyDataset,
    /// Classification reached a branch without an edge for the example's value.
    #[error("No branch for value {value} of attribute {attribute}.")]
    NoMatchingBranch { attribute: usize, value: String },
    /// An example is too short for the attribute tested by a branch.
    #[error("Attribute {attribute} requested from an example with {len} values.")]
    MissingAttribute { attribute: usize, len: usize },
    /// The classifier was used before `fit`.
    #[error("Tree wasn't built yet.")]
    NotFitted,
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}
