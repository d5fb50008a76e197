/// Error rate over a labelled test set
pub mod evaluation;
