/// Categorical dataset and value traits
pub mod dataset;
/// Reading datasets from text and files
pub mod reader;
