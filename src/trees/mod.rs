/// Recursive tree induction
pub mod builder;
/// Decision tree classifier
pub mod classifier;
/// Tree nodes and classification
pub mod node;
/// Classifier parameters
pub mod params;
/// Entropy and information gain
pub mod statistics;
