//! Decision Tree Classifier
use super::builder::TreeBuilder;
use super::node::TreeNode;
use super::params::{AttributeIndexing, TreeClassifierParams};
use crate::data::dataset::{Dataset, WholeNumber};
use crate::errors::Id3Error;
use crate::metrics::evaluation::{evaluate, Evaluation, NoMatchPolicy};
use log::info;
use nalgebra::{DMatrix, DVector};

/// ID3 decision tree classifier over integer-coded categorical data.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<T: WholeNumber> {
    root: Option<TreeNode<T>>,
    tree_params: TreeClassifierParams,
}

impl<T: WholeNumber> Default for DecisionTreeClassifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: WholeNumber> DecisionTreeClassifier<T> {
    /// Creates a new classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            tree_params: TreeClassifierParams::new(),
        }
    }

    /// Creates a new classifier using the given attribute indexing mode.
    ///
    /// # Arguments
    ///
    /// * `indexing` - Which column scores each candidate attribute, `ById` when `None`.
    pub fn with_params(indexing: Option<AttributeIndexing>) -> Self {
        let mut tree = Self::new();
        tree.set_indexing(indexing.unwrap_or_default());
        tree
    }

    pub fn set_indexing(&mut self, indexing: AttributeIndexing) {
        self.tree_params.set_indexing(indexing)
    }

    pub fn indexing(&self) -> AttributeIndexing {
        self.tree_params.indexing()
    }

    pub fn params(&self) -> &TreeClassifierParams {
        &self.tree_params
    }

    /// The induced tree, `None` before `fit`.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The training examples.
    ///
    /// # Returns
    ///
    /// A string indicating that the tree was built successfully.
    ///
    /// # Errors
    ///
    /// This method will return an error if the dataset is empty.
    pub fn fit(&mut self, dataset: &Dataset<T>) -> Result<String, Id3Error> {
        let root = TreeBuilder::new(dataset, &self.tree_params).build()?;
        info!(
            "Built tree over {} examples: depth {}, {} leaves",
            dataset.nrows(),
            root.depth(),
            root.n_leaves()
        );
        self.root = Some(root);
        Ok("Finished building the tree.".into())
    }

    /// Predicts the class of a single example.
    pub fn classify(&self, example: &[T]) -> Result<T, Id3Error> {
        self.fitted_root()?.classify(example)
    }

    /// Predicts the labels for each row of `features`.
    ///
    /// # Errors
    ///
    /// Fails if the tree wasn't built yet or if a row cannot be routed to a leaf.
    pub fn predict(&self, features: &DMatrix<T>) -> Result<DVector<T>, Id3Error> {
        let root = self.fitted_root()?;
        let predictions = features
            .row_iter()
            .map(|row| {
                let example: Vec<T> = row.iter().copied().collect();
                root.classify(&example)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Classifies every row of `dataset` and summarises the errors.
    pub fn evaluate(
        &self,
        dataset: &Dataset<T>,
        policy: NoMatchPolicy,
    ) -> Result<Evaluation, Id3Error> {
        evaluate(self.fitted_root()?, dataset, policy)
    }

    fn fitted_root(&self) -> Result<&TreeNode<T>, Id3Error> {
        self.root.as_ref().ok_or(Id3Error::NotFitted)
    }
}
