//! Recursive ID3 induction.
use super::node::TreeNode;
use super::params::{AttributeIndexing, TreeClassifierParams};
use super::statistics::AttributeStatistics;
use crate::data::dataset::{Dataset, WholeNumber};
use crate::errors::Id3Error;
use log::debug;
use std::collections::HashMap;

/// Builds a [`TreeNode`] from a training dataset.
pub struct TreeBuilder<'a, T: WholeNumber> {
    stats: AttributeStatistics<'a, T>,
    indexing: AttributeIndexing,
    min_support: usize,
}

impl<'a, T: WholeNumber> TreeBuilder<'a, T> {
    pub fn new(dataset: &'a Dataset<T>, params: &TreeClassifierParams) -> Self {
        Self {
            stats: AttributeStatistics::new(dataset),
            indexing: params.indexing(),
            min_support: params.min_support(dataset.nrows()),
        }
    }

    pub fn statistics(&self) -> &AttributeStatistics<'a, T> {
        &self.stats
    }

    /// Induces a tree over every row and every attribute of the dataset.
    ///
    /// The full training set doubles as the root's parent set, so a root that
    /// cannot be split falls back to the training plurality.
    pub fn build(&self) -> Result<TreeNode<T>, Id3Error> {
        let dataset = self.stats.dataset();
        if !dataset.is_not_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        let rows: Vec<usize> = (0..dataset.nrows()).collect();
        let attributes: Vec<usize> = (0..dataset.n_attributes()).collect();
        self.build_node(&rows, &attributes, &rows)
    }

    /// One recursion step over the examples `current`, splitting on one of
    /// `remaining`; `parent` supplies the fallback decision.
    pub fn build_node(
        &self,
        current: &[usize],
        remaining: &[usize],
        parent: &[usize],
    ) -> Result<TreeNode<T>, Id3Error> {
        if current.len() < self.min_support || current.is_empty() {
            return self.plurality_value(parent);
        }

        let class_column = self.stats.dataset().class_column();
        let first = self.class_of(current[0]);
        if current.iter().all(|&row| self.class_of(row) == first) {
            return Ok(TreeNode::leaf(first));
        }

        let Some((attribute, gain)) =
            self.stats
                .best_split(remaining, class_column, current, self.indexing)
        else {
            return self.plurality_value(parent);
        };
        debug!(
            "Splitting {} examples on attribute {} (gain {:.4}, {} attributes left)",
            current.len(),
            attribute,
            gain,
            remaining.len() - 1
        );

        let remaining: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&candidate| candidate != attribute)
            .collect();

        let edges = self
            .stats
            .attribute_values(attribute)
            .iter()
            .map(|&value| -> Result<(T, TreeNode<T>), Id3Error> {
                let partition = self.stats.partition(current, attribute, value);
                Ok((value, self.build_node(&partition, &remaining, current)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TreeNode::Branch { attribute, edges })
    }

    /// Majority class over `rows` as a leaf.
    ///
    /// Among classes sharing the highest count, the one appearing first in row
    /// order wins.
    ///
    /// # Errors
    ///
    /// Returns `Id3Error::EmptyExampleSet` if `rows` is empty.
    pub fn plurality_value(&self, rows: &[usize]) -> Result<TreeNode<T>, Id3Error> {
        let mut counts: HashMap<T, usize> = HashMap::new();
        let mut order = Vec::new();
        for &row in rows {
            let class = self.class_of(row);
            let count = counts.entry(class).or_insert(0);
            if *count == 0 {
                order.push(class);
            }
            *count += 1;
        }

        let mut best: Option<(T, usize)> = None;
        for class in order {
            let count = counts[&class];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((class, count));
            }
        }
        best.map(|(class, _)| TreeNode::leaf(class))
            .ok_or(Id3Error::EmptyExampleSet)
    }

    fn class_of(&self, row: usize) -> T {
        let dataset = self.stats.dataset();
        dataset.value(row, dataset.class_column())
    }
}
