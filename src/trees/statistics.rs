//! Information-theoretic statistics used to pick split attributes.
use super::params::AttributeIndexing;
use crate::data::dataset::{Dataset, WholeNumber};
use rayon::prelude::*;
use std::collections::HashMap;

/// Entropy and information gain over subsets of a training dataset.
///
/// Subsets are slices of row indices into the dataset. Value domains are taken
/// once over the whole dataset, so a value missing from a subset still counts
/// as a (zero mass) outcome.
pub struct AttributeStatistics<'a, T: WholeNumber> {
    dataset: &'a Dataset<T>,
    domains: Vec<Vec<T>>,
}

impl<'a, T: WholeNumber> AttributeStatistics<'a, T> {
    pub fn new(dataset: &'a Dataset<T>) -> Self {
        let domains = (0..=dataset.class_column())
            .map(|column| dataset.distinct_values(column))
            .collect();
        Self { dataset, domains }
    }

    pub fn dataset(&self) -> &'a Dataset<T> {
        self.dataset
    }

    /// Distinct values of `column` over the entire dataset, in first-seen order.
    pub fn attribute_values(&self, column: usize) -> &[T] {
        &self.domains[column]
    }

    /// Rows of `rows` whose `column` equals `value`.
    pub fn partition(&self, rows: &[usize], column: usize, value: T) -> Vec<usize> {
        rows.iter()
            .copied()
            .filter(|&row| self.dataset.value(row, column) == value)
            .collect()
    }

    /// Shannon entropy (base 2) of the values of `column` within `rows`.
    ///
    /// Zero-count values contribute nothing and an empty subset has entropy 0.
    pub fn entropy(&self, column: usize, rows: &[usize]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let mut counts: HashMap<T, usize> = HashMap::new();
        for &row in rows {
            *counts.entry(self.dataset.value(row, column)).or_insert(0) += 1;
        }

        let total = rows.len() as f64;
        // every term is <= 0
        self.domains[column]
            .iter()
            .filter_map(|value| counts.get(value))
            .map(|&count| {
                let p = count as f64 / total;
                p * p.log2()
            })
            .sum::<f64>()
            .abs()
    }

    /// Entropy of `response` conditioned on `prior`: the size-weighted average of
    /// `entropy(response, partition)` over the partitions of `rows` by `prior`.
    pub fn conditional_entropy(&self, response: usize, prior: usize, rows: &[usize]) -> f64 {
        if rows.is_empty() {
            return 0.0;
        }
        let total = rows.len() as f64;
        self.domains[prior]
            .iter()
            .map(|&value| {
                let pool = self.partition(rows, prior, value);
                if pool.is_empty() {
                    0.0
                } else {
                    pool.len() as f64 / total * self.entropy(response, &pool)
                }
            })
            .sum()
    }

    /// Reduction of the entropy of `target` obtained by knowing `split`.
    pub fn information_gain(&self, split: usize, target: usize, rows: &[usize]) -> f64 {
        self.entropy(target, rows) - self.conditional_entropy(target, split, rows)
    }

    /// Candidate with the strictly greatest information gain together with that gain.
    ///
    /// Ties keep the earliest candidate. Gains are computed in parallel, the
    /// maximum is taken in candidate order.
    pub fn best_split(
        &self,
        candidates: &[usize],
        target: usize,
        rows: &[usize],
        indexing: AttributeIndexing,
    ) -> Option<(usize, f64)> {
        let gains: Vec<(usize, f64)> = candidates
            .par_iter()
            .enumerate()
            .map(|(position, &attribute)| {
                let column = match indexing {
                    AttributeIndexing::ById => attribute,
                    AttributeIndexing::ByPosition => position,
                };
                (attribute, self.information_gain(column, target, rows))
            })
            .collect();

        gains
            .into_iter()
            .fold(None, |best, (attribute, gain)| match best {
                None => Some((attribute, gain)),
                Some((_, best_gain)) if gain > best_gain => Some((attribute, gain)),
                Some(_) => best,
            })
    }

    pub fn select_best_attribute(
        &self,
        candidates: &[usize],
        target: usize,
        rows: &[usize],
        indexing: AttributeIndexing,
    ) -> Option<usize> {
        self.best_split(candidates, target, rows, indexing)
            .map(|(attribute, _)| attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture() -> Dataset<i32> {
        Dataset::from_rows(&[vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap()
    }

    // class equals attribute 0, attribute 1 carries nothing, attribute 2 a little
    fn skewed() -> Dataset<i32> {
        Dataset::from_rows(&[
            vec![0, 0, 0, 0],
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 1],
            vec![1, 1, 0, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_attribute_values_use_whole_dataset() {
        let dataset = fixture();
        let stats = AttributeStatistics::new(&dataset);
        assert_eq!(stats.attribute_values(0), &[0, 1]);
        assert_eq!(stats.attribute_values(2), &[0, 1]);
        assert_eq!(stats.partition(&[0, 1], 0, 1), Vec::<usize>::new());
        assert_eq!(stats.partition(&[0, 1, 2, 3], 1, 1), vec![1, 3]);
    }

    #[test]
    fn test_entropy_regression_fixture() {
        let dataset = fixture();
        let stats = AttributeStatistics::new(&dataset);
        let all = [0, 1, 2, 3];

        assert_relative_eq!(stats.entropy(2, &all), 0.8112781244591328, epsilon = 1e-12);
        assert_relative_eq!(stats.conditional_entropy(2, 0, &all), 0.5, epsilon = 1e-12);
        assert_relative_eq!(stats.information_gain(0, 2, &all), 0.3112781244591328, epsilon = 1e-12);
    }

    #[test]
    fn test_entropy_bounds() {
        let dataset =
            Dataset::from_rows(&[vec![0, 5, 0], vec![1, 5, 0], vec![2, 5, 1], vec![3, 5, 1]]).unwrap();
        let stats = AttributeStatistics::new(&dataset);
        let all = [0, 1, 2, 3];

        assert_eq!(stats.entropy(1, &all), 0.0);
        assert!(stats.entropy(1, &all).is_sign_positive());
        assert_relative_eq!(stats.entropy(0, &all), 2.0, epsilon = 1e-12);
        assert_relative_eq!(stats.entropy(2, &all), 1.0, epsilon = 1e-12);
        assert_eq!(stats.entropy(0, &[2]), 0.0);
        assert_eq!(stats.entropy(0, &[]), 0.0);
        assert_eq!(stats.conditional_entropy(2, 0, &[]), 0.0);
    }

    #[test]
    fn test_entropy_on_subset_ignores_absent_values() {
        let dataset = fixture();
        let stats = AttributeStatistics::new(&dataset);

        assert_relative_eq!(stats.entropy(2, &[0, 1]), 1.0, epsilon = 1e-12);
        assert_eq!(stats.entropy(2, &[2, 3]), 0.0);
        assert_eq!(stats.conditional_entropy(2, 0, &[2, 3]), 0.0);
    }

    #[test]
    fn test_select_best_attribute_tie_keeps_first() {
        let dataset = fixture();
        let stats = AttributeStatistics::new(&dataset);
        let all = [0, 1, 2, 3];

        assert_relative_eq!(
            stats.information_gain(0, 2, &all),
            stats.information_gain(1, 2, &all),
            epsilon = 1e-12
        );
        assert_eq!(
            stats.select_best_attribute(&[0, 1], 2, &all, AttributeIndexing::ById),
            Some(0)
        );
        assert_eq!(
            stats.select_best_attribute(&[1, 0], 2, &all, AttributeIndexing::ById),
            Some(1)
        );
        assert_eq!(stats.select_best_attribute(&[], 2, &all, AttributeIndexing::ById), None);
    }

    #[test]
    fn test_select_best_attribute_by_id() {
        let dataset = skewed();
        let stats = AttributeStatistics::new(&dataset);
        let all = [0, 1, 2, 3];

        let (attribute, gain) = stats
            .best_split(&[0, 1, 2], 3, &all, AttributeIndexing::ById)
            .unwrap();
        assert_eq!(attribute, 0);
        assert_relative_eq!(gain, 1.0, epsilon = 1e-12);

        let (attribute, gain) = stats
            .best_split(&[1, 2], 3, &all, AttributeIndexing::ById)
            .unwrap();
        assert_eq!(attribute, 2);
        assert_relative_eq!(gain, 0.3112781244591328, epsilon = 1e-12);
    }

    #[test]
    fn test_select_best_attribute_by_position() {
        let dataset = skewed();
        let stats = AttributeStatistics::new(&dataset);
        let all = [0, 1, 2, 3];

        // position 0 is scored on column 0, which predicts the class perfectly
        let (attribute, gain) = stats
            .best_split(&[1, 2], 3, &all, AttributeIndexing::ByPosition)
            .unwrap();
        assert_eq!(attribute, 1);
        assert_relative_eq!(gain, 1.0, epsilon = 1e-12);
    }
}
