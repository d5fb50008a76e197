use crate::data::dataset::{Dataset, WholeNumber};
use crate::errors::Id3Error;
use crate::trees::node::TreeNode;
use log::warn;
use rayon::prelude::*;
use std::fmt::{self, Display};

/// What `evaluate` does with a test row that no branch edge matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Stop and return the `NoMatchingBranch` error of the first such row.
    #[default]
    Abort,
    /// Count the row as wrong and tally it in `Evaluation::unmatched`.
    CountAsWrong,
}

/// Summary of classifying a labelled test set.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub total: usize,
    pub correct: usize,
    /// Misclassified rows, unmatched ones included.
    pub wrong: usize,
    pub unmatched: usize,
    pub error_rate: f64,
}

impl Evaluation {
    pub fn accuracy(&self) -> f64 {
        1.0 - self.error_rate
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TOTAL: {}", self.total)?;
        writeln!(f, "CORRECT: {}", self.correct)?;
        writeln!(f, "WRONG: {}", self.wrong)?;
        if self.unmatched > 0 {
            writeln!(f, "UNMATCHED: {}", self.unmatched)?;
        }
        write!(f, "ERROR RATE: {}%", self.error_rate * 100.0)
    }
}

enum Outcome {
    Correct,
    Wrong,
    Unmatched,
}

/// Classifies every row of `dataset` with `tree` and compares against its label.
///
/// Rows are classified in parallel; neither the tree nor the dataset is modified.
///
/// # Errors
///
/// * `EmptyDataset` - the dataset has no rows.
/// * Any classification error of the first failing row, except `NoMatchingBranch`
///   under `NoMatchPolicy::CountAsWrong`.
pub fn evaluate<T: WholeNumber>(
    tree: &TreeNode<T>,
    dataset: &Dataset<T>,
    policy: NoMatchPolicy,
) -> Result<Evaluation, Id3Error> {
    if !dataset.is_not_empty() {
        return Err(Id3Error::EmptyDataset);
    }

    let outcomes: Vec<Result<Outcome, Id3Error>> = (0..dataset.nrows())
        .into_par_iter()
        .map(|row| match tree.classify(&dataset.attributes(row)) {
            Ok(prediction) if prediction == dataset.y[row] => Ok(Outcome::Correct),
            Ok(_) => Ok(Outcome::Wrong),
            Err(err @ Id3Error::NoMatchingBranch { .. })
                if policy == NoMatchPolicy::CountAsWrong =>
            {
                warn!("Test row {} counted as wrong: {}", row, err);
                Ok(Outcome::Unmatched)
            }
            Err(err) => Err(err),
        })
        .collect();

    let mut correct = 0;
    let mut wrong = 0;
    let mut unmatched = 0;
    for outcome in outcomes {
        match outcome? {
            Outcome::Correct => correct += 1,
            Outcome::Wrong => wrong += 1,
            Outcome::Unmatched => {
                wrong += 1;
                unmatched += 1;
            }
        }
    }

    let total = dataset.nrows();
    Ok(Evaluation {
        total,
        correct,
        wrong,
        unmatched,
        error_rate: wrong as f64 / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::classifier::DecisionTreeClassifier;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    fn trained() -> (DecisionTreeClassifier<i32>, Dataset<i32>) {
        let dataset =
            Dataset::from_rows(&[vec![0, 0, 0], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();
        (classifier, dataset)
    }

    #[test]
    fn test_training_set_has_no_errors() {
        let (classifier, dataset) = trained();
        let evaluation = classifier.evaluate(&dataset, NoMatchPolicy::Abort).unwrap();
        assert_eq!(evaluation.total, 4);
        assert_eq!(evaluation.correct, 4);
        assert_eq!(evaluation.wrong, 0);
        assert_eq!(evaluation.error_rate, 0.0);
        assert_eq!(evaluation.accuracy(), 1.0);
    }

    #[test]
    fn test_larger_training_set_has_no_errors() {
        let rows: Vec<Vec<i32>> = (0..9)
            .map(|i| vec![i % 3, i / 3, (i % 2) * 2, ((i % 3) + (i / 3)) % 2])
            .collect();
        let dataset = Dataset::from_rows(&rows).unwrap();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();

        let evaluation = classifier.evaluate(&dataset, NoMatchPolicy::Abort).unwrap();
        assert_eq!(evaluation.wrong, 0);
    }

    #[test]
    fn test_error_rate() {
        let (classifier, _) = trained();
        let test = Dataset::from_rows(&[vec![0, 0, 1], vec![1, 1, 1], vec![1, 0, 0], vec![0, 1, 1]])
            .unwrap();
        let evaluation = classifier.evaluate(&test, NoMatchPolicy::Abort).unwrap();
        assert_eq!(evaluation.correct, 2);
        assert_eq!(evaluation.wrong, 2);
        assert_relative_eq!(evaluation.error_rate, 0.5);
    }

    #[test]
    fn test_unmatched_abort() {
        let (classifier, _) = trained();
        let test = Dataset::from_rows(&[vec![0, 0, 0], vec![4, 0, 1], vec![0, 9, 1]]).unwrap();
        match classifier.evaluate(&test, NoMatchPolicy::Abort) {
            Err(Id3Error::NoMatchingBranch { attribute, value }) => {
                assert_eq!(attribute, 0);
                assert_eq!(value, "4");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_count_as_wrong() {
        let (classifier, _) = trained();
        let test = Dataset::from_rows(&[vec![0, 0, 0], vec![4, 0, 1], vec![0, 9, 1]]).unwrap();
        let evaluation = classifier
            .evaluate(&test, NoMatchPolicy::CountAsWrong)
            .unwrap();
        assert_eq!(evaluation.total, 3);
        assert_eq!(evaluation.correct, 1);
        assert_eq!(evaluation.wrong, 2);
        assert_eq!(evaluation.unmatched, 2);
    }

    #[test]
    fn test_missing_attribute_always_aborts() {
        let tree = TreeNode::Branch {
            attribute: 3,
            edges: vec![(0, TreeNode::leaf(0))],
        };
        let test = Dataset::from_rows(&[vec![0, 0, 0]]).unwrap();
        assert!(matches!(
            evaluate(&tree, &test, NoMatchPolicy::CountAsWrong),
            Err(Id3Error::MissingAttribute { attribute: 3, len: 2 })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let (classifier, _) = trained();
        let empty = Dataset::new(DMatrix::<i32>::zeros(0, 2), DVector::zeros(0));
        assert!(matches!(
            classifier.evaluate(&empty, NoMatchPolicy::Abort),
            Err(Id3Error::EmptyDataset)
        ));
    }

    #[test]
    fn test_report() {
        let evaluation = Evaluation {
            total: 4,
            correct: 3,
            wrong: 1,
            unmatched: 0,
            error_rate: 0.25,
        };
        assert_eq!(
            evaluation.to_string(),
            "TOTAL: 4\nCORRECT: 3\nWRONG: 1\nERROR RATE: 25%"
        );

        let evaluation = Evaluation {
            unmatched: 1,
            ..evaluation
        };
        assert!(evaluation.to_string().contains("UNMATCHED: 1\n"));
    }
}
