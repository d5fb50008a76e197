use crate::errors::Id3Error;
use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::cmp::PartialOrd;
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;

pub trait DataValue:
    Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

pub trait Number: DataValue + PartialOrd {}
impl<T> Number for T where T: DataValue + PartialOrd {}

/// Integer-coded categorical value, usable as a hash key.
pub trait WholeNumber: Number + Eq + Hash {}
impl<T> WholeNumber for T where T: Number + Eq + Hash {}

/// Categorical dataset: attribute columns in `x`, class labels in `y`.
///
/// A row of the source table is `x.row(i)` followed by `y[i]`, so the class is
/// addressed as column `x.ncols()` wherever a column index is expected.
#[derive(Clone, PartialEq)]
pub struct Dataset<T: WholeNumber> {
    pub x: DMatrix<T>,
    pub y: DVector<T>,
}

impl<T: WholeNumber> Debug for Dataset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for i in 0..self.x.nrows() {
            write!(f, "        [")?;
            for j in 0..self.x.ncols() {
                write!(f, "{:?}, ", self.x[(i, j)])?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for i in 0..self.y.len() {
            write!(f, "{:?}, ", self.y[i])?;
        }
        write!(f, "]\n}}")
    }
}

impl<T: WholeNumber> Dataset<T> {
    pub fn new(x: DMatrix<T>, y: DVector<T>) -> Self {
        Self { x, y }
    }

    /// Builds a dataset from full rows whose last element is the class label.
    ///
    /// # Errors
    ///
    /// Fails if there are no rows, if a row is empty, or if the rows differ in width.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, Id3Error> {
        let first = rows.first().ok_or(Id3Error::EmptyDataset)?;
        let width = first.len();
        if width == 0 {
            return Err(Id3Error::MissingClassColumn);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Id3Error::RaggedRow {
                row,
                expected: width,
                found,
            });
        }

        let n_attributes = width - 1;
        let x = DMatrix::from_fn(rows.len(), n_attributes, |i, j| rows[i][j]);
        let y = DVector::from_fn(rows.len(), |i, _| rows[i][n_attributes]);
        Ok(Self::new(x, y))
    }

    pub fn into_parts(&self) -> (&DMatrix<T>, &DVector<T>) {
        (&self.x, &self.y)
    }

    pub fn is_not_empty(&self) -> bool {
        !self.y.is_empty()
    }

    pub fn nrows(&self) -> usize {
        self.y.len()
    }

    pub fn n_attributes(&self) -> usize {
        self.x.ncols()
    }

    /// Column index under which the class label is addressed.
    pub fn class_column(&self) -> usize {
        self.x.ncols()
    }

    /// Value of `column` in `row`; `class_column()` yields the label.
    pub fn value(&self, row: usize, column: usize) -> T {
        if column < self.x.ncols() {
            self.x[(row, column)]
        } else {
            self.y[row]
        }
    }

    /// Attribute values of `row`, without the label.
    pub fn attributes(&self, row: usize) -> Vec<T> {
        self.x.row(row).iter().copied().collect()
    }

    /// Distinct values of `column` over every row, in first-seen order.
    pub fn distinct_values(&self, column: usize) -> Vec<T> {
        let mut seen = HashSet::new();
        (0..self.nrows())
            .map(|row| self.value(row, column))
            .filter(|value| seen.insert(*value))
            .collect()
    }

    pub fn class_values(&self) -> Vec<T> {
        self.distinct_values(self.class_column())
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), Id3Error> {
        if !(train_size > 0.0 && train_size < 1.0) {
            return Err(Id3Error::InvalidParameter(
                "train_size".into(),
                "a value between 0.0 and 1.0 (exclusive)".into(),
                train_size.to_string(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.nrows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;
        if train_size == 0 || train_size == self.nrows() {
            return Err(Id3Error::InvalidParameter(
                "train_size".into(),
                "a split leaving both halves non-empty".into(),
                format!("{} of {} rows", train_size, self.nrows()),
            ));
        }
        let (train_indices, test_indices) = indices.split_at(train_size);

        Ok((self.select(train_indices), self.select(test_indices)))
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self::new(self.x.select_rows(indices), self.y.select_rows(indices))
    }
}
