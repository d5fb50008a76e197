use crate::errors::Id3Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Subsets smaller than `training rows / MIN_SUPPORT_DIVISOR` become a leaf
/// holding the parent's plurality class.
pub const MIN_SUPPORT_DIVISOR: usize = 10;

/// Which column the information gain of a candidate attribute is computed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttributeIndexing {
    /// Gain of a candidate is computed on the candidate's own column.
    #[default]
    ById,
    /// Gain of the candidate at position `i` of the remaining attributes is
    /// computed on column `i`. Reproduces the classic implementation's results.
    ByPosition,
}

impl FromStr for AttributeIndexing {
    type Err = Id3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by-id" => Ok(AttributeIndexing::ById),
            "by-position" => Ok(AttributeIndexing::ByPosition),
            other => Err(Id3Error::InvalidParameter(
                "indexing".into(),
                "one of 'by-id', 'by-position'".into(),
                other.into(),
            )),
        }
    }
}

impl Display for AttributeIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeIndexing::ById => write!(f, "by-id"),
            AttributeIndexing::ByPosition => write!(f, "by-position"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TreeClassifierParams {
    pub indexing: AttributeIndexing,
}

impl TreeClassifierParams {
    pub fn new() -> Self {
        Self {
            indexing: AttributeIndexing::ById,
        }
    }

    pub fn set_indexing(&mut self, indexing: AttributeIndexing) {
        self.indexing = indexing;
    }

    pub fn indexing(&self) -> AttributeIndexing {
        self.indexing
    }

    /// Minimum subset size below which the builder stops splitting.
    pub fn min_support(&self, training_rows: usize) -> usize {
        training_rows / MIN_SUPPORT_DIVISOR
    }
}
