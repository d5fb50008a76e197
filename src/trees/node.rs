use crate::data::dataset::WholeNumber;
use crate::errors::Id3Error;
use std::fmt::{self, Display, Formatter};

/// Decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<T: WholeNumber> {
    /// Assigns `decision` to every example reaching it.
    Leaf { decision: T },
    /// Routes an example by its value of `attribute`.
    ///
    /// `edges` holds at most one child per value, in first-seen order of the
    /// attribute's values over the training set.
    Branch {
        attribute: usize,
        edges: Vec<(T, TreeNode<T>)>,
    },
}

impl<T: WholeNumber> TreeNode<T> {
    pub fn leaf(decision: T) -> Self {
        TreeNode::Leaf { decision }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Child reached through the edge labelled `value`, if any.
    pub fn child(&self, value: T) -> Option<&TreeNode<T>> {
        match self {
            TreeNode::Leaf { .. } => None,
            TreeNode::Branch { edges, .. } => edges
                .iter()
                .find(|(edge_value, _)| *edge_value == value)
                .map(|(_, child)| child),
        }
    }

    /// Predicts the class of `example` (attribute values, label optional).
    ///
    /// # Errors
    ///
    /// * `NoMatchingBranch` - a branch has no edge for the example's value.
    /// * `MissingAttribute` - the example is too short for a tested attribute.
    pub fn classify(&self, example: &[T]) -> Result<T, Id3Error> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { decision } => return Ok(*decision),
                TreeNode::Branch { attribute, .. } => {
                    let value = *example.get(*attribute).ok_or(Id3Error::MissingAttribute {
                        attribute: *attribute,
                        len: example.len(),
                    })?;
                    node = node.child(value).ok_or_else(|| Id3Error::NoMatchingBranch {
                        attribute: *attribute,
                        value: value.to_string(),
                    })?;
                }
            }
        }
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Branch { edges, .. } => {
                1 + edges.iter().map(|(_, child)| child.depth()).max().unwrap_or(0)
            }
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Branch { edges, .. } => edges.iter().map(|(_, child)| child.n_leaves()).sum(),
        }
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, indent: usize) -> fmt::Result {
        match self {
            TreeNode::Leaf { decision } => writeln!(f, "{:indent$}class {}", "", decision),
            TreeNode::Branch { attribute, edges } => {
                for (value, child) in edges {
                    match child {
                        TreeNode::Leaf { decision } => writeln!(
                            f,
                            "{:indent$}attr {} = {}: class {}",
                            "", attribute, value, decision
                        )?,
                        TreeNode::Branch { .. } => {
                            writeln!(f, "{:indent$}attr {} = {}:", "", attribute, value)?;
                            child.fmt_indented(f, indent + 2)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl<T: WholeNumber> Display for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
