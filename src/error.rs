//! The error type used by this crate.

use thiserror::Error;

/// Which side of an ancestor a misplaced value was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The value sits in the left subtree of an ancestor it is not less than.
    Left,
    /// The value sits in the right subtree of an ancestor it is not greater
    /// than.
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// The ways a tree can fail to be a Binary Search Tree.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantError {
    /// A node's value falls outside the bounds set by its ancestors.
    #[error("value at depth {depth} is out of order in the {side} subtree of an ancestor")]
    OutOfOrder {
        /// Depth of the offending node. The root is at depth 1.
        depth: usize,
        /// Which subtree of the violated ancestor the node was found in.
        side: Side,
    },
}
