//! An unbalanced Binary Search Tree with uniquely owned nodes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST
//! are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so its shape is decided entirely by the order values arrive
//! in: random input gives a height around `O(lg N)` while sorted input
//! degenerates into a chain of height `N`. Every walk in this crate uses an
//! explicit stack or queue, so even a chain of millions of nodes is safe to
//! search, traverse, clone, compare and drop.
//!
//! ## Layout
//!
//! - [`node`] holds the storage unit, [`Node`], and [`Link`], the optional
//!   owning pointer to one.
//! - [`engine`] holds the stateless operations. Mutating ones take a root
//!   `Link` and return the new root.
//! - [`traverse`] holds in-order, pre-order, post-order and level-order walks.
//! - [`tree`] wraps a root `Link` in [`Tree`], the usual entry point.
//! - [`invariant`] checks the BST property of any tree.
//!
//! # Examples
//!
//! ```
//! use owned_bst::Tree;
//!
//! let mut tree: Tree<_> = [13, 6, 21, 4, 8, 15, 24, 26].into_iter().collect();
//!
//! assert_eq!(
//!     tree.iter().copied().collect::<Vec<_>>(),
//!     vec![4, 6, 8, 13, 15, 21, 24, 26],
//! );
//! assert!(tree.contains(&15));
//! assert!(!tree.contains(&25));
//!
//! tree.remove(&13);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(15));
//! assert_eq!(tree.validate(), Ok(()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod engine;
pub mod error;
pub mod invariant;
pub mod node;
pub mod traverse;
pub mod tree;

pub use error::{InvariantError, Side};
pub use node::{Link, Node};
pub use traverse::Order;
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
