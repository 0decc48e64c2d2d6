//! An owning handle over a root [`Link`]. [`Tree`] wraps the free functions
//! in [`crate::engine`] and [`crate::traverse`] so callers don't have to thread
//! the root through every call, and keeps a count of its nodes on the side.
//!
//! # Examples
//!
//! ```
//! use owned_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use crate::engine;
use crate::error::InvariantError;
use crate::invariant;
use crate::node::{Link, Node};
use crate::traverse::{InOrder, LevelOrder, Order, PostOrder, PreOrder, Traversal};

/// An unbalanced Binary Search Tree of distinct values. The shape depends
/// only on the order values were inserted and removed in.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, for read-only inspection of the tree's structure.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    ///
    /// // Ascending inserts only ever grow to the right.
    /// tree.extend([4, 5]);
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        engine::height(self.root())
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        engine::min_value_node(self.root()).map(Node::value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        engine::max_value_node(self.root()).map(Node::value)
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        tracing::trace!("cleared tree");
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates over the values node first, then left, then right.
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates over the values children first, left before right.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Iterates over the values level by level, left to right.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the values in the given `order`.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root(), order)
    }

    /// Gives up ownership of the root link, e.g. to continue with the free
    /// functions in [`crate::engine`].
    pub fn into_root(self) -> Link<T> {
        self.root
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool {
        engine::search(self.root(), value)
    }

    /// The values visited while looking for `value`. See
    /// [`engine::search_path`].
    pub fn search_path(&self, value: &T) -> Vec<&T> {
        engine::search_path(self.root(), value)
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree
    /// untouched, if the value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = engine::insert_into(&mut self.root, value);
        if inserted {
            self.len += 1;
        }

        tracing::trace!(inserted, len = self.len, "insert");
        inserted
    }

    /// Removes `value` from the tree. Returns `false` if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use owned_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    ///
    /// // 2's in-order successor moved up into the root.
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let removed = engine::remove_from(&mut self.root, value);
        if removed {
            self.len -= 1;
        }

        tracing::trace!(removed, len = self.len, "remove");
        removed
    }

    /// Checks the BST property over the whole tree. See
    /// [`invariant::validate`].
    pub fn validate(&self) -> Result<(), InvariantError> {
        invariant::validate(self.root())
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Two trees are equal when they have the same shape holding the same values.
/// Trees with the same values but a different insertion history usually
/// aren't.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.root == other.root
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Tree<T>> for Link<T> {
    fn from(tree: Tree<T>) -> Self {
        tree.into_root()
    }
}
