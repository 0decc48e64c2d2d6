//! The four canonical walks over a tree.
//!
//! Each walk is a lazy iterator borrowing the tree and yielding `&T`. The
//! `traverse_*` functions collect those iterators into owned `Vec`s. All of
//! them keep their own stack (or queue), so even a degenerate tree is walked
//! in constant call stack depth.
//!
//! # Examples
//!
//! ```
//! use owned_bst::{Order, Tree};
//!
//! let tree: Tree<_> = [13, 6, 21, 4, 8, 15, 24, 26].into_iter().collect();
//!
//! assert_eq!(
//!     tree.traverse(Order::InOrder).copied().collect::<Vec<_>>(),
//!     vec![4, 6, 8, 13, 15, 21, 24, 26],
//! );
//! assert_eq!(
//!     tree.traverse(Order::LevelOrder).copied().collect::<Vec<_>>(),
//!     vec![13, 6, 21, 4, 8, 15, 24, 26],
//! );
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Which order a walk visits nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the node, then the right subtree. For a BST this is
    /// ascending order.
    InOrder,
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Breadth first: by increasing depth, left to right within a depth.
    LevelOrder,
}

impl Order {
    /// Every order, in the order they're declared.
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::LevelOrder,
    ];
}

/// Collects the values below `root` in ascending order.
pub fn traverse_inorder<T>(root: Option<&Node<T>>) -> Vec<T>
where
    T: Clone,
{
    InOrder::new(root).cloned().collect()
}

/// Collects the values below `root` node first, then left, then right.
pub fn traverse_preorder<T>(root: Option<&Node<T>>) -> Vec<T>
where
    T: Clone,
{
    PreOrder::new(root).cloned().collect()
}

/// Collects the values below `root` children first, left before right.
pub fn traverse_postorder<T>(root: Option<&Node<T>>) -> Vec<T>
where
    T: Clone,
{
    PostOrder::new(root).cloned().collect()
}

/// Collects the values below `root` level by level.
pub fn traverse_levelorder<T>(root: Option<&Node<T>>) -> Vec<T>
where
    T: Clone,
{
    LevelOrder::new(root).cloned().collect()
}

/// Collects the values below `root` in the given `order`.
pub fn traverse<T>(root: Option<&Node<T>>, order: Order) -> Vec<T>
where
    T: Clone,
{
    Traversal::new(root, order).cloned().collect()
}

/// In-order walk. Holds the left spine of every subtree still to be visited.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    /// Starts an in-order walk of the tree below `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// Pre-order walk.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    /// Starts a pre-order walk of the tree below `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// Post-order walk. A node is pushed once to schedule its children and once
/// more, marked as expanded, to be yielded after them.
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    /// Starts a post-order walk of the tree below `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }

        None
    }
}

/// Level-order (breadth first) walk over a FIFO queue.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    /// Starts a level-order walk of the tree below `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

/// A walk in an [`Order`] picked at runtime.
pub enum Traversal<'a, T> {
    /// See [`InOrder`].
    InOrder(InOrder<'a, T>),
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, T>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, T>),
    /// See [`LevelOrder`].
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Traversal<'a, T> {
    /// Starts a walk of the tree below `root` in the given `order`.
    pub fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        match order {
            Order::InOrder => Self::InOrder(InOrder::new(root)),
            Order::PreOrder => Self::PreOrder(PreOrder::new(root)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(root)),
            Order::LevelOrder => Self::LevelOrder(LevelOrder::new(root)),
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::InOrder(walk) => walk.next(),
            Self::PreOrder(walk) => walk.next(),
            Self::PostOrder(walk) => walk.next(),
            Self::LevelOrder(walk) => walk.next(),
        }
    }
}

/// Manual implementations of `Clone` so cloning a walk doesn't require
/// `T: Clone`. Only the borrowed node pointers are copied.
macro_rules! impl_clone_for_walk {
    ($($walk:ident { $field:ident }),* $(,)?) => {$(
        impl<'a, T> Clone for $walk<'a, T> {
            fn clone(&self) -> Self {
                Self {
                    $field: self.$field.clone(),
                }
            }
        }

        impl<'a, T> FusedIterator for $walk<'a, T> {}
    )*};
}

impl_clone_for_walk! {
    InOrder { stack },
    PreOrder { stack },
    PostOrder { stack },
    LevelOrder { queue },
}

impl<'a, T> Clone for Traversal<'a, T> {
    fn clone(&self) -> Self {
        match self {
            Self::InOrder(walk) => Self::InOrder(walk.clone()),
            Self::PreOrder(walk) => Self::PreOrder(walk.clone()),
            Self::PostOrder(walk) => Self::PostOrder(walk.clone()),
            Self::LevelOrder(walk) => Self::LevelOrder(walk.clone()),
        }
    }
}

impl<'a, T> FusedIterator for Traversal<'a, T> {}
