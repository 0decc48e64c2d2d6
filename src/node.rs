//! The storage unit of a tree. A [`Node`] holds a value and exclusively owns
//! up to two children. It has no behaviour of its own beyond construction and
//! read-only inspection - every mutation lives in [`crate::engine`].

use std::fmt;

/// An optional, owning pointer to a child [`Node`]. An empty `Link` is an
/// empty (sub)tree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of a Binary Search Tree.
///
/// # Examples
///
/// ```
/// use owned_bst::Node;
///
/// let node = Node::new(7);
///
/// assert_eq!(node.value(), &7);
/// assert!(node.left().is_none());
/// assert!(node.right().is_none());
/// assert!(node.is_leaf());
/// ```
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Drop for Node<T> {
    // Every descendant is detached onto a heap allocated stack so each `Box` is
    // freed with no children attached. Stack depth stays constant however
    // degenerate the tree is.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    // Copies the tree top down, pairing each source node with the freshly
    // allocated node it is copied into.
    fn clone(&self) -> Self {
        let mut root = Node::new(self.value.clone());
        {
            let mut stack: Vec<(&Node<T>, &mut Node<T>)> = vec![(self, &mut root)];
            while let Some((source, copy)) = stack.pop() {
                let Node { left, right, .. } = copy;
                if let Some(source_left) = source.left() {
                    let copy_left = left.insert(Box::new(Node::new(source_left.value.clone())));
                    stack.push((source_left, &mut **copy_left));
                }
                if let Some(source_right) = source.right() {
                    let copy_right = right.insert(Box::new(Node::new(source_right.value.clone())));
                    stack.push((source_right, &mut **copy_right));
                }
            }
        }

        root
    }
}

/// Two nodes are equal when the subtrees below them have the same shape
/// holding the same values.
impl<T> PartialEq for Node<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }

            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a_child), Some(b_child)) => stack.push((a_child, b_child)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T> Eq for Node<T> where T: Eq {}

/// Only shows this node's value and those of its direct children, so the
/// output stays the same size however deep the tree is.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
