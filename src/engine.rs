//! Stateless algorithms over a [`Node`]-rooted tree.
//!
//! Nothing here holds state between calls. Mutating operations consume the
//! root [`Link`] and hand back the new one, so callers always reassign:
//!
//! ```
//! use owned_bst::engine;
//!
//! let mut root = None;
//! for value in [2, 1, 3] {
//!     root = engine::insert(root, value);
//! }
//! assert!(engine::search(root.as_deref(), &3));
//!
//! root = engine::remove(root, &2);
//! assert!(!engine::search(root.as_deref(), &2));
//!
//! // The successor of 2 took its place.
//! assert_eq!(root.as_deref().map(|n| *n.value()), Some(3));
//! ```
//!
//! All descents are loops rather than recursion, so degenerate (chain shaped)
//! trees cost heap, never call stack.

use std::cmp::Ordering;

use crate::node::{Link, Node};
use crate::traverse::PreOrder;

/// Inserts `value` below `root` and returns the new root. Inserting a value
/// that is already present changes nothing.
///
/// # Examples
///
/// ```
/// use owned_bst::engine::{insert, traverse_inorder};
///
/// let root = insert(None, 5);
/// let root = insert(root, 3);
/// let root = insert(root, 5);
///
/// assert_eq!(traverse_inorder(root.as_deref()), vec![3, 5]);
/// ```
pub fn insert<T>(mut root: Link<T>, value: T) -> Link<T>
where
    T: Ord,
{
    insert_into(&mut root, value);
    root
}

/// Removes the node holding `value` from below `root` and returns the new
/// root. Removing a value that isn't present changes nothing.
///
/// A node with two children keeps its place in the tree: it takes on the
/// value of its in-order successor and the successor's node is unlinked
/// instead.
pub fn remove<T>(mut root: Link<T>, value: &T) -> Link<T>
where
    T: Ord,
{
    remove_from(&mut root, value);
    root
}

/// Whether `target` is stored anywhere below `root`.
pub fn search<T>(root: Option<&Node<T>>, target: &T) -> bool
where
    T: Ord,
{
    let mut current = root;
    while let Some(node) = current {
        current = match target.cmp(&node.value) {
            Ordering::Less => node.left(),
            Ordering::Equal => return true,
            Ordering::Greater => node.right(),
        };
    }

    false
}

/// The values compared against `target` while searching for it, from `root`
/// down. The last entry is `target` itself when it was found, otherwise the
/// leaf where the search fell off the tree.
///
/// # Examples
///
/// ```
/// use owned_bst::engine::{insert, search_path};
///
/// let root = [13, 6, 21, 4, 8, 15].into_iter().fold(None, insert);
///
/// assert_eq!(search_path(root.as_deref(), &15), vec![&13, &21, &15]);
/// assert_eq!(search_path(root.as_deref(), &7), vec![&13, &6, &8]);
/// ```
pub fn search_path<'a, T>(root: Option<&'a Node<T>>, target: &T) -> Vec<&'a T>
where
    T: Ord,
{
    let mut path = Vec::new();
    let mut current = root;
    while let Some(node) = current {
        path.push(&node.value);
        current = match target.cmp(&node.value) {
            Ordering::Less => node.left(),
            Ordering::Equal => break,
            Ordering::Greater => node.right(),
        };
    }

    path
}

/// The leftmost, and so smallest, node below `root`.
pub fn min_value_node<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut current = root?;
    while let Some(left) = current.left() {
        current = left;
    }

    Some(current)
}

/// The rightmost, and so largest, node below `root`.
pub fn max_value_node<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut current = root?;
    while let Some(right) = current.right() {
        current = right;
    }

    Some(current)
}

/// The number of nodes on the longest path from `root` to a leaf. An empty
/// tree has a height of 0 and a lone node a height of 1.
pub fn height<T>(root: Option<&Node<T>>) -> usize {
    let mut height = 0;
    let mut level: Vec<&Node<T>> = root.into_iter().collect();

    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }

    height
}

/// The number of nodes below (and including) `root`.
pub fn count_nodes<T>(root: Option<&Node<T>>) -> usize {
    PreOrder::new(root).count()
}

pub use crate::traverse::{
    traverse_inorder, traverse_levelorder, traverse_postorder, traverse_preorder,
};

/// In-place form of [`insert`]. Returns whether a node was allocated.
pub(crate) fn insert_into<T>(root: &mut Link<T>, value: T) -> bool
where
    T: Ord,
{
    let slot = locate(root, &value);
    if slot.is_some() {
        return false;
    }

    *slot = Some(Box::new(Node::new(value)));
    true
}

/// In-place form of [`remove`]. Returns whether a node was released.
pub(crate) fn remove_from<T>(root: &mut Link<T>, value: &T) -> bool
where
    T: Ord,
{
    let slot = locate(root, value);
    let removed = detach(slot).is_some();

    if cfg!(debug_assertions) {
        if let Some(node) = slot.as_deref() {
            assert_locally_ordered(node);
        }
    }

    removed
}

/// Walks down from `slot` to the link that holds `value`, or to the empty link
/// where `value` would be attached if it isn't in the tree.
fn locate<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => value.cmp(&node.value),
            None => return slot,
        };

        slot = match (slot, ordering) {
            (Some(node), Ordering::Less) => &mut node.left,
            (Some(node), Ordering::Greater) => &mut node.right,
            (slot, _) => return slot,
        };
    }
}

/// Walks left from `slot` until reaching a link whose node has no left child.
fn leftmost<T>(mut slot: &mut Link<T>) -> &mut Link<T> {
    loop {
        let has_left = slot.as_deref().is_some_and(|node| node.left.is_some());

        slot = match (slot, has_left) {
            (Some(node), true) => &mut node.left,
            (slot, _) => return slot,
        };
    }
}

/// Takes the value at the head of `slot` out of the tree and returns the node
/// that was released (which holds that value), leaving a valid BST behind.
fn detach<T>(slot: &mut Link<T>) -> Link<T> {
    let node = slot.as_mut()?;

    match (node.left.is_some(), node.right.is_some()) {
        // Covers both leaves and nodes with only a right child.
        (false, _) => {
            let right = node.right.take();
            std::mem::replace(slot, right)
        }
        (true, false) => {
            let left = node.left.take();
            std::mem::replace(slot, left)
        }
        (true, true) => {
            // The successor has no left child, so unlinking it only promotes its
            // right subtree.
            let successor_slot = leftmost(&mut node.right);
            let mut successor = successor_slot.take()?;
            *successor_slot = successor.right.take();

            std::mem::swap(&mut node.value, &mut successor.value);
            Some(successor)
        }
    }
}

/// Asserts `node` sits strictly between its direct children.
fn assert_locally_ordered<T>(node: &Node<T>)
where
    T: Ord,
{
    if let Some(left) = node.left() {
        assert!(node.value > left.value);
    }
    if let Some(right) = node.right() {
        assert!(node.value < right.value);
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::invariant::validate;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`.
    /// This way we can ensure that after a random smattering of inserts
    /// and deletes we have the same set of values in both.
    fn do_ops<V>(ops: &[Op<V>], mut root: Link<V>, set: &mut BTreeSet<V>) -> Link<V>
    where
        V: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    root = insert(root, v.clone());
                    set.insert(v.clone());
                }
                Op::Remove(v) => {
                    let before = count_nodes(root.as_deref());
                    root = remove(root, v);
                    let expected_drop = usize::from(set.remove(v));
                    assert_eq!(count_nodes(root.as_deref()), before - expected_drop);
                }
                Op::Iter => {
                    let expected: Vec<_> = set.iter().cloned().collect();
                    assert_eq!(traverse_inorder(root.as_deref()), expected);
                }
            }
        }

        root
    }

    #[quickcheck]
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut set = BTreeSet::new();
        let root = do_ops(&ops, None, &mut set);

        validate(root.as_deref()).is_ok()
            && set.iter().all(|v| search(root.as_deref(), v))
            && count_nodes(root.as_deref()) == set.len()
    }

    #[quickcheck]
    fn remove_missing_leaves_shape(xs: Vec<i8>, missing: i8) -> bool {
        let root = xs.iter().fold(None, |root, x| insert(root, *x));
        if search(root.as_deref(), &missing) {
            return true;
        }

        remove(root.clone(), &missing) == root
    }

    #[quickcheck]
    fn height_bounds(xs: Vec<i8>) -> bool {
        let root = xs.iter().fold(None, |root, x| insert(root, *x));
        let count = count_nodes(root.as_deref());
        let height = height(root.as_deref());

        // A tree of n nodes is at least ceil(log2(n + 1)) and at most n tall.
        let capacity = 1usize.checked_shl(height as u32).unwrap_or(usize::MAX);
        height <= count && count < capacity
    }
}
