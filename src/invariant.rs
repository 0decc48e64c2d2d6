//! Checking the BST property of an arbitrary tree.

use crate::error::{InvariantError, Side};
use crate::node::Node;

/// Exclusive bounds inherited from a node's ancestors.
struct Bounds<'a, T> {
    lower: Option<&'a T>,
    upper: Option<&'a T>,
}

/// Verifies that every value below `root` is strictly greater than everything
/// in its left subtree and strictly less than everything in its right subtree.
///
/// Trees built only through [`crate::engine`] or [`crate::Tree`] always pass.
///
/// # Errors
///
/// Returns the first violation found walking the tree in pre-order.
///
/// # Examples
///
/// ```
/// use owned_bst::{invariant::validate, Tree};
///
/// let tree: Tree<_> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
/// assert_eq!(validate(tree.root()), Ok(()));
/// ```
pub fn validate<T>(root: Option<&Node<T>>) -> Result<(), InvariantError>
where
    T: Ord,
{
    let mut stack: Vec<(&Node<T>, Bounds<'_, T>, usize)> = root
        .map(|node| {
            let bounds = Bounds {
                lower: None,
                upper: None,
            };
            (node, bounds, 1)
        })
        .into_iter()
        .collect();

    while let Some((node, bounds, depth)) = stack.pop() {
        if let Some(side) = violated_side(&node.value, &bounds) {
            let error = InvariantError::OutOfOrder { depth, side };
            tracing::debug!(%error, "tree failed validation");
            return Err(error);
        }

        if let Some(right) = node.right() {
            let bounds = Bounds {
                lower: Some(&node.value),
                upper: bounds.upper,
            };
            stack.push((right, bounds, depth + 1));
        }
        if let Some(left) = node.left() {
            let bounds = Bounds {
                lower: bounds.lower,
                upper: Some(&node.value),
            };
            stack.push((left, bounds, depth + 1));
        }
    }

    Ok(())
}

fn violated_side<T>(value: &T, bounds: &Bounds<'_, T>) -> Option<Side>
where
    T: Ord,
{
    if bounds.upper.is_some_and(|upper| value >= upper) {
        Some(Side::Left)
    } else if bounds.lower.is_some_and(|lower| value <= lower) {
        Some(Side::Right)
    } else {
        None
    }
}
