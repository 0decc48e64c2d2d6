use owned_bst::engine::{
    count_nodes, height, insert, remove, search, traverse_inorder, traverse_postorder,
    traverse_preorder,
};
use owned_bst::invariant::validate;
use owned_bst::Link;
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

fn build(xs: &[i16]) -> Link<i16> {
    xs.iter().fold(None, |root, x| insert(root, *x))
}

#[quickcheck]
fn inorder_matches_sorted_distinct(xs: Vec<i16>) -> bool {
    let root = build(&xs);
    let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    traverse_inorder(root.as_deref()) == expected && count_nodes(root.as_deref()) == expected.len()
}

#[quickcheck]
fn invariant_holds_after_every_op(ops: Vec<Op<i16>>) -> bool {
    let mut root = None;
    for op in ops {
        root = match op {
            Op::Insert(x) => insert(root, x),
            Op::Remove(x) => remove(root, &x),
        };
        if validate(root.as_deref()).is_err() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn delete_then_search(xs: Vec<i16>) -> bool {
    let mut root = build(&xs);
    for x in &xs {
        root = remove(root, x);
        if search(root.as_deref(), x) {
            return false;
        }
    }

    root.is_none() && height(root.as_deref()) == 0
}

#[quickcheck]
fn preorder_rebuilds_insert_built_tree(xs: Vec<i16>) -> bool {
    let root = build(&xs);
    let rebuilt = build(&traverse_preorder(root.as_deref()));

    rebuilt == root
}

#[quickcheck]
fn postorder_ends_at_root(xs: Vec<i16>) -> bool {
    let root = build(&xs);
    let postorder = traverse_postorder(root.as_deref());

    postorder.last() == root.as_deref().map(|node| node.value())
}
