//! Property tests run against the public API only.

use quickcheck::{Arbitrary, Gen};

mod engine;
mod tree;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<V> {
    /// Insert the V into the data structure
    Insert(V),
    /// Remove the V from the data structure
    Remove(V),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(V::arbitrary(g))
        } else {
            Op::Remove(V::arbitrary(g))
        }
    }
}
