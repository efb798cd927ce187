//! Property tests that drive the containers with random operation
//! sequences and check them against known-good models from the standard
//! library.

use quickcheck::{Arbitrary, Gen};

mod bst;
mod lists;

/// An enum for the various kinds of "things" to do to a list in a
/// quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Append the value at the tail.
    Push(T),
    /// Remove the element at the index. The tests reduce the raw index
    /// modulo the live length plus a margin, so both the hit and the
    /// out-of-range paths get exercised.
    Remove(usize),
}

impl<T: Arbitrary> Arbitrary for Op<T> {
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Push(T::arbitrary(g)),
            1 => Op::Remove(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
