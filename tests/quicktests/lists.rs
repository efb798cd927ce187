use chains::{doubly, singly, Error};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to both list variants and a `Vec` model.
/// Every removal must agree with the model, and the doubly linked list's
/// counter must agree with a ground-truth walk after every mutation.
fn do_ops(
    ops: &[Op<i8>],
    singly: &mut singly::List<i8>,
    doubly: &mut doubly::List<i8>,
    model: &mut Vec<i8>,
) -> bool {
    for op in ops {
        match *op {
            Op::Push(x) => {
                singly.push_back(x);
                doubly.push_back(x);
                model.push(x);
            }
            Op::Remove(raw) => {
                // Mostly in range, with a margin of two so the
                // out-of-bounds and empty paths come up as well.
                let index = raw % (model.len() + 2);

                let expected = if model.is_empty() {
                    Err(Error::Empty)
                } else if index < model.len() {
                    Ok(model.remove(index))
                } else {
                    Err(Error::OutOfBounds(index))
                };

                if singly.remove(index) != expected || doubly.remove(index) != expected {
                    return false;
                }
            }
        }

        // The counter is authoritative and must match what's reachable.
        if doubly.len() != doubly.iter().count() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_both_lists_against_vec(ops: Vec<Op<i8>>) -> bool {
    let mut singly = singly::List::new();
    let mut doubly = doubly::List::new();
    let mut model = Vec::new();

    if !do_ops(&ops, &mut singly, &mut doubly, &mut model) {
        return false;
    }

    // Same elements, same order, in both variants and the model.
    singly.iter().copied().collect::<Vec<_>>() == model
        && doubly.iter().copied().collect::<Vec<_>>() == model
}

#[quickcheck]
fn indexed_access_is_identical_across_variants(ops: Vec<Op<i8>>) -> bool {
    let mut singly = singly::List::new();
    let mut doubly = doubly::List::new();
    let mut model = Vec::new();

    if !do_ops(&ops, &mut singly, &mut doubly, &mut model) {
        return false;
    }

    // Every in-range index answers the same, and the first index past the
    // end fails the same way on both variants.
    (0..model.len()).all(|i| singly.get(i) == doubly.get(i) && doubly.get(i) == Ok(&model[i]))
        && singly.get(model.len()) == doubly.get(model.len())
}

#[quickcheck]
fn backward_traversal_is_the_reverse_of_forward(ops: Vec<Op<i8>>) -> bool {
    let mut singly = singly::List::new();
    let mut doubly = doubly::List::new();
    let mut model = Vec::new();

    if !do_ops(&ops, &mut singly, &mut doubly, &mut model) {
        return false;
    }

    let forward: Vec<_> = doubly.iter().copied().collect();
    let backward: Vec<_> = doubly.iter().rev().copied().collect();

    backward.iter().rev().copied().collect::<Vec<_>>() == forward
}

#[quickcheck]
fn tail_stays_accurate_through_removals(ops: Vec<Op<i8>>, sentinel: i8) -> bool {
    let mut singly = singly::List::new();
    let mut doubly = doubly::List::new();
    let mut model = Vec::new();

    if !do_ops(&ops, &mut singly, &mut doubly, &mut model) {
        return false;
    }

    // If the tail alias ever went stale (say, after removing the last
    // element), this push would vanish or corrupt the chain.
    singly.push_back(sentinel);
    doubly.push_back(sentinel);
    model.push(sentinel);

    singly.back() == Some(&sentinel)
        && singly.iter().copied().collect::<Vec<_>>() == model
        && doubly.iter().copied().collect::<Vec<_>>() == model
}
