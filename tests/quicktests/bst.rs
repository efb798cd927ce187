use chains::bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn duplicates_never_grow_the_tree(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    for x in &xs {
        let inserted = tree.insert(*x);
        // `insert` reports a new node exactly when the model sees a new key.
        if inserted != model.insert(*x) {
            return false;
        }
        if tree.len() != model.len() {
            return false;
        }
    }

    tree.len() == model.len()
}

#[quickcheck]
fn agrees_with_btreeset_membership(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut model = BTreeSet::new();

    for x in &xs {
        tree.insert(*x);
        model.insert(*x);
    }

    probes
        .iter()
        .all(|probe| tree.contains(probe) == model.contains(probe))
}

#[quickcheck]
fn custom_comparator_is_used_consistently(xs: Vec<i8>) -> bool {
    // Reverse ordering must not change membership, only shape.
    let mut tree = Tree::with_comparator(|a: &i8, b: &i8| b.cmp(a));
    let mut model = BTreeSet::new();

    for x in &xs {
        tree.insert(*x);
        model.insert(*x);
    }

    tree.len() == model.len() && model.iter().all(|x| tree.contains(x))
}
