//! A strict, comparator-driven Binary Search Tree.
//!
//! "Strict" means duplicates never coexist: inserting a value that compares
//! equal to one already stored is silently discarded. The tree does not
//! self-balance, so insertion order decides its depth; inserting sorted
//! input degrades insert and find to `O(n)`.
//!
//! The ordering is a [`Comparator`] bound at construction. Building a tree
//! under one ordering and probing it under another silently violates the
//! search invariant, which is exactly why the comparator is part of the
//! tree rather than an argument to every call.
//!
//! # Examples
//!
//! ```
//! use chains::bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.find(&8), Some(&8));
//! assert_eq!(tree.find(&9), None);
//!
//! // A duplicate is ignored: no new node, nothing overwritten.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Comparator, Natural};

type SubTree<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: SubTree<T>,
    right: SubTree<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Recursively descends to the insertion point for `value`. Returns
    /// `true` if a node was created, `false` for a duplicate.
    fn insert<C: Comparator<T>>(&mut self, value: T, comparator: &C) -> bool {
        match comparator.compare(&value, &self.value) {
            Ordering::Less => match self.left.as_deref_mut() {
                Some(left) => left.insert(value, comparator),
                None => {
                    self.left = Some(Box::new(Node::new(value)));
                    true
                }
            },
            // Strict tree: the duplicate is dropped here and now.
            Ordering::Equal => false,
            Ordering::Greater => match self.right.as_deref_mut() {
                Some(right) => right.insert(value, comparator),
                None => {
                    self.right = Some(Box::new(Node::new(value)));
                    true
                }
            },
        }
    }

    fn find<'a, C: Comparator<T>>(&'a self, target: &T, comparator: &C) -> Option<&'a T> {
        match comparator.compare(target, &self.value) {
            Ordering::Less => self.left.as_deref()?.find(target, comparator),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref()?.find(target, comparator),
        }
    }
}

/// A Binary Search Tree ordered by a [`Comparator`] fixed at construction.
///
/// Insert and find both cost `O(depth)`. The node count is maintained on
/// every insert, so [`len`](Self::len) is `O(1)`.
pub struct Tree<T, C = Natural> {
    root: SubTree<T>,
    comparator: C,
    len: usize,
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty `Tree` ordered by the type's natural
    /// ordering.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> Tree<T, C> {
    /// Generates a new, empty `Tree` bound to the given comparator.
    ///
    /// The comparator must be total and consistent for every value this
    /// tree will ever hold; it defines what "duplicate" means.
    ///
    /// # Examples
    ///
    /// ```
    /// use chains::bst::Tree;
    ///
    /// // Largest first.
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree, keeping the search invariant.
    ///
    /// An empty tree makes the value its root. Otherwise the tree recurses
    /// from the root, descending left on `Less` and right on `Greater`;
    /// `Equal` means the value is a duplicate and is silently discarded.
    /// Returns whether a node was actually created.
    ///
    /// # Examples
    ///
    /// ```
    /// use chains::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2)); // duplicate
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match self.root.as_deref_mut() {
            Some(root) => root.insert(value, &self.comparator),
            None => {
                self.root = Some(Box::new(Node::new(value)));
                true
            }
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Finds the stored value comparing equal to `target`, descending one
    /// branch per level. Absence is `None`, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chains::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T> {
        self.root
            .as_deref()
            .and_then(|root| root.find(target, &self.comparator))
    }

    /// Returns `true` if a value comparing equal to `target` is stored.
    pub fn contains(&self, target: &T) -> bool {
        self.find(target).is_some()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Tree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
