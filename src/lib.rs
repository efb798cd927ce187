//! This crate exposes a few classic linked containers (a singly linked
//! sequence, a doubly linked sequence, and a comparator-driven Binary
//! Search Tree) mostly for educational purposes.
//!
//! ## Linked sequences
//!
//! A linked sequence stores its elements in nodes chained by `next` links
//! (and, for the doubly linked variant, `prev` links). Appending at the
//! tail is `O(1)` for both variants; looking an element up by index means
//! walking the chain.
//!
//! The interesting difference is *where the walk starts*. The
//! [singly linked list][singly::List] can only walk forward from the head,
//! so `get(i)` is `O(i)`. The [doubly linked list][doubly::List] keeps a
//! length counter and backward links, so it walks from whichever end is
//! closer: `get(i)` is `O(min(i, len - i))`. That halves the worst-case
//! walk at the cost of one extra link per node and one counter per list.
//!
//! Both lists expose traversal as plain pull-based iterators. There is no
//! background producer to abandon or cancel; dropping the iterator is all
//! the cleanup there is.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. The most important invariants of a BST
//! are:
//!
//! 1. For every node, all the nodes in its left subtree order before its
//!    own value.
//! 2. For every node, all the nodes in its right subtree order after its
//!    own value.
//!
//! "Order" here is decided by a [`Comparator`] bound to the tree when it is
//! constructed, so one tree instance can never accidentally mix two
//! different orderings. Searching takes `O(height)`; the trees here do not
//! self-balance, so adversarial insertion orders degrade to `O(n)`.
//!
//! The [`bst::Tree`] is *strict*: inserting a value that compares equal to
//! one already present is silently ignored, so no duplicates ever coexist.
//!
//! A plain [`binary::Tree`] is also provided. It makes no ordering
//! assumption at all: its `find` is an exhaustive depth-first search, valid
//! for arbitrary hand-assembled trees.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod bst;
pub mod compare;
pub mod doubly;
mod error;
pub mod singly;

pub use compare::{Comparator, Natural};
pub use error::{Error, Result};
