//! A doubly linked sequence with bidirectional indexed access.
//!
//! Nodes live in an arena owned by the list and link to each other by slot
//! index rather than by pointer. The back-reference a doubly linked node
//! needs is then just another index: no node owns another, nothing dangles,
//! and removing a node can't double-free anything.
//!
//! The payoff for the extra link and the length counter is the direction
//! heuristic: indexed access walks from whichever end of the list is
//! closer, so `get(i)` costs `O(min(i, len - i))` instead of the singly
//! linked list's `O(i)`.
//!
//! # Examples
//!
//! ```
//! use chains::doubly::List;
//!
//! let mut list: List<_> = (1..=5).collect();
//!
//! assert_eq!(list.get(0), Ok(&1));
//! assert_eq!(list.get(4), Ok(&5));
//!
//! assert_eq!(list.remove(2), Ok(3));
//! assert_eq!(list.len(), 4);
//!
//! // Traversal runs both ways.
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 2, 1]);
//! ```

use std::fmt;

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<usize>,
    prev: Option<usize>,
}

/// A doubly linked list with `O(1)` append and `O(min(i, len - i))`
/// indexed access.
///
/// The length counter is authoritative: every append increments it and
/// every removal decrements it, so `len()` never walks the list.
pub struct List<T> {
    // Arena of nodes. Links are indices into this vec; a vacant slot is
    // `None` and its index is parked in `free` for reuse.
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list in `O(1)`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the tail of the list in `O(1)`.
    pub fn push_back(&mut self, value: T) {
        let node = Node {
            value,
            next: None,
            prev: self.tail,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Walks forward from the head when `index < len / 2` and backward from
    /// the tail otherwise, so the cost is `O(min(index, len - index))`.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements, [`Error::OutOfBounds`]
    /// if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chains::{doubly::List, Error};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.get(0), Err(Error::Empty));
    ///
    /// list.push_back("a");
    /// list.push_back("b");
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// assert_eq!(list.get(2), Err(Error::OutOfBounds(2)));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if index >= self.len {
            return Err(Error::OutOfBounds(index));
        }
        Ok(&self.node(self.slot_of(index)).value)
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Detaches the element at `index` and returns its value.
    ///
    /// Locates the node with the same direction heuristic as
    /// [`get`](Self::get), relinks its neighbours to each other (or moves
    /// `head`/`tail` when the node was at an end), returns the slot to the
    /// free pool, and decrements the length. The counter and the reachable
    /// chain never disagree, even transiently across calls.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the list has no elements, [`Error::OutOfBounds`]
    /// if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        if index >= self.len {
            return Err(Error::OutOfBounds(index));
        }

        let idx = self.slot_of(index);
        let node = self.slots[idx]
            .take()
            .expect("list links only point at occupied slots");

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.free.push(idx);
        self.len -= 1;
        Ok(node.value)
    }

    /// Returns a double-ended iterator over the list.
    ///
    /// Forward traversal follows `next` links from the head; calling
    /// [`rev`](Iterator::rev) on it walks `prev` links from the tail
    /// instead. Each call starts a fresh pull-based walk, and dropping an
    /// iterator partway through needs no cleanup.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Finds the slot holding the element at `index`, starting from
    /// whichever end is closer. `index` must be in bounds.
    fn slot_of(&self, index: usize) -> usize {
        if index < self.len / 2 {
            let mut idx = self.head.expect("non-empty list has a head");
            for _ in 0..index {
                idx = self.node(idx).next.expect("walk stays inside the chain");
            }
            idx
        } else {
            let mut idx = self.tail.expect("non-empty list has a tail");
            for _ in 0..(self.len - 1 - index) {
                idx = self.node(idx).prev.expect("walk stays inside the chain");
            }
            idx
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.slots[idx]
            .as_ref()
            .expect("list links only point at occupied slots")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.slots[idx]
            .as_mut()
            .expect("list links only point at occupied slots")
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A double-ended iterator over a [`List`]. Created by [`List::iter`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    // How many elements are left to yield between the two cursors. Once it
    // hits zero the cursors have met and both directions are done.
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
