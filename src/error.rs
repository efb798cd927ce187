//! The errors the list containers can report.
//!
//! There are only two ways an indexed list operation can fail, and both are
//! recoverable: the list has no elements at all, or the requested index is
//! past the last one. A failed tree search is *not* an error; searching for
//! a value that was never inserted is a perfectly normal outcome, so tree
//! `find` returns an `Option` instead.

/// Error raised by indexed access on [`singly::List`](crate::singly::List)
/// and [`doubly::List`](crate::doubly::List).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The list has no elements.
    #[error("the list is empty")]
    Empty,
    /// The requested index is past the last element.
    #[error("index {0} is out of bounds")]
    OutOfBounds(usize),
}

/// Convenience alias for results of fallible list operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::Empty.to_string(), "the list is empty");
        assert_eq!(Error::OutOfBounds(7).to_string(), "index 7 is out of bounds");
    }
}
