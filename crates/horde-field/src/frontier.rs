//! FIFO frontier queue.
//!
//! A plain first-in first-out container. The distance field builder uses it
//! to hold cells awaiting expansion, but nothing here is BFS-specific.

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// Error returned by [`Frontier::dequeue`] on an empty queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontierError {
    /// Dequeue attempted with no items queued.
    Empty,
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "dequeue from empty frontier"),
        }
    }
}

impl Error for FrontierError {}

/// Strict FIFO queue.
#[derive(Clone, PartialEq, Eq)]
pub struct Frontier<T> {
    items: VecDeque<T>,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create an empty frontier with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append `item` at the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the oldest item.
    ///
    /// Dequeuing from an empty frontier is a logic error and is reported as
    /// [`FrontierError::Empty`] rather than a sentinel value.
    pub fn dequeue(&mut self) -> Result<T, FrontierError> {
        self.items.pop_front().ok_or(FrontierError::Empty)
    }

    /// Remove and return the oldest item, or `None` when drained.
    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Frontier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Display for Frontier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frontier({:?})", self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeue_is_fifo() {
        let mut q = Frontier::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Ok(1));
        q.enqueue(4);
        assert_eq!(q.dequeue(), Ok(2));
        assert_eq!(q.dequeue(), Ok(3));
        assert_eq!(q.dequeue(), Ok(4));
        assert!(q.is_empty());
    }

    #[test]
    fn dequeue_empty_fails_loudly() {
        let mut q: Frontier<u32> = Frontier::new();
        assert_eq!(q.dequeue(), Err(FrontierError::Empty));
        assert_eq!(q.try_dequeue(), None);
        assert_eq!(
            FrontierError::Empty.to_string(),
            "dequeue from empty frontier"
        );
    }

    #[test]
    fn clear_drops_everything() {
        let mut q = Frontier::with_capacity(4);
        q.enqueue('a');
        q.enqueue('b');
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(FrontierError::Empty));
    }

    #[test]
    fn display_lists_items_oldest_first() {
        let mut q: Frontier<u8> = Frontier::default();
        q.enqueue(5);
        q.enqueue(6);
        assert_eq!(q.to_string(), "Frontier([5, 6])");
    }
}
