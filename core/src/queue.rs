use std::collections::VecDeque;

use crate::error::{GraphError, Result};

/// Unbounded FIFO queue used to stage a vertex's outgoing neighbors.
///
/// Draining it as an iterator dequeues from the front, so
/// `for v in graph.to_vertices(&x)?` visits neighbors in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Append at the rear. Never fails.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(GraphError::QueueEmpty)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Always false: the queue grows on demand.
    pub fn is_full(&self) -> bool {
        false
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for Queue<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Queue<T> {}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
