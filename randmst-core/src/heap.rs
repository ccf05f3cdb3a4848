//! Array-backed binary min-heap used by Prim's algorithm.
//!
//! The heap offers `insert` and `extract_min` in `O(log n)` and nothing else:
//! no decrease-key. Callers that need to lower a priority push a new entry
//! and discard stale ones when they surface.

use std::cmp::Ordering;

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors produced by [`MinHeap`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum HeapError {
    /// `extract_min` was called on an empty heap.
    #[error("cannot extract the minimum of an empty heap")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// `extract_min` was called on an empty heap.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// A vertex paired with its tentative connection weight.
///
/// Entries order by weight alone using [`f64::total_cmp`]; the vertex id
/// does not take part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct HeapEntry {
    vertex: usize,
    weight: f64,
}

impl HeapEntry {
    /// Creates an entry for `vertex` at `weight`.
    #[must_use]
    pub const fn new(vertex: usize, weight: f64) -> Self {
        Self { vertex, weight }
    }

    /// Returns the vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the tentative weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap stored in a `Vec`.
///
/// The element at index `i` has children at `2i + 1` and `2i + 2`, and is
/// never greater than either of them.
///
/// # Examples
/// ```
/// use randmst_core::{HeapError, MinHeap};
///
/// let mut heap = MinHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.extract_min(), Ok(3));
/// assert_eq!(heap.extract_min(), Ok(5));
/// assert_eq!(heap.extract_min(), Err(HeapError::Empty));
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    nodes: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap able to hold `capacity` entries without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Appends `node` and restores the heap invariant by sifting it up.
    pub fn insert(&mut self, node: T) {
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Removes and returns the minimum entry.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no entries.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let last = self.nodes.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.nodes.swap(0, last);
        let root = self.nodes.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0);
        Ok(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index] >= self.nodes[parent] {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.nodes[left] < self.nodes[smallest] {
                smallest = left;
            }
            if right < len && self.nodes[right] < self.nodes[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.nodes.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}
