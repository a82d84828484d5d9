//! Plain binary max-heap
//!
//! A straightforward binary max-heap over elements that are their own
//! priority, built on the sift routines in [`engine`](crate::engine).
//! It implements only the base [`Heap`] trait. For tasks whose priority can
//! change while queued, use [`TaskQueue`](crate::queue::TaskQueue).
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `push`            | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `peek`            | O(1)       |
//! | `from_vec`        | O(n)       |
//! | `into_sorted_vec` | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use task_heap::binary::BinaryMaxHeap;
//!
//! let mut heap = BinaryMaxHeap::from_vec(vec![3, 1, 2]);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.into_sorted_vec(), [1, 2]);
//! ```

use crate::engine;
use crate::traits::Heap;

/// A simple binary max-heap
#[derive(Debug, Clone)]
pub struct BinaryMaxHeap<T: Ord> {
    /// The heap data in array layout
    data: Vec<T>,
}

impl<T: Ord> BinaryMaxHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Takes ownership of `data` and heapifies it in O(n)
    pub fn from_vec(mut data: Vec<T>) -> Self {
        engine::heapify_build(&mut data);
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        engine::sift_up(&mut self.data, last);
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let result = self.data.swap_remove(0);
        let len = self.data.len();
        if len > 0 {
            engine::sift_down(&mut self.data, len, 0);
        }
        Some(result)
    }

    /// Returns the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        engine::heap_sort(&mut self.data);
        self.data
    }
}

impl<T: Ord> Heap<T> for BinaryMaxHeap<T> {
    fn new() -> Self {
        BinaryMaxHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        BinaryMaxHeap::push(self, item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        BinaryMaxHeap::pop(self)
    }
}

impl<T: Ord> Default for BinaryMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryMaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}
