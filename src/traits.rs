//! Common traits for max-heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for max-first heaps (push, peek, pop)
//! - [`KeyedHeap`]: Extended trait adding priority changes for elements
//!   located by a caller-supplied key
//!
//! Unlike the handle-based designs found in Fibonacci or pairing heaps, a
//! [`KeyedHeap`] never hands out positions. Elements are located by key at
//! the time of the update, so nothing can be invalidated by later swaps.

/// Base trait for max-heap/priority queue data structures
///
/// The API mirrors `std::collections::BinaryHeap`: the greatest element comes
/// out first.
///
/// # Example
///
/// ```rust
/// use task_heap::Heap;
/// use task_heap::binary::BinaryMaxHeap;
///
/// let mut heap = BinaryMaxHeap::new();
/// heap.push(3);
/// heap.push(9);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Some(&9));
/// assert_eq!(heap.pop(), Some(9));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the greatest element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the greatest element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Extended heap trait with in-place priority changes
///
/// # Example
///
/// ```rust
/// use task_heap::{Heap, KeyedHeap, Task, TaskQueue};
///
/// let mut queue: TaskQueue<i32> = Heap::new();
/// queue.push(Task::new(1, 1));
/// queue.push(Task::new(2, 2));
///
/// assert!(KeyedHeap::modify_priority(&mut queue, &1, 10));
/// assert_eq!(queue.peek().map(|t| t.id()), Some(1));
/// assert!(!KeyedHeap::modify_priority(&mut queue, &99, 0));
/// ```
pub trait KeyedHeap<T>: Heap<T> {
    /// Identifies an element for lookup
    type Key;

    /// The ordering projection of an element
    type Priority: Ord;

    /// Sets the priority of the first element matching `key` and restores
    /// heap order.
    ///
    /// Returns false, leaving the heap untouched, if no element matches.
    /// A missing key is an ordinary outcome, not an error.
    fn modify_priority(&mut self, key: &Self::Key, priority: Self::Priority) -> bool;
}
