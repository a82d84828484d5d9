//! Array-backed binary max-heaps for Rust
//!
//! This crate provides a binary max-heap engine and the data structures built
//! on it:
//!
//! - **Heap engine** ([`engine`]): sift-up, bounded sift-down, O(n) bottom-up
//!   heapify and in-place heap sort over any slice
//! - **Task queue** ([`queue`]): a max-priority queue of [`Task`]s with
//!   insert, extract-max, peek and priority changes by task identifier
//! - **Plain max-heap** ([`binary`]): the engine over elements that are their
//!   own priority
//! - **Sort comparison** ([`bench`]): times heap sort against quicksort and
//!   mergesort baselines on generated arrays
//!
//! Every structure here is single-threaded. Wrap a queue in a lock if it has
//! to be shared.
//!
//! # Example
//!
//! ```rust
//! use task_heap::{Task, TaskQueue};
//!
//! let mut queue = TaskQueue::new();
//! for (id, priority) in [(1, 3), (2, 5), (3, 7), (4, 1), (5, 9), (6, 2)] {
//!     queue.insert(Task::new(id, priority));
//! }
//!
//! assert_eq!(queue.peek().map(|t| t.id()), Some(5));
//! assert!(queue.modify_priority(4, 10));
//!
//! let priorities: Vec<i32> = queue.drain().map(|t| *t.priority()).collect();
//! assert_eq!(priorities, [10, 9, 7, 5, 3, 2]);
//! ```

pub mod bench;
pub mod binary;
pub mod engine;
pub mod queue;
pub mod task;
pub mod traits;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

// Re-export the main types for convenience
pub use binary::BinaryMaxHeap;
pub use engine::heap_sort;
pub use queue::TaskQueue;
pub use task::{Task, TaskId};
pub use traits::{Heap, KeyedHeap};
