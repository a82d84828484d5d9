//! Task priority queue
//!
//! [`TaskQueue`] keeps [`Task`]s in a zero-based array laid out as a binary
//! max-heap ordered by priority. All structural repair is delegated to the
//! sift routines in [`engine`](crate::engine).
//!
//! # Time Complexity
//!
//! | Operation         | Complexity   |
//! |-------------------|--------------|
//! | `insert`          | O(log n)     |
//! | `extract_max`     | O(log n)     |
//! | `peek`            | O(1)         |
//! | `modify_priority` | O(n)         |
//! | `from_tasks`      | O(n)         |
//!
//! # Limitations
//!
//! `modify_priority`, `get` and `contains` find tasks by a linear scan.
//! Keeping an identifier-to-index map alongside the heap would bring
//! `modify_priority` down to O(log n), at the cost of updating the map on
//! every swap. Identifiers are not required to be unique; lookups act on the
//! first match in storage order, which is unspecified.
//!
//! Equal priorities come out in no particular order. There is no FIFO
//! tie-break.
//!
//! The queue is a plain single-threaded data structure. Callers sharing it
//! between threads must serialize access themselves.
//!
//! # Example
//!
//! ```rust
//! use task_heap::{Task, TaskQueue};
//!
//! let mut queue = TaskQueue::new();
//! for (id, priority) in [(1, 3), (2, 5), (3, 7)] {
//!     queue.insert(Task::new(id, priority));
//! }
//! assert_eq!(queue.peek().map(|t| t.id()), Some(3));
//!
//! assert!(queue.modify_priority(1, 8));
//! assert_eq!(queue.peek().map(|t| t.id()), Some(1));
//!
//! let order: Vec<_> = queue.drain().map(|t| t.id()).collect();
//! assert_eq!(order, [1, 3, 2]);
//! assert!(queue.is_empty());
//! ```

use crate::engine;
use crate::task::{Task, TaskId};
use crate::traits::{Heap, KeyedHeap};
use std::iter::FusedIterator;
use tracing::trace;

#[inline]
fn lower_priority<P: Ord, D>(a: &Task<P, D>, b: &Task<P, D>) -> bool {
    a.priority() < b.priority()
}

/// A max-priority queue of [`Task`]s
#[derive(Debug, Clone)]
pub struct TaskQueue<P, D = ()> {
    /// Heap-ordered storage; the root is at index 0
    tasks: Vec<Task<P, D>>,
}

impl<P, D> TaskQueue<P, D> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` tasks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::with_capacity(capacity),
        }
    }

    /// Number of tasks in the queue
    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    /// Same as [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.tasks.capacity()
    }

    /// Removes every task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Returns the highest-priority task without removing it
    pub fn peek(&self) -> Option<&Task<P, D>> {
        self.tasks.first()
    }

    /// Returns the first task with the given identifier
    pub fn get(&self, id: TaskId) -> Option<&Task<P, D>> {
        self.position(id).map(|index| &self.tasks[index])
    }

    /// Returns true if some task carries the given identifier
    pub fn contains(&self, id: TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates over the tasks in storage order, which is arbitrary
    pub fn iter(&self) -> std::slice::Iter<'_, Task<P, D>> {
        self.tasks.iter()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl<P: Ord, D> TaskQueue<P, D> {
    /// Builds a queue from arbitrary tasks in one O(n) heapify pass
    pub fn from_tasks<I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = Task<P, D>>,
    {
        let mut tasks: Vec<_> = tasks.into_iter().collect();
        engine::heapify_build_by(&mut tasks, lower_priority);
        Self { tasks }
    }

    /// Adds a task to the queue
    pub fn insert(&mut self, task: Task<P, D>) {
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        engine::sift_up_by(&mut self.tasks, last, lower_priority);
    }

    /// Removes and returns the highest-priority task, or `None` if the queue
    /// is empty
    pub fn extract_max(&mut self) -> Option<Task<P, D>> {
        if self.tasks.is_empty() {
            return None;
        }

        // swap_remove moves the last task into the root slot
        let max = self.tasks.swap_remove(0);
        let len = self.tasks.len();
        if len > 0 {
            engine::sift_down_by(&mut self.tasks, len, 0, lower_priority);
        }
        Some(max)
    }

    /// Changes the priority of the first task with the given identifier and
    /// restores heap order.
    ///
    /// Returns false without touching the queue if no task matches.
    pub fn modify_priority(&mut self, id: TaskId, priority: P) -> bool {
        let Some(index) = self.position(id) else {
            trace!(task_id = id, "priority change for unknown task");
            return false;
        };

        let old = self.tasks[index].replace_priority(priority);
        if *self.tasks[index].priority() > old {
            engine::sift_up_by(&mut self.tasks, index, lower_priority);
        } else {
            let len = self.tasks.len();
            engine::sift_down_by(&mut self.tasks, len, index, lower_priority);
        }
        trace!(task_id = id, index, "task priority changed");
        true
    }

    /// Consumes the queue, returning its tasks highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<Task<P, D>> {
        let mut sorted = Vec::with_capacity(self.tasks.len());
        while let Some(task) = self.extract_max() {
            sorted.push(task);
        }
        sorted
    }

    /// Removes every task, yielding them highest priority first
    ///
    /// Tasks not consumed before the iterator is dropped stay in the queue.
    pub fn drain(&mut self) -> Drain<'_, P, D> {
        Drain { queue: self }
    }
}

impl<P, D> Default for TaskQueue<P, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord, D> FromIterator<Task<P, D>> for TaskQueue<P, D> {
    fn from_iter<I: IntoIterator<Item = Task<P, D>>>(iter: I) -> Self {
        Self::from_tasks(iter)
    }
}

impl<P: Ord, D> Extend<Task<P, D>> for TaskQueue<P, D> {
    fn extend<I: IntoIterator<Item = Task<P, D>>>(&mut self, iter: I) {
        for task in iter {
            self.insert(task);
        }
    }
}

impl<P: Ord, D> Heap<Task<P, D>> for TaskQueue<P, D> {
    fn new() -> Self {
        TaskQueue::new()
    }

    fn is_empty(&self) -> bool {
        TaskQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        self.size()
    }

    fn push(&mut self, item: Task<P, D>) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&Task<P, D>> {
        TaskQueue::peek(self)
    }

    fn pop(&mut self) -> Option<Task<P, D>> {
        self.extract_max()
    }
}

impl<P: Ord, D> KeyedHeap<Task<P, D>> for TaskQueue<P, D> {
    type Key = TaskId;
    type Priority = P;

    fn modify_priority(&mut self, key: &TaskId, priority: P) -> bool {
        TaskQueue::modify_priority(self, *key, priority)
    }
}

/// Draining iterator returned by [`TaskQueue::drain`]
#[derive(Debug)]
pub struct Drain<'a, P: Ord, D> {
    queue: &'a mut TaskQueue<P, D>,
}

impl<P: Ord, D> Iterator for Drain<'_, P, D> {
    type Item = Task<P, D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.extract_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.size();
        (len, Some(len))
    }
}

impl<P: Ord, D> ExactSizeIterator for Drain<'_, P, D> {}

impl<P: Ord, D> FusedIterator for Drain<'_, P, D> {}
