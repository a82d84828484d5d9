//! Generic tests for all Heap implementations
//!
//! These tests work with any Heap implementation and exercise the trait
//! interface with edge cases and mixed operation sequences.

use task_heap::binary::BinaryMaxHeap;
use task_heap::queue::TaskQueue;
use task_heap::task::{Task, TaskId};
use task_heap::{Heap, KeyedHeap};

/// Lets one test body build and inspect elements of either heap
trait Element {
    fn make(id: TaskId, priority: i32) -> Self;
    fn rank(&self) -> i32;
}

impl Element for i32 {
    fn make(_id: TaskId, priority: i32) -> Self {
        priority
    }

    fn rank(&self) -> i32 {
        *self
    }
}

impl Element for Task<i32> {
    fn make(id: TaskId, priority: i32) -> Self {
        Task::new(id, priority)
    }

    fn rank(&self) -> i32 {
        *self.priority()
    }
}

fn drain_ranks<T: Element, H: Heap<T>>(heap: &mut H) -> Vec<i32> {
    let mut ranks = Vec::new();
    while let Some(item) = heap.pop() {
        ranks.push(item.rank());
    }
    ranks
}

/// Test that empty heap behaves correctly
fn test_empty_heap<T: Element, H: Heap<T>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());
}

/// Test basic push and pop operations
fn test_basic_operations<T: Element, H: Heap<T>>() {
    let mut heap = H::new();

    for (id, priority) in [3, 5, 7, 1, 9, 2].into_iter().enumerate() {
        heap.push(T::make(id as TaskId, priority));
    }

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.peek().map(Element::rank), Some(9));

    assert_eq!(drain_ranks(&mut heap), [9, 7, 5, 3, 2, 1]);
    assert!(heap.is_empty());
}

/// Test that a fully drained heap is reusable
fn test_drained_heap<T: Element, H: Heap<T>>() {
    let mut heap = H::new();
    heap.push(T::make(1, 4));
    heap.push(T::make(2, 8));
    drain_ranks(&mut heap);

    assert!(heap.is_empty());
    assert!(heap.peek().is_none());
    assert!(heap.pop().is_none());

    heap.push(T::make(3, 6));
    assert_eq!(heap.peek().map(Element::rank), Some(6));
    assert_eq!(heap.len(), 1);
}

/// Test duplicate priorities all come out
fn test_duplicate_priorities<T: Element, H: Heap<T>>() {
    let mut heap = H::new();
    for id in 0..10 {
        heap.push(T::make(id, 5));
    }
    heap.push(T::make(10, 6));
    heap.push(T::make(11, 4));

    assert_eq!(drain_ranks(&mut heap), [6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4]);
}

/// Test negative priorities sort below zero
fn test_negative_priorities<T: Element, H: Heap<T>>() {
    let mut heap = H::new();
    for (id, priority) in [-5, 0, -1, 3, i32::MIN, i32::MAX].into_iter().enumerate() {
        heap.push(T::make(id as TaskId, priority));
    }

    assert_eq!(drain_ranks(&mut heap), [i32::MAX, 3, 0, -1, -5, i32::MIN]);
}

/// Test interleaved push and pop operations
fn test_interleaved_operations<T: Element, H: Heap<T>>() {
    let mut heap = H::new();

    heap.push(T::make(1, 10));
    heap.push(T::make(2, 30));
    assert_eq!(heap.pop().map(|t| t.rank()), Some(30));

    heap.push(T::make(3, 20));
    heap.push(T::make(4, 5));
    assert_eq!(heap.pop().map(|t| t.rank()), Some(20));

    heap.push(T::make(5, 40));
    assert_eq!(heap.len(), 3);
    assert_eq!(drain_ranks(&mut heap), [40, 10, 5]);
}

/// Test ascending and descending insertion orders
fn test_monotone_insertion<T: Element, H: Heap<T>>() {
    let mut ascending = H::new();
    for i in 0..200 {
        ascending.push(T::make(i as TaskId, i));
    }
    assert_eq!(drain_ranks(&mut ascending), (0..200).rev().collect::<Vec<_>>());

    let mut descending = H::new();
    for i in (0..200).rev() {
        descending.push(T::make(i as TaskId, i));
    }
    assert_eq!(drain_ranks(&mut descending), (0..200).rev().collect::<Vec<_>>());
}

/// Test priority changes through the keyed trait
fn test_keyed_priority_changes<H>()
where
    H: KeyedHeap<Task<i32>, Key = TaskId, Priority = i32>,
{
    let mut heap = H::new();
    for id in 1..=3 {
        heap.push(Task::new(id, id as i32));
    }

    assert!(heap.modify_priority(&1, 10));
    assert_eq!(heap.peek().map(Task::id), Some(1));

    assert!(heap.modify_priority(&3, -5));
    assert!(!heap.modify_priority(&42, 0));
    assert_eq!(heap.len(), 3);

    let mut order = Vec::new();
    while let Some(task) = heap.pop() {
        order.push(task.id());
    }
    assert_eq!(order, [1, 2, 3]);
}

#[test]
fn test_empty_heap_all() {
    test_empty_heap::<i32, BinaryMaxHeap<i32>>();
    test_empty_heap::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_basic_operations_all() {
    test_basic_operations::<i32, BinaryMaxHeap<i32>>();
    test_basic_operations::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_drained_heap_all() {
    test_drained_heap::<i32, BinaryMaxHeap<i32>>();
    test_drained_heap::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_duplicate_priorities_all() {
    test_duplicate_priorities::<i32, BinaryMaxHeap<i32>>();
    test_duplicate_priorities::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_negative_priorities_all() {
    test_negative_priorities::<i32, BinaryMaxHeap<i32>>();
    test_negative_priorities::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_interleaved_operations_all() {
    test_interleaved_operations::<i32, BinaryMaxHeap<i32>>();
    test_interleaved_operations::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_monotone_insertion_all() {
    test_monotone_insertion::<i32, BinaryMaxHeap<i32>>();
    test_monotone_insertion::<Task<i32>, TaskQueue<i32>>();
}

#[test]
fn test_keyed_priority_changes_task_queue() {
    test_keyed_priority_changes::<TaskQueue<i32>>();
}
