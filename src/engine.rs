//! Array-backed binary max-heap primitives
//!
//! Everything in this module works on a plain slice laid out as an implicit
//! binary tree with zero-based indexing:
//!
//! | Relation | Index        |
//! |----------|--------------|
//! | parent   | `(i - 1) / 2`|
//! | left     | `2i + 1`     |
//! | right    | `2i + 2`     |
//!
//! The `*_by` variants take an "is less" comparator in the style of
//! [`slice::sort_by`], which lets callers order elements by a projection
//! (a task's priority, for example) without requiring `Ord` on the element.
//! The plain variants use the element's own `Ord`.
//!
//! Every routine assumes valid indices. Passing an index or bound outside the
//! slice is a programming error and panics through ordinary slice indexing.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `sift_up`        | O(log n)   |
//! | `sift_down`      | O(log n)   |
//! | `heapify_build`  | O(n)       |
//! | `heap_sort`      | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use task_heap::engine::{heap_sort, heapify_build, is_max_heap};
//!
//! let mut values = vec![25, 45, 1, 66, 5, 14, 19, 9];
//! heapify_build(&mut values);
//! assert!(is_max_heap(&values));
//! assert_eq!(values[0], 66);
//!
//! heap_sort(&mut values);
//! assert_eq!(values, [1, 5, 9, 14, 19, 25, 45, 66]);
//! ```

/// Index of the parent of `index`. The root has no parent.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Index of the left child of `index`
#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`
#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Moves the element at `index` toward the root until its parent is not less
/// than it.
///
/// Only the path from `index` to the root may violate heap order; the subtree
/// below `index` must already be a heap. Equal elements are never swapped.
pub fn sift_up_by<T, F>(storage: &mut [T], mut index: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < storage.len(), "sift_up index out of range");
    while index > 0 {
        let up = parent(index);
        if is_less(&storage[up], &storage[index]) {
            storage.swap(up, index);
            index = up;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` toward the leaves, considering only
/// positions below `bound`.
///
/// At each level the greater child is chosen, preferring the left child when
/// the two compare equal, and the element is swapped with it only if that
/// child is strictly greater. Both child subtrees must already be heaps.
///
/// `bound` is the logical heap size. Heap sort passes a shrinking bound so the
/// sorted tail of the slice is left alone.
pub fn sift_down_by<T, F>(storage: &mut [T], bound: usize, mut index: usize, mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(bound <= storage.len(), "sift_down bound exceeds storage");
    loop {
        let left_child = left(index);
        if left_child >= bound {
            break;
        }

        let right_child = right(index);
        let mut largest = left_child;
        if right_child < bound && is_less(&storage[left_child], &storage[right_child]) {
            largest = right_child;
        }

        if is_less(&storage[index], &storage[largest]) {
            storage.swap(index, largest);
            index = largest;
        } else {
            break;
        }
    }
}

/// Rearranges `storage` into max-heap order.
///
/// Internal nodes are sifted down from the last one back to the root, so each
/// node's subtrees are already heaps when it is visited. This bottom-up pass
/// is O(n), unlike n separate insertions.
pub fn heapify_build_by<T, F>(storage: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = storage.len();
    for index in (0..len / 2).rev() {
        sift_down_by(storage, len, index, &mut is_less);
    }
}

/// Sorts `storage` in ascending order in place.
///
/// Builds a max-heap, then repeatedly swaps the root behind the shrinking
/// heap boundary. The sort is **not stable**: equal elements may end up in
/// any relative order.
pub fn heap_sort_by<T, F>(storage: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    heapify_build_by(storage, &mut is_less);
    for end in (1..storage.len()).rev() {
        storage.swap(0, end);
        sift_down_by(storage, end, 0, &mut is_less);
    }
}

/// Sorts `storage` in ascending order of the key returned by `key`.
///
/// Not stable. See [`heap_sort_by`].
pub fn heap_sort_by_key<T, K, F>(storage: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap_sort_by(storage, |a, b| key(a) < key(b));
}

/// Returns true if no element of `storage` is less than one of its children.
pub fn is_max_heap_by<T, F>(storage: &[T], mut is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..storage.len()).all(|index| !is_less(&storage[parent(index)], &storage[index]))
}

/// [`sift_up_by`] using the element's own ordering
pub fn sift_up<T: Ord>(storage: &mut [T], index: usize) {
    sift_up_by(storage, index, T::lt);
}

/// [`sift_down_by`] using the element's own ordering
pub fn sift_down<T: Ord>(storage: &mut [T], bound: usize, index: usize) {
    sift_down_by(storage, bound, index, T::lt);
}

/// [`heapify_build_by`] using the element's own ordering
pub fn heapify_build<T: Ord>(storage: &mut [T]) {
    heapify_build_by(storage, T::lt);
}

/// [`heap_sort_by`] using the element's own ordering
///
/// This is the entry point the sort comparison harness times against the
/// quicksort and mergesort baselines.
pub fn heap_sort<T: Ord>(storage: &mut [T]) {
    heap_sort_by(storage, T::lt);
}

/// [`is_max_heap_by`] using the element's own ordering
pub fn is_max_heap<T: Ord>(storage: &[T]) -> bool {
    is_max_heap_by(storage, T::lt)
}
