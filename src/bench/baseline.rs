//! Reference sorts that heap sort is compared against
//!
//! Both are textbook recursive divide-and-conquer sorts that return a new
//! vector rather than sorting in place.

use std::cmp::Ordering;

/// Three-way quicksort around the middle element
pub fn quicksort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let pivot = &input[input.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in input {
        match item.cmp(pivot) {
            Ordering::Less => less.push(item.clone()),
            Ordering::Equal => equal.push(item.clone()),
            Ordering::Greater => greater.push(item.clone()),
        }
    }

    let mut sorted = quicksort(&less);
    sorted.append(&mut equal);
    sorted.append(&mut quicksort(&greater));
    sorted
}

/// Top-down mergesort. Stable.
pub fn mergesort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    merge(&mergesort(&input[..mid]), &mergesort(&input[mid..]))
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
