//! Intermediate tier: searching, quadratic sorts, shifts and merging.

/// Linear search for the first occurrence of `target`.
///
/// Returns the index of the first match, or `None` if absent. O(n).
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    for (i, value) in arr.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Binary search in an ascending array.
///
/// The caller must ensure `arr` is sorted ascending (see [`is_sorted`]); it
/// is not validated. On unsorted input the result is unspecified but the
/// call never panics. When `target` occurs more than once any matching
/// index may be returned. O(log n).
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    // Half-open [low, high) keeps the indices unsigned.
    let mut low = 0;
    let mut high = arr.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if arr[mid] == *target {
            return Some(mid);
        } else if arr[mid] < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}

/// Returns true if `arr` is in ascending (non-decreasing) order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// Bubble sort: repeatedly swap adjacent out-of-order elements.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        for j in 0..len - 1 - i {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Selection sort: move the smallest remaining element into place.
///
/// Not stable: equal keys may change relative order.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let len = arr.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        arr.swap(i, min_index);
    }
}

/// Insertion sort: grow a sorted prefix by sinking each new element.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        // Swap-based shift; equivalent to moving larger elements right.
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Shift every element one position right; the last wraps to the front.
pub fn shift_right<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    for i in (1..arr.len()).rev() {
        arr.swap(i, i - 1);
    }
}

/// Shift every element one position left; the first wraps to the end.
pub fn shift_left<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }
    for i in 0..arr.len() - 1 {
        arr.swap(i, i + 1);
    }
}

/// Brute-force duplicate check comparing every pair. O(n^2).
pub fn has_duplicates<T: PartialEq>(arr: &[T]) -> bool {
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            if arr[i] == arr[j] {
                return true;
            }
        }
    }
    false
}

/// Concatenate `first` followed by `second` into a new vector.
pub fn merge_arrays<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend_from_slice(first);
    merged.extend_from_slice(second);
    merged
}
