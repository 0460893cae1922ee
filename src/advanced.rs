//! Advanced tier: selection, sliding windows, prefix sums, Kadane's
//! algorithm and rotations.

use crate::basic;
use crate::error::{ArrayError, ArrayResult};

/// Move negative numbers before non-negative ones (zero counts as
/// non-negative), keeping relative order within each group.
///
/// Two passes over an auxiliary buffer: O(n) time, O(n) space.
pub fn rearrange_pos_neg(arr: &mut [i32]) {
    let mut temp = Vec::with_capacity(arr.len());
    temp.extend(arr.iter().copied().filter(|&v| v < 0));
    temp.extend(arr.iter().copied().filter(|&v| v >= 0));
    arr.copy_from_slice(&temp);
}

/// Second largest distinct value, or `None` if fewer than two distinct
/// values exist.
pub fn second_largest(arr: &[i32]) -> Option<i32> {
    let mut max: Option<i32> = None;
    let mut second: Option<i32> = None;
    for &num in arr {
        match max {
            Some(m) if num < m => {
                if second.map_or(true, |s| num > s) {
                    second = Some(num);
                }
            }
            Some(m) if num == m => {}
            _ => {
                second = max;
                max = Some(num);
            }
        }
    }
    second
}

/// Second smallest distinct value, or `None` if fewer than two distinct
/// values exist.
pub fn second_smallest(arr: &[i32]) -> Option<i32> {
    let mut min: Option<i32> = None;
    let mut second: Option<i32> = None;
    for &num in arr {
        match min {
            Some(m) if num > m => {
                if second.map_or(true, |s| num < s) {
                    second = Some(num);
                }
            }
            Some(m) if num == m => {}
            _ => {
                second = min;
                min = Some(num);
            }
        }
    }
    second
}

/// All value pairs `(arr[i], arr[j])` with `i < j` summing to `target`.
///
/// Brute force over every pair, O(n^2). Works on unsorted input.
pub fn two_sum_pairs(arr: &[i32], target: i64) -> Vec<(i32, i32)> {
    let mut pairs = Vec::new();
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            if i64::from(arr[i]) + i64::from(arr[j]) == target {
                pairs.push((arr[i], arr[j]));
            }
        }
    }
    pairs
}

/// Maximum sum over every contiguous window of exactly `k` elements.
///
/// The window sum is updated incrementally as it slides. Requires
/// `1 <= k <= arr.len()`.
pub fn max_sum_sliding_window(arr: &[i32], k: usize) -> ArrayResult<i64> {
    if k == 0 || k > arr.len() {
        return Err(ArrayError::InvalidWindow { k, len: arr.len() });
    }

    let mut window_sum = basic::sum(&arr[..k]);
    let mut max_sum = window_sum;
    for i in k..arr.len() {
        window_sum += i64::from(arr[i]) - i64::from(arr[i - k]);
        max_sum = max_sum.max(window_sum);
    }
    Ok(max_sum)
}

/// Cumulative sums where `prefix[i] = arr[0] + ... + arr[i]`.
///
/// An empty input yields an empty vector.
pub fn prefix_sum(arr: &[i32]) -> Vec<i64> {
    let mut prefix = Vec::with_capacity(arr.len());
    let mut running: i64 = 0;
    for &value in arr {
        running += i64::from(value);
        prefix.push(running);
    }
    prefix
}

/// Largest sum of any non-empty contiguous subarray (Kadane).
///
/// At each element either extend the current run or start a new one there.
pub fn kadane_max_subarray_sum(arr: &[i32]) -> ArrayResult<i64> {
    let (&first, rest) = arr.split_first().ok_or(ArrayError::Empty)?;

    let mut max_so_far = i64::from(first);
    let mut current_max = i64::from(first);
    for &value in rest {
        let value = i64::from(value);
        current_max = value.max(current_max + value);
        max_so_far = max_so_far.max(current_max);
    }
    Ok(max_so_far)
}

/// Rotate right by `k` positions through an auxiliary buffer.
///
/// `k` is reduced modulo the length; an empty array is left untouched.
pub fn rotate_right<T: Clone>(arr: &mut [T], k: usize) {
    let n = arr.len();
    if n == 0 {
        return;
    }
    let k = k % n;
    if k == 0 {
        return;
    }

    let mut result = arr.to_vec();
    for (i, value) in arr.iter().enumerate() {
        result[(i + k) % n] = value.clone();
    }
    arr.clone_from_slice(&result);
}

/// Reverse the inclusive range `[start, end]` in place.
///
/// `start >= end` is a no-op; `end` past the last index is an error.
pub fn reverse_range<T>(arr: &mut [T], start: usize, end: usize) -> ArrayResult<()> {
    if start >= end {
        return Ok(());
    }
    if end >= arr.len() {
        return Err(ArrayError::IndexOutOfBounds {
            index: end,
            len: arr.len(),
        });
    }
    basic::reverse(&mut arr[start..=end]);
    Ok(())
}

/// Rotate left by `k` positions in place using three reversals.
///
/// O(n) time, O(1) extra space. `k` is reduced modulo the length.
pub fn rotate_left_in_place<T>(arr: &mut [T], k: usize) {
    let n = arr.len();
    if n == 0 {
        return;
    }
    let k = k % n;
    if k == 0 {
        return;
    }

    basic::reverse(&mut arr[..k]);
    basic::reverse(&mut arr[k..]);
    basic::reverse(arr);
}
