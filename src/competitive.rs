//! Competitive tier: two/three pointer partitioning, variable windows,
//! tail merging, missing-number arithmetic and majority voting.
//!
//! Preconditions that cost O(n) or less to check are validated up front and
//! reported through [`ArrayError`]. Sortedness and majority existence are
//! left to the caller and documented on each function.

use std::cmp::Ordering;

use crate::basic;
use crate::error::{ArrayError, ArrayResult};

/// Find indices `(left, right)` with `arr[left] + arr[right] == target`.
///
/// `arr` must be sorted ascending (not validated). The left pointer moves
/// right when the sum is too small and the right pointer moves left when it
/// is too large, so the scan is O(n). Returns `None` once the pointers meet.
pub fn two_pointer_sum(arr: &[i32], target: i64) -> Option<(usize, usize)> {
    if arr.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = arr.len() - 1;
    while left < right {
        let sum = i64::from(arr[left]) + i64::from(arr[right]);
        match sum.cmp(&target) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Dutch National Flag partition of an array holding only 0, 1 and 2.
///
/// Invariant during the scan (`high` is exclusive):
///
/// ```text
/// [0, low)     all 0
/// [low, mid)   all 1
/// [mid, high)  unclassified
/// [high, n)    all 2
/// ```
///
/// The scan ends when `mid` reaches `high`.
///
/// Every value is checked before anything moves, so an
/// [`ArrayError::InvalidFlagValue`] leaves `arr` unchanged.
pub fn sort_012(arr: &mut [i32]) -> ArrayResult<()> {
    if let Some((index, &value)) = arr
        .iter()
        .enumerate()
        .find(|&(_, &v)| !(0..=2).contains(&v))
    {
        return Err(ArrayError::InvalidFlagValue { index, value });
    }
    if arr.is_empty() {
        return Ok(());
    }

    let mut low = 0;
    let mut mid = 0;
    let mut high = arr.len();
    while mid < high {
        match arr[mid] {
            0 => {
                arr.swap(low, mid);
                low += 1;
                mid += 1;
            }
            1 => mid += 1,
            _ => {
                high -= 1;
                arr.swap(mid, high);
            }
        }
    }
    Ok(())
}

/// First contiguous window `(start, end)` (inclusive) summing to `target`.
///
/// The window grows to the right and shrinks from the left while its sum
/// exceeds `target`. This only finds every match when all values are
/// non-negative, so negative values are rejected.
pub fn subarray_sum(arr: &[i32], target: i64) -> ArrayResult<Option<(usize, usize)>> {
    if let Some((index, &value)) = arr.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(ArrayError::NegativeValue { index, value });
    }

    let mut start = 0;
    let mut sum: i64 = 0;
    for end in 0..arr.len() {
        sum += i64::from(arr[end]);
        while sum > target && start <= end {
            sum -= i64::from(arr[start]);
            start += 1;
        }
        if sum == target && start <= end {
            return Ok(Some((start, end)));
        }
    }
    Ok(None)
}

/// Merge sorted `src` into `dst`, whose first `m` slots hold sorted data and
/// whose remaining slots are scratch space.
///
/// Fills `dst[..m + src.len()]` from the back so no unread element of `dst`
/// is overwritten. Both inputs must be sorted ascending (not validated).
pub fn merge_sorted_in_place<T: Ord + Clone>(
    dst: &mut [T],
    m: usize,
    src: &[T],
) -> ArrayResult<()> {
    let required = m.checked_add(src.len()).ok_or(ArrayError::Overflow)?;
    if required > dst.len() {
        return Err(ArrayError::InsufficientCapacity {
            required,
            capacity: dst.len(),
        });
    }

    // i and j count the unmerged elements left in dst and src.
    let mut i = m;
    let mut j = src.len();
    let mut k = required;
    while i > 0 && j > 0 {
        k -= 1;
        if dst[i - 1] > src[j - 1] {
            dst[k] = dst[i - 1].clone();
            i -= 1;
        } else {
            dst[k] = src[j - 1].clone();
            j -= 1;
        }
    }
    while j > 0 {
        k -= 1;
        dst[k] = src[j - 1].clone();
        j -= 1;
    }
    Ok(())
}

/// The value absent from `0..=n`, computed as `n(n+1)/2 - sum(arr)`.
///
/// Assumes `arr` holds every value of `0..=n` except one (zero may also be
/// omitted since it does not change the sum). The closed form overflows
/// `i64` for `n` above roughly 3.04e9, reported as [`ArrayError::Overflow`].
pub fn find_missing(arr: &[i32], n: u64) -> ArrayResult<i64> {
    let n = i64::try_from(n).map_err(|_| ArrayError::Overflow)?;
    let total = n
        .checked_add(1)
        .and_then(|n1| n.checked_mul(n1))
        .map(|product| product / 2)
        .ok_or(ArrayError::Overflow)?;
    total
        .checked_sub(basic::sum(arr))
        .ok_or(ArrayError::Overflow)
}

/// Boyer-Moore majority vote.
///
/// Assumes a strict majority element exists; otherwise the returned value
/// is whatever candidate survived and carries no meaning. Use
/// [`majority_element_verified`] when existence is not guaranteed.
pub fn majority_element(arr: &[i32]) -> ArrayResult<i32> {
    if arr.is_empty() {
        return Err(ArrayError::Empty);
    }

    let mut count: usize = 0;
    let mut candidate = arr[0];
    for &num in arr {
        if count == 0 {
            candidate = num;
        }
        if num == candidate {
            count += 1;
        } else {
            count -= 1;
        }
    }
    Ok(candidate)
}

/// Majority vote followed by a counting pass that confirms the candidate.
pub fn majority_element_verified(arr: &[i32]) -> Option<i32> {
    let candidate = majority_element(arr).ok()?;
    let occurrences = arr.iter().filter(|&&v| v == candidate).count();
    (occurrences > arr.len() / 2).then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_pointer_sum() {
        let arr = [1, 2, 3, 4, 6];
        let (l, r) = two_pointer_sum(&arr, 7).unwrap();
        assert_eq!((arr[l], arr[r]), (1, 6));
        assert_eq!(two_pointer_sum(&arr, 100), None);
        assert_eq!(two_pointer_sum(&[5], 10), None);
        assert_eq!(two_pointer_sum(&[], 0), None);
    }

    #[test]
    fn test_sort_012() {
        let mut arr = [2, 0, 2, 1, 1, 0];
        sort_012(&mut arr).unwrap();
        assert_eq!(arr, [0, 0, 1, 1, 2, 2]);

        let mut twos = [2, 2, 2];
        sort_012(&mut twos).unwrap();
        assert_eq!(twos, [2, 2, 2]);

        let mut empty: [i32; 0] = [];
        sort_012(&mut empty).unwrap();
    }

    #[test]
    fn test_sort_012_rejects_other_values() {
        let mut arr = [2, 0, 3, 1];
        assert_eq!(
            sort_012(&mut arr),
            Err(ArrayError::InvalidFlagValue { index: 2, value: 3 })
        );
        assert_eq!(arr, [2, 0, 3, 1]);
    }

    #[test]
    fn test_subarray_sum() {
        assert_eq!(subarray_sum(&[1, 4, 20, 3, 10, 5], 33), Ok(Some((2, 4))));
        assert_eq!(subarray_sum(&[1, 2, 3], 7), Ok(None));
        assert_eq!(subarray_sum(&[5], 5), Ok(Some((0, 0))));
        assert_eq!(subarray_sum(&[3, 1], 0), Ok(None));
        assert_eq!(
            subarray_sum(&[1, -1], 0),
            Err(ArrayError::NegativeValue { index: 1, value: -1 })
        );
    }

    #[test]
    fn test_merge_sorted_in_place() {
        let mut dst = [1, 3, 5, 0, 0, 0];
        merge_sorted_in_place(&mut dst, 3, &[2, 4, 6]).unwrap();
        assert_eq!(dst, [1, 2, 3, 4, 5, 6]);

        let mut only_src = [0, 0];
        merge_sorted_in_place(&mut only_src, 0, &[7, 8]).unwrap();
        assert_eq!(only_src, [7, 8]);

        let mut only_dst = [1, 2, 9];
        merge_sorted_in_place(&mut only_dst, 2, &[]).unwrap();
        assert_eq!(only_dst, [1, 2, 9]);

        let mut small = [1, 0];
        assert_eq!(
            merge_sorted_in_place(&mut small, 1, &[2, 3]),
            Err(ArrayError::InsufficientCapacity {
                required: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_find_missing() {
        assert_eq!(find_missing(&[1, 2, 4, 5, 6], 6), Ok(3));
        assert_eq!(find_missing(&[0, 1, 3], 3), Ok(2));
        assert_eq!(find_missing(&[], 0), Ok(0));
        assert_eq!(find_missing(&[], u64::MAX), Err(ArrayError::Overflow));
        assert_eq!(find_missing(&[], 5_000_000_000), Err(ArrayError::Overflow));
    }

    #[test]
    fn test_majority_element() {
        assert_eq!(majority_element(&[2, 2, 1, 1, 2, 2, 2]), Ok(2));
        assert_eq!(majority_element(&[7]), Ok(7));
        assert_eq!(majority_element(&[]), Err(ArrayError::Empty));
    }

    #[test]
    fn test_majority_element_verified() {
        assert_eq!(majority_element_verified(&[2, 2, 1, 1, 2, 2, 2]), Some(2));
        assert_eq!(majority_element_verified(&[1, 2, 3]), None);
        assert_eq!(majority_element_verified(&[1, 1, 2, 2]), None);
        assert_eq!(majority_element_verified(&[]), None);
    }
}
