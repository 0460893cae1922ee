//! Basic tier: traversal and aggregation.
//!
//! Every routine here is a single O(n) pass with O(1) extra space.

use std::fmt::Display;
use std::io::{self, Write};

use crate::error::{ArrayError, ArrayResult};

/// Smallest and largest element of a non-empty array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMax {
    pub min: i32,
    pub max: i32,
}

/// Sum all elements. An empty array sums to 0.
///
/// Accumulates in `i64` so no slice shorter than 2^32 elements can overflow.
pub fn sum(arr: &[i32]) -> i64 {
    let mut total: i64 = 0;
    for &value in arr {
        total += i64::from(value);
    }
    total
}

/// Arithmetic mean of the elements.
///
/// Returns [`ArrayError::Empty`] for a zero-length array.
pub fn average(arr: &[i32]) -> ArrayResult<f64> {
    if arr.is_empty() {
        return Err(ArrayError::Empty);
    }
    Ok(sum(arr) as f64 / arr.len() as f64)
}

/// Find the minimum and maximum in one pass.
pub fn min_max(arr: &[i32]) -> ArrayResult<MinMax> {
    let (&first, rest) = arr.split_first().ok_or(ArrayError::Empty)?;

    let mut result = MinMax {
        min: first,
        max: first,
    };
    for &value in rest {
        if value > result.max {
            result.max = value;
        }
        if value < result.min {
            result.min = value;
        }
    }
    Ok(result)
}

/// Reverse the array in place using two pointers moving inward.
pub fn reverse<T>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }

    let mut i = 0;
    let mut j = arr.len() - 1;
    while i < j {
        arr.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Render elements separated by single spaces.
pub fn format_array<T: Display>(arr: &[T]) -> String {
    let mut out = String::new();
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// Write the space-separated elements followed by a newline.
pub fn print_array<W: Write, T: Display>(w: &mut W, arr: &[T]) -> io::Result<()> {
    writeln!(w, "{}", format_array(arr))
}
