//! Demo driver
//!
//! Walks each tier with fixed sample arrays and writes the intermediate
//! results as human-readable text.

use std::io::{self, Write};
use thiserror::Error;
use tracing::info;

use crate::basic::{self, print_array};
use crate::catalog::Tier;
use crate::error::ArrayError;
use crate::{advanced, competitive, intermediate};

/// Errors raised while writing the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("Algorithm failed: {0}")]
    Array(#[from] ArrayError),
}

pub type DemoResult<T> = Result<T, DemoError>;

/// Run the given sections in order, separated by blank lines.
pub fn run<W: Write>(w: &mut W, sections: &[Tier]) -> DemoResult<()> {
    for (i, &tier) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        info!(section = %tier, "running demo section");
        run_section(w, tier)?;
    }
    Ok(())
}

/// Run a single section.
pub fn run_section<W: Write>(w: &mut W, tier: Tier) -> DemoResult<()> {
    match tier {
        Tier::Basic => basic_section(w),
        Tier::Intermediate => intermediate_section(w),
        Tier::Advanced => advanced_section(w),
        Tier::Competitive => competitive_section(w),
    }
}

fn basic_section<W: Write>(w: &mut W) -> DemoResult<()> {
    writeln!(w, "===== Basic Algorithms =====")?;
    let mut numbers = [5, 2, 9, 1, 7];

    write!(w, "Original array: ")?;
    print_array(w, &numbers)?;

    writeln!(w, "Sum of array: {}", basic::sum(&numbers))?;
    writeln!(w, "Average of array: {}", basic::average(&numbers)?)?;

    let mm = basic::min_max(&numbers)?;
    writeln!(w, "Max = {}, Min = {}", mm.max, mm.min)?;

    basic::reverse(&mut numbers);
    write!(w, "Reversed array: ")?;
    print_array(w, &numbers)?;
    Ok(())
}

fn intermediate_section<W: Write>(w: &mut W) -> DemoResult<()> {
    writeln!(w, "===== Intermediate Algorithms =====")?;
    let mut search_array = [7, 3, 9, 2, 5, 3];
    let merge_with = [10, 20, 30];

    writeln!(w, "Index of 5: {}", render_index(intermediate::linear_search(&search_array, &5)))?;

    intermediate::bubble_sort(&mut search_array);
    write!(w, "Bubble Sorted: ")?;
    print_array(w, &search_array)?;

    let mut selection = [7, 4, 2, 8];
    intermediate::selection_sort(&mut selection);
    write!(w, "Selection Sorted: ")?;
    print_array(w, &selection)?;

    let mut insertion = [9, 1, 6, 3];
    intermediate::insertion_sort(&mut insertion);
    write!(w, "Insertion Sorted: ")?;
    print_array(w, &insertion)?;

    writeln!(
        w,
        "Binary search for 9: {}",
        render_index(intermediate::binary_search(&search_array, &9))
    )?;

    intermediate::shift_right(&mut search_array);
    write!(w, "Shift Right: ")?;
    print_array(w, &search_array)?;

    intermediate::shift_left(&mut search_array);
    write!(w, "Shift Left: ")?;
    print_array(w, &search_array)?;

    writeln!(w, "Has duplicates: {}", intermediate::has_duplicates(&search_array))?;

    let merged = intermediate::merge_arrays(&search_array, &merge_with);
    write!(w, "Merged array: ")?;
    print_array(w, &merged)?;
    Ok(())
}

fn advanced_section<W: Write>(w: &mut W) -> DemoResult<()> {
    writeln!(w, "===== Advanced Algorithms =====")?;

    let mut pos_neg = [1, -2, 3, -4, 5];
    advanced::rearrange_pos_neg(&mut pos_neg);
    writeln!(w, "Rearranged pos-neg: {:?}", pos_neg)?;

    writeln!(
        w,
        "Second largest: {}",
        render_element(advanced::second_largest(&[3, 5, 2, 9, 5]))
    )?;
    writeln!(
        w,
        "Second smallest: {}",
        render_element(advanced::second_smallest(&[8, 1, 3, 2, 2]))
    )?;

    write!(w, "Pairs for sum 9: ")?;
    let pairs = advanced::two_sum_pairs(&[2, 7, 11, 15], 9);
    if pairs.is_empty() {
        writeln!(w, "none")?;
    } else {
        writeln!(w)?;
        for (a, b) in pairs {
            writeln!(w, "Pair: {}, {}", a, b)?;
        }
    }

    writeln!(
        w,
        "Max sum of window size 3: {}",
        advanced::max_sum_sliding_window(&[1, 2, 3, 4, 5], 3)?
    )?;

    writeln!(w, "Prefix sum: {:?}", advanced::prefix_sum(&[1, 2, 3, 4]))?;

    writeln!(
        w,
        "Max subarray sum (Kadane's): {}",
        advanced::kadane_max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4])?
    )?;

    let mut rotate_right = [1, 2, 3, 4, 5];
    advanced::rotate_right(&mut rotate_right, 2);
    writeln!(w, "Rotated right by 2: {:?}", rotate_right)?;

    let mut reversed = [1, 2, 3, 4, 5];
    advanced::reverse_range(&mut reversed, 0, 4)?;
    writeln!(w, "Reversed: {:?}", reversed)?;

    let mut rotate_left = [1, 2, 3, 4, 5];
    advanced::rotate_left_in_place(&mut rotate_left, 2);
    writeln!(w, "Rotated left by 2: {:?}", rotate_left)?;
    Ok(())
}

fn competitive_section<W: Write>(w: &mut W) -> DemoResult<()> {
    writeln!(w, "===== Competitive Algorithms =====")?;

    let sorted = [1, 2, 3, 4, 6];
    match competitive::two_pointer_sum(&sorted, 7) {
        Some((l, r)) => writeln!(w, "Pair found: {}, {}", sorted[l], sorted[r])?,
        None => writeln!(w, "No pair found")?,
    }

    let mut flags = [2, 0, 2, 1, 1, 0];
    competitive::sort_012(&mut flags)?;
    writeln!(w, "Sorted 0s,1s,2s: {:?}", flags)?;

    match competitive::subarray_sum(&[1, 4, 20, 3, 10, 5], 33)? {
        Some((start, end)) => writeln!(w, "Subarray found from index {} to {}", start, end)?,
        None => writeln!(w, "No subarray found")?,
    }

    let mut merge_a = [1, 3, 5, 0, 0, 0];
    competitive::merge_sorted_in_place(&mut merge_a, 3, &[2, 4, 6])?;
    writeln!(w, "Merged in-place: {:?}", merge_a)?;

    writeln!(
        w,
        "Missing number: {}",
        competitive::find_missing(&[1, 2, 4, 5, 6], 6)?
    )?;

    writeln!(
        w,
        "Majority element: {}",
        competitive::majority_element(&[2, 2, 1, 1, 2, 2, 2])?
    )?;
    Ok(())
}

fn render_index(index: Option<usize>) -> String {
    index.map_or_else(|| "not found".to_string(), |i| i.to_string())
}

fn render_element(value: Option<i32>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(sections: &[Tier]) -> String {
        let mut buf = Vec::new();
        run(&mut buf, sections).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_basic_section() {
        let out = capture(&[Tier::Basic]);
        assert!(out.contains("Original array: 5 2 9 1 7\n"));
        assert!(out.contains("Sum of array: 24\n"));
        assert!(out.contains("Average of array: 4.8\n"));
        assert!(out.contains("Max = 9, Min = 1\n"));
        assert!(out.contains("Reversed array: 7 1 9 2 5\n"));
    }

    #[test]
    fn test_intermediate_section() {
        let out = capture(&[Tier::Intermediate]);
        assert!(out.contains("Index of 5: 4\n"));
        assert!(out.contains("Bubble Sorted: 2 3 3 5 7 9\n"));
        assert!(out.contains("Selection Sorted: 2 4 7 8\n"));
        assert!(out.contains("Insertion Sorted: 1 3 6 9\n"));
        assert!(out.contains("Binary search for 9: 5\n"));
        assert!(out.contains("Shift Right: 9 2 3 3 5 7\n"));
        assert!(out.contains("Shift Left: 2 3 3 5 7 9\n"));
        assert!(out.contains("Has duplicates: true\n"));
        assert!(out.contains("Merged array: 2 3 3 5 7 9 10 20 30\n"));
    }

    #[test]
    fn test_advanced_section() {
        let out = capture(&[Tier::Advanced]);
        assert!(out.contains("Rearranged pos-neg: [-2, -4, 1, 3, 5]\n"));
        assert!(out.contains("Second largest: 5\n"));
        assert!(out.contains("Second smallest: 2\n"));
        assert!(out.contains("Pair: 2, 7\n"));
        assert!(out.contains("Max sum of window size 3: 12\n"));
        assert!(out.contains("Prefix sum: [1, 3, 6, 10]\n"));
        assert!(out.contains("Max subarray sum (Kadane's): 6\n"));
        assert!(out.contains("Rotated right by 2: [4, 5, 1, 2, 3]\n"));
        assert!(out.contains("Reversed: [5, 4, 3, 2, 1]\n"));
        assert!(out.contains("Rotated left by 2: [3, 4, 5, 1, 2]\n"));
    }

    #[test]
    fn test_competitive_section() {
        let out = capture(&[Tier::Competitive]);
        assert!(out.contains("Pair found: 1, 6\n"));
        assert!(out.contains("Sorted 0s,1s,2s: [0, 0, 1, 1, 2, 2]\n"));
        assert!(out.contains("Subarray found from index 2 to 4\n"));
        assert!(out.contains("Merged in-place: [1, 2, 3, 4, 5, 6]\n"));
        assert!(out.contains("Missing number: 3\n"));
        assert!(out.contains("Majority element: 2\n"));
    }

    #[test]
    fn test_sections_in_order() {
        let out = capture(&Tier::ALL);
        let basic = out.find("===== Basic").unwrap();
        let competitive = out.find("===== Competitive").unwrap();
        assert!(basic < competitive);
        assert!(out.contains("\n\n===== Intermediate"));
    }
}
