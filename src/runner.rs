//! Run a single catalogued algorithm by name.
//!
//! The CLI collects an [`Input`] from flags (or the generator), hands it to
//! [`run`], and prints the resulting [`Report`] as text or JSON.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::catalog::{self, AlgorithmInfo, InputShape};
use crate::error::{ArrayError, ArrayResult};
use crate::intermediate::is_sorted;
use crate::{advanced, basic, competitive, intermediate};

/// Arguments for one algorithm invocation.
#[derive(Debug, Clone, Default)]
pub struct Input {
    /// Primary array
    pub values: Vec<i32>,
    /// Secondary array (`merge-arrays`, `merge-sorted-in-place`)
    pub other: Vec<i32>,
    pub target: Option<i64>,
    pub k: Option<usize>,
    pub m: Option<usize>,
    pub n: Option<u64>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Input {
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    fn target(&self) -> ArrayResult<i64> {
        self.target.ok_or(ArrayError::MissingParameter("target"))
    }

    fn k(&self) -> ArrayResult<usize> {
        self.k.ok_or(ArrayError::MissingParameter("k"))
    }
}

/// Result of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Integer aggregate
    Value { value: i64 },
    Mean { value: f64 },
    Extremes { min: i32, max: i32 },
    /// Search result; `None` means not found
    Index { index: Option<usize> },
    Pair { indices: Option<(usize, usize)> },
    Window { range: Option<(usize, usize)> },
    Truth { value: bool },
    Element { value: Option<i32> },
    Pairs { pairs: Vec<(i32, i32)> },
    /// Array produced or rearranged by the algorithm
    Array { values: Vec<i32> },
    Sums { values: Vec<i64> },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value { value } => write!(f, "{}", value),
            Outcome::Mean { value } => write!(f, "{}", value),
            Outcome::Extremes { min, max } => write!(f, "Max = {}, Min = {}", max, min),
            Outcome::Index { index: Some(i) } => write!(f, "index {}", i),
            Outcome::Index { index: None } => write!(f, "not found"),
            Outcome::Pair {
                indices: Some((l, r)),
            } => write!(f, "indices {}, {}", l, r),
            Outcome::Pair { indices: None } => write!(f, "No pair found"),
            Outcome::Window {
                range: Some((start, end)),
            } => write!(f, "from index {} to {}", start, end),
            Outcome::Window { range: None } => write!(f, "No subarray found"),
            Outcome::Truth { value } => write!(f, "{}", value),
            Outcome::Element { value: Some(v) } => write!(f, "{}", v),
            Outcome::Element { value: None } => write!(f, "none"),
            Outcome::Pairs { pairs } if pairs.is_empty() => write!(f, "no pairs"),
            Outcome::Pairs { pairs } => {
                let rendered: Vec<String> =
                    pairs.iter().map(|(a, b)| format!("({}, {})", a, b)).collect();
                write!(f, "{}", rendered.join(" "))
            }
            Outcome::Array { values } => write!(f, "{:?}", values),
            Outcome::Sums { values } => write!(f, "{:?}", values),
        }
    }
}

/// An executed algorithm with the input it ran on.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub algorithm: &'static str,
    pub input: Vec<i32>,
    pub outcome: Outcome,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {:?}", self.algorithm, self.input)?;
        write!(f, "  => {}", self.outcome)
    }
}

/// Resolve `name` in the catalog and run it on `input`.
pub fn run(name: &str, input: &Input) -> ArrayResult<Report> {
    let info = catalog::find(name).ok_or_else(|| ArrayError::UnknownAlgorithm(name.to_string()))?;
    if !shape_holds(info, &input.values) {
        warn!(
            algorithm = info.name,
            shape = ?info.input,
            "input does not satisfy the algorithm's precondition; result is unspecified"
        );
    }
    debug!(algorithm = info.name, len = input.values.len(), "running");

    let outcome = dispatch(info.name, input)?;
    Ok(Report {
        algorithm: info.name,
        input: input.values.clone(),
        outcome,
    })
}

/// Checks the preconditions the algorithms themselves leave unvalidated.
/// A failed check only produces a warning; the algorithm still runs.
fn shape_holds(info: &AlgorithmInfo, values: &[i32]) -> bool {
    match info.input {
        InputShape::Sorted => is_sorted(values),
        InputShape::Majority => competitive::majority_element_verified(values).is_some(),
        _ => true,
    }
}

fn dispatch(name: &str, input: &Input) -> ArrayResult<Outcome> {
    let values = &input.values;
    let mut owned = values.clone();

    let outcome = match name {
        "sum" => Outcome::Value {
            value: basic::sum(values),
        },
        "average" => Outcome::Mean {
            value: basic::average(values)?,
        },
        "min-max" => {
            let mm = basic::min_max(values)?;
            Outcome::Extremes {
                min: mm.min,
                max: mm.max,
            }
        }
        "reverse" => {
            basic::reverse(&mut owned);
            Outcome::Array { values: owned }
        }
        "linear-search" => Outcome::Index {
            index: intermediate::linear_search(values, &narrow(input.target()?)?),
        },
        "binary-search" => Outcome::Index {
            index: intermediate::binary_search(values, &narrow(input.target()?)?),
        },
        "bubble-sort" => {
            intermediate::bubble_sort(&mut owned);
            Outcome::Array { values: owned }
        }
        "selection-sort" => {
            intermediate::selection_sort(&mut owned);
            Outcome::Array { values: owned }
        }
        "insertion-sort" => {
            intermediate::insertion_sort(&mut owned);
            Outcome::Array { values: owned }
        }
        "shift-right" => {
            intermediate::shift_right(&mut owned);
            Outcome::Array { values: owned }
        }
        "shift-left" => {
            intermediate::shift_left(&mut owned);
            Outcome::Array { values: owned }
        }
        "has-duplicates" => Outcome::Truth {
            value: intermediate::has_duplicates(values),
        },
        "merge-arrays" => Outcome::Array {
            values: intermediate::merge_arrays(values, &input.other),
        },
        "rearrange-pos-neg" => {
            advanced::rearrange_pos_neg(&mut owned);
            Outcome::Array { values: owned }
        }
        "second-largest" => Outcome::Element {
            value: advanced::second_largest(values),
        },
        "second-smallest" => Outcome::Element {
            value: advanced::second_smallest(values),
        },
        "two-sum-pairs" => Outcome::Pairs {
            pairs: advanced::two_sum_pairs(values, input.target()?),
        },
        "max-sum-window" => Outcome::Value {
            value: advanced::max_sum_sliding_window(values, input.k()?)?,
        },
        "prefix-sum" => Outcome::Sums {
            values: advanced::prefix_sum(values),
        },
        "kadane" => Outcome::Value {
            value: advanced::kadane_max_subarray_sum(values)?,
        },
        "rotate-right" => {
            advanced::rotate_right(&mut owned, input.k()?);
            Outcome::Array { values: owned }
        }
        "reverse-range" => {
            let start = input.start.unwrap_or(0);
            let end = input
                .end
                .unwrap_or_else(|| owned.len().saturating_sub(1));
            advanced::reverse_range(&mut owned, start, end)?;
            Outcome::Array { values: owned }
        }
        "rotate-left" => {
            advanced::rotate_left_in_place(&mut owned, input.k()?);
            Outcome::Array { values: owned }
        }
        "two-pointer-sum" => Outcome::Pair {
            indices: competitive::two_pointer_sum(values, input.target()?),
        },
        "sort-012" => {
            competitive::sort_012(&mut owned)?;
            Outcome::Array { values: owned }
        }
        "subarray-sum" => Outcome::Window {
            range: competitive::subarray_sum(values, input.target()?)?,
        },
        "merge-sorted-in-place" => {
            // Without --m the whole primary array is data; room is appended.
            let m = input.m.unwrap_or(owned.len());
            let required = m.saturating_add(input.other.len());
            if owned.len() < required && m <= owned.len() {
                owned.resize(required, 0);
            }
            competitive::merge_sorted_in_place(&mut owned, m, &input.other)?;
            Outcome::Array { values: owned }
        }
        "find-missing" => {
            let n = input.n.unwrap_or_else(|| infer_upper_bound(values));
            debug!(n, "missing number range is 0..=n");
            Outcome::Value {
                value: competitive::find_missing(values, n)?,
            }
        }
        "majority-element" => Outcome::Element {
            value: Some(competitive::majority_element(values)?),
        },
        "majority-element-verified" => Outcome::Element {
            value: competitive::majority_element_verified(values),
        },
        other => return Err(ArrayError::UnknownAlgorithm(other.to_string())),
    };
    Ok(outcome)
}

/// Search targets are compared against `i32` elements.
fn narrow(target: i64) -> ArrayResult<i32> {
    i32::try_from(target).map_err(|_| ArrayError::TargetOutOfRange(target))
}

/// `n` for `0..=n` with one value absent: the largest element, or the
/// length when the absent value is `n` itself.
fn infer_upper_bound(values: &[i32]) -> u64 {
    let largest = values
        .iter()
        .copied()
        .max()
        .and_then(|v| u64::try_from(v).ok())
        .unwrap_or(0);
    largest.max(values.len() as u64)
}
