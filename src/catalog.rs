//! Algorithm catalog
//!
//! Static metadata for every routine exposed by the CLI: tier, complexity,
//! the parameters it reads and the shape of input it expects. The runner
//! dispatches on [`AlgorithmInfo::name`] and the generator uses
//! [`InputShape`] to produce inputs that satisfy each precondition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ArrayError;

/// Difficulty tier, matching the library's module layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
    Competitive,
}

impl Tier {
    /// All tiers in presentation order.
    pub const ALL: [Tier; 4] = [
        Tier::Basic,
        Tier::Intermediate,
        Tier::Advanced,
        Tier::Competitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
            Tier::Competitive => "competitive",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ArrayError::UnknownTier(s.to_string()))
    }
}

/// Precondition on the primary input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    /// Any integers.
    Any,
    /// Ascending order.
    Sorted,
    /// Only 0, 1 and 2.
    Flags,
    /// No negative values.
    NonNegative,
    /// One value fills more than half the positions.
    Majority,
}

/// Metadata for one algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    /// Identifier accepted by `arraykit run`
    pub name: &'static str,
    pub tier: Tier,
    pub summary: &'static str,
    pub time: &'static str,
    pub space: &'static str,
    pub input: InputShape,
    /// Extra parameters beyond the primary array
    pub params: &'static [&'static str],
    /// Whether the routine rearranges its input in place
    pub in_place: bool,
}

macro_rules! algorithm {
    ($name:literal, $tier:ident, $summary:literal, $time:literal, $space:literal,
     $input:ident, [$($param:literal),*], $in_place:literal) => {
        AlgorithmInfo {
            name: $name,
            tier: Tier::$tier,
            summary: $summary,
            time: $time,
            space: $space,
            input: InputShape::$input,
            params: &[$($param),*],
            in_place: $in_place,
        }
    };
}

static ALGORITHMS: &[AlgorithmInfo] = &[
    // Basic
    algorithm!("sum", Basic, "Sum of all elements", "O(n)", "O(1)", Any, [], false),
    algorithm!("average", Basic, "Arithmetic mean", "O(n)", "O(1)", Any, [], false),
    algorithm!("min-max", Basic, "Smallest and largest element", "O(n)", "O(1)", Any, [], false),
    algorithm!("reverse", Basic, "Two-pointer reversal", "O(n)", "O(1)", Any, [], true),
    // Intermediate
    algorithm!("linear-search", Intermediate, "First index of target", "O(n)", "O(1)", Any, ["target"], false),
    algorithm!("binary-search", Intermediate, "Index of target in sorted input", "O(log n)", "O(1)", Sorted, ["target"], false),
    algorithm!("bubble-sort", Intermediate, "Swap adjacent out-of-order pairs", "O(n^2)", "O(1)", Any, [], true),
    algorithm!("selection-sort", Intermediate, "Select the minimum of the unsorted suffix", "O(n^2)", "O(1)", Any, [], true),
    algorithm!("insertion-sort", Intermediate, "Insert into the sorted prefix", "O(n^2)", "O(1)", Any, [], true),
    algorithm!("shift-right", Intermediate, "Rotate right by one", "O(n)", "O(1)", Any, [], true),
    algorithm!("shift-left", Intermediate, "Rotate left by one", "O(n)", "O(1)", Any, [], true),
    algorithm!("has-duplicates", Intermediate, "Pairwise duplicate check", "O(n^2)", "O(1)", Any, [], false),
    algorithm!("merge-arrays", Intermediate, "Concatenate with a second array", "O(n + m)", "O(n + m)", Any, ["other"], false),
    // Advanced
    algorithm!("rearrange-pos-neg", Advanced, "Negatives before non-negatives", "O(n)", "O(n)", Any, [], true),
    algorithm!("second-largest", Advanced, "Second largest distinct value", "O(n)", "O(1)", Any, [], false),
    algorithm!("second-smallest", Advanced, "Second smallest distinct value", "O(n)", "O(1)", Any, [], false),
    algorithm!("two-sum-pairs", Advanced, "All pairs summing to target", "O(n^2)", "O(p)", Any, ["target"], false),
    algorithm!("max-sum-window", Advanced, "Largest sum of a k-element window", "O(n)", "O(1)", Any, ["k"], false),
    algorithm!("prefix-sum", Advanced, "Cumulative sums", "O(n)", "O(n)", Any, [], false),
    algorithm!("kadane", Advanced, "Largest contiguous subarray sum", "O(n)", "O(1)", Any, [], false),
    algorithm!("rotate-right", Advanced, "Rotate right by k via a buffer", "O(n)", "O(n)", Any, ["k"], true),
    algorithm!("reverse-range", Advanced, "Reverse the inclusive range [start, end]", "O(n)", "O(1)", Any, ["start", "end"], true),
    algorithm!("rotate-left", Advanced, "Rotate left by k with three reversals", "O(n)", "O(1)", Any, ["k"], true),
    // Competitive
    algorithm!("two-pointer-sum", Competitive, "Pair summing to target in sorted input", "O(n)", "O(1)", Sorted, ["target"], false),
    algorithm!("sort-012", Competitive, "Dutch National Flag partition", "O(n)", "O(1)", Flags, [], true),
    algorithm!("subarray-sum", Competitive, "Window summing to target", "O(n)", "O(1)", NonNegative, ["target"], false),
    algorithm!("merge-sorted-in-place", Competitive, "Merge sorted arrays from the tail", "O(m + n)", "O(1)", Sorted, ["m", "other"], true),
    algorithm!("find-missing", Competitive, "Missing value of 0..=n by sum formula", "O(n)", "O(1)", Any, ["n"], false),
    algorithm!("majority-element", Competitive, "Boyer-Moore majority vote", "O(n)", "O(1)", Majority, [], false),
    algorithm!("majority-element-verified", Competitive, "Majority vote with a confirming pass", "O(n)", "O(1)", Any, [], false),
];

/// Every catalogued algorithm, grouped by tier.
pub fn all() -> &'static [AlgorithmInfo] {
    ALGORITHMS
}

/// Look up an algorithm by name. Underscores are accepted for hyphens.
pub fn find(name: &str) -> Option<&'static AlgorithmInfo> {
    let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
    ALGORITHMS.iter().find(|info| info.name == normalized)
}

/// Algorithms belonging to one tier.
pub fn by_tier(tier: Tier) -> impl Iterator<Item = &'static AlgorithmInfo> {
    ALGORITHMS.iter().filter(move |info| info.tier == tier)
}
