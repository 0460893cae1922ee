//! arraykit - Classic Array Algorithms
//!
//! Textbook array routines grouped by difficulty tier, plus the plumbing the
//! `arraykit` CLI needs to list, run and demonstrate them.
//!
//! # Tiers
//!
//! - **Basic** ([`basic`]): sum, average, min/max, reversal
//! - **Intermediate** ([`intermediate`]): linear and binary search, bubble,
//!   selection and insertion sort, single-step shifts, duplicate checks
//! - **Advanced** ([`advanced`]): second extremes, sliding window, prefix
//!   sums, Kadane, rotation by buffer and by triple reversal
//! - **Competitive** ([`competitive`]): two-pointer sum, Dutch National Flag,
//!   variable window, tail merge, missing number, Boyer-Moore majority vote
//!
//! # Preconditions
//!
//! Cheap preconditions (non-empty input, window size, value range, buffer
//! capacity, overflow) are validated and reported as [`ArrayError`].
//! Sortedness and majority existence are documented caller obligations.
//!
//! # Example
//!
//! ```rust
//! use arraykit::{advanced, competitive};
//!
//! assert_eq!(advanced::kadane_max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
//!
//! let mut flags = [2, 0, 2, 1, 1, 0];
//! competitive::sort_012(&mut flags).unwrap();
//! assert_eq!(flags, [0, 0, 1, 1, 2, 2]);
//! ```

#![warn(clippy::all)]

pub mod advanced;
pub mod basic;
pub mod catalog;
pub mod competitive;
pub mod config;
pub mod demo;
pub mod error;
pub mod generate;
pub mod intermediate;
pub mod logging;
pub mod runner;

// Re-export commonly used types
pub use basic::MinMax;
pub use catalog::{AlgorithmInfo, InputShape, Tier};
pub use config::{ArrayKitConfig, ConfigError, ConfigResult, OutputFormat};
pub use demo::{DemoError, DemoResult};
pub use error::{ArrayError, ArrayResult};
pub use generate::InputGenerator;
pub use runner::{Input, Outcome, Report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
