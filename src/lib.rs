//! Maximum non-adjacent subset sum selection via dynamic programming
//!
//! Given an ordered sequence of non-negative integer weights, the crate
//! computes the largest sum achievable by a subset in which no two chosen
//! elements occupy adjacent positions, and can reconstruct an optimal
//! index set from the running-best table. A secondary module enumerates
//! binary counting strings breadth-first as a lazy iterator.

#![forbid(unsafe_code)]

/// Core selection algorithm: rolling recurrence and running-best table
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Lazy sequence generators
pub mod sequence;

pub use algorithm::selection::max_non_adjacent_sum;
pub use io::error::{AlgorithmError, Result};
