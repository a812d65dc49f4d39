//! Selection over weight sequences under the no-two-adjacent constraint

/// Rolling-window recurrence computing the optimal sum
pub mod selection;
/// Running-best table with witness reconstruction
pub mod table;

pub use table::SelectionTable;
