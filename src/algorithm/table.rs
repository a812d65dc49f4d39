//! Running-best table construction and witness reconstruction
//!
//! The table is write-once, filled strictly left to right, and never
//! revisited. Position i holds the best sum achievable over the first
//! i+1 elements, which is all the state backtracking needs to recover
//! an optimal index set.

use crate::algorithm::selection::validate_weights;
use crate::io::error::{Result, computation_error};
use num_traits::PrimInt;

/// Per-prefix memo of best achievable sums with witness support
///
/// Functionally equivalent to [`max_non_adjacent_sum`] but retains the
/// full table so an optimal subset can be reconstructed afterwards.
///
/// [`max_non_adjacent_sum`]: crate::algorithm::selection::max_non_adjacent_sum
#[derive(Clone, Debug)]
pub struct SelectionTable<T> {
    weights: Vec<T>,
    best: Vec<T>,
}

impl<T: PrimInt> SelectionTable<T> {
    /// Build the running-best table for `weights`
    ///
    /// # Errors
    ///
    /// Returns an error under the same input contract as
    /// [`max_non_adjacent_sum`]: negative weights, oversized sequences,
    /// and running-sum overflow are all rejected.
    ///
    /// [`max_non_adjacent_sum`]: crate::algorithm::selection::max_non_adjacent_sum
    pub fn build(weights: &[T]) -> Result<Self> {
        validate_weights(weights)?;

        let mut best = Vec::with_capacity(weights.len());
        let mut skip = T::zero();
        let mut current_best = T::zero();

        for (index, &weight) in weights.iter().enumerate() {
            let with_current = skip.checked_add(&weight).ok_or_else(|| {
                computation_error(
                    "selection_table_build",
                    &format!("running best overflowed at index {index}"),
                )
            })?;
            skip = current_best;
            current_best = current_best.max(with_current);
            best.push(current_best);
        }

        Ok(Self {
            weights: weights.to_vec(),
            best,
        })
    }

    /// Optimal non-adjacent subset sum, zero for an empty sequence
    pub fn maximum(&self) -> T {
        self.best.last().copied().unwrap_or_else(T::zero)
    }

    /// Reconstruct an optimal index set by backtracking through the table
    ///
    /// Indices are returned in ascending order and no two are adjacent.
    /// The weights at the returned indices sum to [`Self::maximum`]. When
    /// skipping an element is exactly as good as taking it, the skip is
    /// preferred, so ties resolve toward earlier indices.
    pub fn witness(&self) -> Vec<usize> {
        let mut chosen = Vec::new();
        let mut remaining = self.best.len();

        while remaining > 0 {
            let index = remaining - 1;
            if index == 0 {
                chosen.push(0);
                break;
            }
            if self.best_at(index) == self.best_at(index - 1) {
                // Equal means the optimum survives without this element
                remaining -= 1;
            } else {
                chosen.push(index);
                remaining = index.saturating_sub(1);
            }
        }

        chosen.reverse();
        chosen
    }

    /// Number of weights in the table
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether the table was built from an empty sequence
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Weight at `index`, zero when out of bounds
    pub fn weight_at(&self, index: usize) -> T {
        self.weights.get(index).copied().unwrap_or_else(T::zero)
    }

    fn best_at(&self, index: usize) -> T {
        self.best.get(index).copied().unwrap_or_else(T::zero)
    }
}
