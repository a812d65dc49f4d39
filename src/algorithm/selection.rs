//! Single-pass recurrence for the maximum non-adjacent subset sum
//!
//! The optimum over a prefix depends only on the optima of the two
//! preceding prefixes, so a left-to-right pass carrying two running
//! values suffices (optimal substructure).

use crate::io::configuration::MAX_SEQUENCE_LENGTH;
use crate::io::error::{AlgorithmError, Result, computation_error};
use num_traits::PrimInt;

/// Maximum sum of a subset of `weights` with no two elements adjacent
///
/// An empty sequence yields zero; a single element yields that element.
/// Otherwise each position either extends the best sum from two positions
/// back or inherits the best sum that skips the current element, whichever
/// is larger.
///
/// # Errors
///
/// Returns an error if:
/// - Any weight is negative (`NegativeWeight`)
/// - The sequence exceeds [`MAX_SEQUENCE_LENGTH`] (`SequenceTooLong`)
/// - A running sum overflows the weight type (`Computation`)
pub fn max_non_adjacent_sum<T: PrimInt>(weights: &[T]) -> Result<T> {
    validate_weights(weights)?;

    // skip: optimum up to i-2, best: optimum up to i-1
    let mut skip = T::zero();
    let mut best = T::zero();

    for (index, &weight) in weights.iter().enumerate() {
        let with_current = skip.checked_add(&weight).ok_or_else(|| {
            computation_error(
                "max_non_adjacent_sum",
                &format!("running best overflowed at index {index}"),
            )
        })?;
        skip = best;
        best = best.max(with_current);
    }

    Ok(best)
}

/// Reject sequences that violate the input contract
///
/// # Errors
///
/// Returns `NegativeWeight` for the first negative element encountered,
/// or `SequenceTooLong` when the sequence exceeds [`MAX_SEQUENCE_LENGTH`].
pub fn validate_weights<T: PrimInt>(weights: &[T]) -> Result<()> {
    if weights.len() > MAX_SEQUENCE_LENGTH {
        return Err(AlgorithmError::SequenceTooLong {
            length: weights.len(),
            max_length: MAX_SEQUENCE_LENGTH,
        });
    }

    for (index, &weight) in weights.iter().enumerate() {
        if weight < T::zero() {
            return Err(AlgorithmError::NegativeWeight {
                index,
                value: weight.to_i64().unwrap_or(i64::MIN),
            });
        }
    }

    Ok(())
}
