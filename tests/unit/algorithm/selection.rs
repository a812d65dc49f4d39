//! Tests for the rolling-window selection recurrence

#[cfg(test)]
mod tests {
    use crate::algorithm::selection::{max_non_adjacent_sum, validate_weights};
    use crate::io::configuration::MAX_SEQUENCE_LENGTH;
    use crate::io::error::AlgorithmError;

    #[test]
    fn test_recurrence_scenarios() {
        assert!(matches!(max_non_adjacent_sum(&[1i64, 2, 3, 1]), Ok(4)));
        assert!(matches!(max_non_adjacent_sum(&[2i64, 7, 9, 3, 1]), Ok(12)));
        assert!(matches!(max_non_adjacent_sum(&[2i64, 1, 1, 2]), Ok(4)));
    }

    #[test]
    fn test_empty_and_singleton() {
        assert!(matches!(max_non_adjacent_sum::<i64>(&[]), Ok(0)));
        assert!(matches!(max_non_adjacent_sum(&[5i64]), Ok(5)));
    }

    #[test]
    fn test_two_elements_takes_larger() {
        assert!(matches!(max_non_adjacent_sum(&[3i64, 8]), Ok(8)));
        assert!(matches!(max_non_adjacent_sum(&[8i64, 3]), Ok(8)));
    }

    #[test]
    fn test_validation_rejects_negative() {
        assert!(matches!(
            validate_weights(&[0i64, -3]),
            Err(AlgorithmError::NegativeWeight { index: 1, value: -3 })
        ));
        assert!(validate_weights(&[0i64, 3]).is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized() {
        let weights = vec![1i64; MAX_SEQUENCE_LENGTH + 1];
        assert!(matches!(
            validate_weights(&weights),
            Err(AlgorithmError::SequenceTooLong { .. })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            max_non_adjacent_sum(&[u64::MAX, 1, u64::MAX]),
            Err(AlgorithmError::Computation { .. })
        ));
    }
}
