//! Tests for running-best table construction and witness backtracking

#[cfg(test)]
mod tests {
    use crate::algorithm::table::SelectionTable;

    #[test]
    fn test_maximum_matches_expected() {
        let Ok(table) = SelectionTable::build(&[2i64, 7, 9, 3, 1]) else {
            unreachable!("non-negative input is valid");
        };
        assert_eq!(table.maximum(), 12);
    }

    #[test]
    fn test_witness_alternating_pattern() {
        let Ok(table) = SelectionTable::build(&[2i64, 7, 9, 3, 1]) else {
            unreachable!("non-negative input is valid");
        };
        assert_eq!(table.witness(), vec![0, 2, 4]);
    }

    #[test]
    fn test_witness_tie_prefers_earlier_index() {
        // Both endpoints of [5, 5] are optimal on their own
        let Ok(table) = SelectionTable::build(&[5i64, 5]) else {
            unreachable!("non-negative input is valid");
        };
        assert_eq!(table.witness(), vec![0]);
    }

    #[test]
    fn test_witness_all_zero_weights() {
        let Ok(table) = SelectionTable::build(&[0i64, 0, 0]) else {
            unreachable!("non-negative input is valid");
        };
        assert_eq!(table.maximum(), 0);
        let witness = table.witness();
        let sum: i64 = witness.iter().map(|&index| table.weight_at(index)).sum();
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_weight_at_out_of_bounds_is_zero() {
        let Ok(table) = SelectionTable::build(&[4i64]) else {
            unreachable!("non-negative input is valid");
        };
        assert_eq!(table.weight_at(0), 4);
        assert_eq!(table.weight_at(9), 0);
    }
}
