use crate::types::{RowNumber, SeatColumn, SeatPriority};

/// Geometry and scoring weights used to rank seats.
///
/// The defaults describe the fixed 20-row, four-abreast bus; see
/// [`DEFAULT_BUS_LAYOUT_CONFIG`](crate::DEFAULT_BUS_LAYOUT_CONFIG).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusLayoutConfig {
    /// Number of seat rows, numbered from 1.
    pub max_rows: RowNumber,
    /// Score per row of distance from the middle of the bus. Must exceed the
    /// spread of the column scores so that columns only ever break ties.
    pub row_distance_weight: SeatPriority,
    pub window_columns: &'static [SeatColumn],
    pub aisle_columns: &'static [SeatColumn],
    pub window_column_score: SeatPriority,
    pub aisle_column_score: SeatPriority,
    pub other_column_score: SeatPriority,
    /// Score given to seats that cannot be parsed.
    pub sentinel_priority: SeatPriority,
}

impl BusLayoutConfig {
    /// Physical midpoint of the 1-based rows (10.5 for a 20-row bus).
    pub fn middle_row(&self) -> f64 {
        (self.max_rows as f64 + 1.0) / 2.0
    }

    pub fn column_score(&self, column: SeatColumn) -> SeatPriority {
        if self.window_columns.contains(&column) {
            self.window_column_score
        } else if self.aisle_columns.contains(&column) {
            self.aisle_column_score
        } else {
            self.other_column_score
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::DEFAULT_BUS_LAYOUT_CONFIG;

    #[test]
    fn test_default_middle_row() {
        assert_eq!(DEFAULT_BUS_LAYOUT_CONFIG.middle_row(), 10.5);
    }

    #[test]
    fn test_column_classes() {
        let config = DEFAULT_BUS_LAYOUT_CONFIG;

        assert_eq!(config.column_score('A'), 1.0);
        assert_eq!(config.column_score('D'), 1.0);
        assert_eq!(config.column_score('B'), 2.0);
        assert_eq!(config.column_score('C'), 2.0);
        assert_eq!(config.column_score('E'), 3.0);
        assert_eq!(config.column_score('Z'), 3.0);
    }

    #[test]
    fn test_column_scores_never_override_row_distance() {
        let config = DEFAULT_BUS_LAYOUT_CONFIG;
        let spread = config.other_column_score - config.window_column_score;

        // Adjacent rows on the same side of the middle differ by exactly one weight.
        assert!(spread < config.row_distance_weight);
    }
}
