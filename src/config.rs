use crate::constants::{BUS_MAX_ROWS, SENTINEL_WORST_PRIORITY};
use crate::models::BusLayoutConfig;

pub const DEFAULT_BUS_LAYOUT_CONFIG: BusLayoutConfig = BusLayoutConfig {
    max_rows: BUS_MAX_ROWS,
    row_distance_weight: 10.0,
    window_columns: &['A', 'D'],
    aisle_columns: &['B', 'C'],
    window_column_score: 1.0,
    aisle_column_score: 2.0,
    other_column_score: 3.0,
    sentinel_priority: SENTINEL_WORST_PRIORITY,
};
