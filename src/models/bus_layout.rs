use crate::constants::{BUS_MAX_ROWS, BUS_ROW_LAYOUT};
use crate::models::ParsedSeat;
use crate::types::{NormalizedSeatKey, RowNumber, SeatColumn};
use std::collections::HashSet;

/// A single cell in a row of the bus layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusLayoutCell {
    RowNumber,
    Seat(SeatColumn),
    Aisle,
}

/// Text seat map of the bus, drawn front (row 1) to back.
pub struct BusLayout {
    rows: RowNumber,
    row_layout: &'static [BusLayoutCell],
}

impl BusLayout {
    /// The fixed 20-row layout with two seats either side of the aisle.
    pub fn standard() -> Self {
        Self {
            rows: BUS_MAX_ROWS,
            row_layout: BUS_ROW_LAYOUT,
        }
    }

    /// Draws the map, bracketing every seat whose key is in `boarding`.
    ///
    /// Keys that fall outside the map are ignored.
    pub fn render(&self, boarding: &HashSet<NormalizedSeatKey>) -> String {
        let mut lines = Vec::with_capacity(self.rows as usize + 1);
        lines.push(self.render_driver_cab());

        for row in 1..=self.rows {
            lines.push(self.render_row(row, boarding));
        }

        lines.join("\n")
    }

    fn render_driver_cab(&self) -> String {
        let width = self.row_layout.len() * 3;
        format!("{:^width$}", "[ DRIVER ]", width = width)
            .trim_end()
            .to_string()
    }

    fn render_row(&self, row: RowNumber, boarding: &HashSet<NormalizedSeatKey>) -> String {
        let line: String = self
            .row_layout
            .iter()
            .map(|cell| match cell {
                BusLayoutCell::RowNumber => format!("{:>2} ", row),
                BusLayoutCell::Aisle => "   ".to_string(),
                BusLayoutCell::Seat(column) => {
                    let key = ParsedSeat::new(row, *column).normalized_key();

                    if boarding.contains(&key) {
                        format!("[{}]", column)
                    } else {
                        format!(" {} ", column)
                    }
                }
            })
            .collect();

        line.trim_end().to_string()
    }
}
