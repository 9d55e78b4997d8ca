use crate::types::{NormalizedSeatKey, RowNumber, SeatColumn, SeatTokenRef};
use std::fmt;

/// A seat identifier reduced to its row and column.
///
/// The row is kept as its decimal digits (leading zeros trimmed) so that row
/// numbers of any length parse and compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedSeat {
    row_digits: String,
    pub column: SeatColumn,
}

impl ParsedSeat {
    pub fn new(row: RowNumber, column: SeatColumn) -> Self {
        Self {
            row_digits: row.to_string(),
            column: column.to_ascii_uppercase(),
        }
    }

    /// Extracts a seat from a free-form token.
    ///
    /// The row is the first run of ASCII digits and the column is the first ASCII
    /// letter (uppercased). Both are located independently, so `"7A"`, `"A7"` and
    /// `"seat 7a"` all parse to row 7, column `A`.
    ///
    /// Returns `None` when the token has no digits or no letter.
    pub fn parse(token: &SeatTokenRef) -> Option<Self> {
        let column = token.chars().find(|c| c.is_ascii_alphabetic())?;
        let digits = Self::first_digit_run(token)?;

        let trimmed = digits.trim_start_matches('0');
        let row_digits = if trimmed.is_empty() { "0" } else { trimmed };

        Some(Self {
            row_digits: row_digits.to_string(),
            column: column.to_ascii_uppercase(),
        })
    }

    /// First maximal run of ASCII digits in `token`.
    pub(crate) fn first_digit_run(token: &SeatTokenRef) -> Option<&str> {
        let start = token.find(|c: char| c.is_ascii_digit())?;
        let rest = &token[start..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        Some(&rest[..end])
    }

    /// Row as a real number, for scoring. Never fails, however long the row.
    pub fn row_value(&self) -> f64 {
        self.row_digits.parse::<f64>().unwrap_or(f64::INFINITY)
    }

    /// Canonical identity of the seat, independent of how the token was written.
    pub fn normalized_key(&self) -> NormalizedSeatKey {
        self.to_string()
    }
}

impl fmt::Display for ParsedSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row_digits, self.column)
    }
}
