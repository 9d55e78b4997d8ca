use crate::models::BoardingSequence;
use crate::types::RowNumber;
use std::fmt;

/// Headline figures shown alongside a boarding sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSummary {
    pub total_bookings: usize,
    /// Highest lead-seat row over all bookings; 0 when no lead seat parses.
    pub farthest_row: RowNumber,
}

impl SequenceSummary {
    pub fn from_sequence(sequence: &BoardingSequence) -> Self {
        let farthest_row = sequence
            .iter()
            .filter_map(|booking| booking.lead_row())
            .max()
            .unwrap_or(0);

        Self {
            total_bookings: sequence.len(),
            farthest_row,
        }
    }
}

impl fmt::Display for SequenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Bookings, farthest row {}",
            self.total_bookings, self.farthest_row
        )
    }
}
