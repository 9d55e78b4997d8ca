use crate::models::ParsedSeat;
use crate::types::{BookingId, RowNumber, SeatPriority};
use crate::utils::split_seat_tokens;
use serde::Serialize;

/// A booking as it takes part in the boarding sequence.
///
/// Serializes to `{"booking_id": ..., "seats": ...}`; the priority is internal to
/// sequencing and is not part of the output record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub booking_id: BookingId,
    /// The `Seats` field exactly as it appeared on the booking's first row.
    #[serde(rename = "seats")]
    pub seats_display: String,
    #[serde(skip)]
    pub priority: SeatPriority,
}

impl Booking {
    /// Number of comma-separated fragments in the seats field, empty ones included.
    pub fn seat_count(&self) -> usize {
        self.seats_display.split(',').count()
    }

    /// Row of the first listed seat, used to label the booking in displays.
    ///
    /// Only the first digit run of the first fragment counts; no column letter is
    /// needed. Rows too large for [`RowNumber`] saturate.
    pub fn lead_row(&self) -> Option<RowNumber> {
        let first = self.seats_display.split(',').next()?;
        let digits = ParsedSeat::first_digit_run(first)?;

        Some(digits.parse::<RowNumber>().unwrap_or(RowNumber::MAX))
    }

    /// Parsed seats of the booking, skipping tokens that do not parse.
    pub fn parsed_seats(&self) -> Vec<ParsedSeat> {
        split_seat_tokens(&self.seats_display)
            .into_iter()
            .filter_map(ParsedSeat::parse)
            .collect()
    }
}
