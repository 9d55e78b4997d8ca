use crate::models::{Booking, BookingRow, SeatPriorityScorer};
use crate::types::BookingId;
use crate::utils::split_seat_tokens;
use std::collections::HashSet;

/// Collapses validated rows into one [`Booking`] per booking identifier.
///
/// The first row seen for an identifier defines the booking; later rows with the
/// same identifier are dropped, not merged. Output keeps first-insertion order.
pub struct BookingAggregator<'a> {
    scorer: SeatPriorityScorer<'a>,
    seen_booking_ids: HashSet<BookingId>,
    bookings: Vec<Booking>,
}

impl<'a> BookingAggregator<'a> {
    pub fn new(scorer: SeatPriorityScorer<'a>) -> Self {
        Self {
            scorer,
            seen_booking_ids: HashSet::new(),
            bookings: Vec::new(),
        }
    }

    pub fn aggregate(mut self, rows: &[BookingRow]) -> Vec<Booking> {
        for row in rows {
            self.push_row(row);
        }

        self.bookings
    }

    fn push_row(&mut self, row: &BookingRow) {
        let seat_tokens = split_seat_tokens(&row.seats_raw);

        // Rows with no seats never create a booking
        let Some(best_priority) = self.scorer.best_priority(seat_tokens) else {
            return;
        };

        if self.seen_booking_ids.insert(row.booking_id.clone()) {
            self.bookings.push(Booking {
                booking_id: row.booking_id.clone(),
                seats_display: row.seats_raw.clone(),
                priority: best_priority,
            });
        }
    }
}
