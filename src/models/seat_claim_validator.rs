use crate::models::{BookingRow, Error, ParsedSeat};
use crate::types::NormalizedSeatKey;
use crate::utils::split_seat_tokens;
use std::collections::HashSet;

/// Checks a batch of rows for missing fields and seats claimed more than once.
///
/// Claims are tracked across the whole batch, not per booking: the first row to
/// name a seat owns it, and any later row naming the same normalized seat fails
/// the batch. Tokens that do not parse are not claim-checked.
pub struct SeatClaimValidator {
    claimed_seats: HashSet<NormalizedSeatKey>,
}

impl SeatClaimValidator {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            claimed_seats: HashSet::new(),
        }
    }

    /// Validates `rows` in order, failing on the first problem encountered.
    pub fn validate(mut self, rows: &[BookingRow]) -> Result<(), Error> {
        if rows.is_empty() {
            return Err(Error::EmptyBatch);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if !row.is_complete() {
                return Err(Error::MalformedRow { row_index });
            }

            for seat_token in split_seat_tokens(&row.seats_raw) {
                let Some(seat) = ParsedSeat::parse(seat_token) else {
                    continue;
                };

                if !self.claimed_seats.insert(seat.normalized_key()) {
                    return Err(Error::DuplicateSeat {
                        seat_token: seat_token.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
