use crate::constants::SEAT_TOKEN_SEPARATOR;
use crate::types::SeatTokenRef;

/// Splits a `Seats` field into trimmed, non-empty seat tokens.
///
/// ```rust
/// use boarding_sequencer::split_seat_tokens;
///
/// assert_eq!(split_seat_tokens(" 7A, A8,,  "), vec!["7A", "A8"]);
/// ```
pub fn split_seat_tokens(seats_raw: &str) -> Vec<&SeatTokenRef> {
    seats_raw
        .split(SEAT_TOKEN_SEPARATOR)
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect()
}
