use crate::models::{Booking, SequenceSummary};
use crate::types::{BoardingPosition, BookingId, NormalizedSeatKey};
use serde::Serialize;

/// Bookings in the order they should board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BoardingSequence {
    bookings: Vec<Booking>,
}

/// One group boarding at a time: what the seat map highlights at each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingStep {
    pub position: BoardingPosition,
    pub booking_id: BookingId,
    /// Seats of the booking that parse; unparseable tokens have no place on the map.
    pub seat_keys: Vec<NormalizedSeatKey>,
}

impl BoardingSequence {
    pub(crate) fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Booking> {
        self.bookings.iter()
    }

    /// Booking identifiers in boarding order.
    pub fn booking_ids(&self) -> Vec<&str> {
        self.bookings
            .iter()
            .map(|booking| booking.booking_id.as_str())
            .collect()
    }

    pub fn steps(&self) -> Vec<BoardingStep> {
        self.bookings
            .iter()
            .enumerate()
            .map(|(index, booking)| BoardingStep {
                position: index + 1,
                booking_id: booking.booking_id.clone(),
                seat_keys: booking
                    .parsed_seats()
                    .iter()
                    .map(|seat| seat.normalized_key())
                    .collect(),
            })
            .collect()
    }

    pub fn summary(&self) -> SequenceSummary {
        SequenceSummary::from_sequence(self)
    }
}

impl<'a> IntoIterator for &'a BoardingSequence {
    type Item = &'a Booking;
    type IntoIter = std::slice::Iter<'a, Booking>;

    fn into_iter(self) -> Self::IntoIter {
        self.bookings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> BoardingSequence {
        BoardingSequence::new(vec![
            Booking {
                booking_id: "B1".to_string(),
                seats_display: "A1, b1, ??".to_string(),
                priority: -94.0,
            },
            Booking {
                booking_id: "B2".to_string(),
                seats_display: "C20".to_string(),
                priority: -93.0,
            },
        ])
    }

    #[test]
    fn test_steps_are_one_based_and_skip_unparseable_seats() {
        let steps = sequence().steps();

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].position, 1);
        assert_eq!(steps[0].booking_id, "B1");
        assert_eq!(steps[0].seat_keys, vec!["1-A", "1-B"]);
        assert_eq!(steps[1].position, 2);
        assert_eq!(steps[1].seat_keys, vec!["20-C"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&sequence()).unwrap();

        assert_eq!(
            json,
            r#"[{"booking_id":"B1","seats":"A1, b1, ??"},{"booking_id":"B2","seats":"C20"}]"#
        );
    }
}
