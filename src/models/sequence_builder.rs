use crate::models::{BoardingSequence, Booking};

/// Orders aggregated bookings into the final boarding sequence.
pub struct SequenceBuilder;

impl SequenceBuilder {
    /// Sorts by ascending priority.
    ///
    /// The sort is stable: bookings with equal priority keep the order in which
    /// they were first seen, which is common since many seats share a score.
    pub fn build(mut bookings: Vec<Booking>) -> BoardingSequence {
        bookings.sort_by(|a, b| a.priority.total_cmp(&b.priority));

        BoardingSequence::new(bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(booking_id: &str, priority: f64) -> Booking {
        Booking {
            booking_id: booking_id.to_string(),
            seats_display: String::new(),
            priority,
        }
    }

    fn ids(sequence: &BoardingSequence) -> Vec<&str> {
        sequence
            .bookings()
            .iter()
            .map(|booking| booking.booking_id.as_str())
            .collect()
    }

    #[test]
    fn test_sorts_ascending() {
        let sequence = SequenceBuilder::build(vec![
            booking("late", 999.0),
            booking("middle", -3.0),
            booking("front", -94.0),
        ]);

        assert_eq!(ids(&sequence), vec!["front", "middle", "late"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let sequence = SequenceBuilder::build(vec![
            booking("B3", -93.0),
            booking("B1", -94.0),
            booking("B4", -93.0),
            booking("B2", -94.0),
            booking("B5", -93.0),
        ]);

        assert_eq!(ids(&sequence), vec!["B1", "B2", "B3", "B4", "B5"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = SequenceBuilder::build(vec![
            booking("B1", -73.0),
            booking("B2", -94.0),
            booking("B3", -73.0),
        ]);
        let second = SequenceBuilder::build(first.bookings().to_vec());

        assert_eq!(first, second);
    }
}
