use crate::models::{BusLayoutConfig, ParsedSeat};
use crate::types::{SeatPriority, SeatTokenRef};

/// Scores seats "outside-in": the farther a row is from the middle of the bus,
/// the lower (earlier) its score. Window/aisle class only breaks ties.
pub struct SeatPriorityScorer<'a> {
    config: &'a BusLayoutConfig,
}

impl<'a> SeatPriorityScorer<'a> {
    pub fn new(config: &'a BusLayoutConfig) -> Self {
        Self { config }
    }

    pub fn score_seat(&self, seat: &ParsedSeat) -> SeatPriority {
        let distance_from_middle = (seat.row_value() - self.config.middle_row()).abs();
        let row_score = -distance_from_middle * self.config.row_distance_weight;

        row_score + self.config.column_score(seat.column)
    }

    /// Scores a raw token, falling back to the sentinel priority when it does not
    /// parse.
    pub fn score_token(&self, token: &SeatTokenRef) -> SeatPriority {
        match ParsedSeat::parse(token) {
            Some(seat) => self.score_seat(&seat),
            None => self.config.sentinel_priority,
        }
    }

    /// Lowest score among the given tokens, or `None` if there are none.
    pub fn best_priority<'t, I>(&self, tokens: I) -> Option<SeatPriority>
    where
        I: IntoIterator<Item = &'t SeatTokenRef>,
    {
        tokens
            .into_iter()
            .map(|token| self.score_token(token))
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BUS_LAYOUT_CONFIG;

    fn score(token: &str) -> SeatPriority {
        SeatPriorityScorer::new(&DEFAULT_BUS_LAYOUT_CONFIG).score_token(token)
    }

    #[test]
    fn test_known_scores() {
        assert_eq!(score("A1"), -94.0);
        assert_eq!(score("B1"), -93.0);
        assert_eq!(score("A20"), -94.0);
        assert_eq!(score("C20"), -93.0);
        assert_eq!(score("C2"), -83.0);
        assert_eq!(score("C18"), -73.0);
        assert_eq!(score("E10"), -2.0);
    }

    #[test]
    fn test_front_and_back_rows_are_symmetric() {
        for row in 1..=10 {
            let mirrored = 21 - row;
            assert_eq!(
                score(&format!("{}D", row)),
                score(&format!("{}D", mirrored)),
                "row {} should score like row {}",
                row,
                mirrored
            );
        }
    }

    #[test]
    fn test_score_is_order_independent() {
        assert_eq!(score("7A"), score("A7"));
        assert_eq!(score("12b"), score("B12"));
    }

    #[test]
    fn test_monotonic_in_distance_from_middle() {
        for column in ['A', 'B', 'E'] {
            // Walk from the middle towards the front; distance strictly grows.
            let scores: Vec<SeatPriority> = (1..=10)
                .rev()
                .map(|row| score(&format!("{}{}", row, column)))
                .collect();

            for pair in scores.windows(2) {
                assert!(pair[1] < pair[0], "{:?} is not decreasing", scores);
            }
        }
    }

    #[test]
    fn test_window_beats_aisle_beats_other_within_a_row() {
        assert!(score("5A") < score("5B"));
        assert!(score("5B") < score("5F"));
        assert_eq!(score("5A"), score("5D"));
        assert_eq!(score("5B"), score("5C"));
    }

    #[test]
    fn test_rows_beyond_layout_are_extrapolated() {
        assert_eq!(score("30A"), -194.0);
        assert!(score("30A") < score("1A"));
    }

    #[test]
    fn test_huge_rows_score_instead_of_falling_back() {
        let huge = score("99999999999999999999A");

        assert!(huge.is_finite());
        assert!(huge < score("1A"));
        assert_ne!(huge, 999.0);
    }

    #[test]
    fn test_unparseable_tokens_get_sentinel() {
        assert_eq!(score("AA"), 999.0);
        assert_eq!(score("42"), 999.0);
    }

    #[test]
    fn test_best_priority_prefers_parseable_seat() {
        let scorer = SeatPriorityScorer::new(&DEFAULT_BUS_LAYOUT_CONFIG);

        assert_eq!(scorer.best_priority(["AA", "C18"]), Some(-73.0));
        assert_eq!(scorer.best_priority(["AA"]), Some(999.0));
        assert_eq!(scorer.best_priority(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_custom_layout_moves_the_middle() {
        let config = BusLayoutConfig {
            max_rows: 10,
            ..DEFAULT_BUS_LAYOUT_CONFIG
        };
        let scorer = SeatPriorityScorer::new(&config);

        assert_eq!(scorer.score_token("1A"), -44.0);
        assert_eq!(scorer.score_token("10A"), -44.0);
    }
}
