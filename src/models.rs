pub mod boarding_sequence;
pub use boarding_sequence::{BoardingSequence, BoardingStep};

pub mod booking;
pub use booking::Booking;

pub mod booking_aggregator;
pub use booking_aggregator::BookingAggregator;

pub mod booking_row;
pub use booking_row::BookingRow;

pub mod bus_layout;
pub use bus_layout::{BusLayout, BusLayoutCell};

pub mod bus_layout_config;
pub use bus_layout_config::BusLayoutConfig;

pub mod error;
pub use error::Error;

pub mod parsed_seat;
pub use parsed_seat::ParsedSeat;

pub mod seat_claim_validator;
pub use seat_claim_validator::SeatClaimValidator;

pub mod seat_priority_scorer;
pub use seat_priority_scorer::SeatPriorityScorer;

pub mod sequence_builder;
pub use sequence_builder::SequenceBuilder;

pub mod sequence_summary;
pub use sequence_summary::SequenceSummary;
