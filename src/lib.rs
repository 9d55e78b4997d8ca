#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_BUS_LAYOUT_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    BoardingSequence, BoardingStep, Booking, BookingAggregator, BookingRow, BusLayout,
    BusLayoutConfig, Error, ParsedSeat, SeatClaimValidator, SeatPriorityScorer, SequenceBuilder,
    SequenceSummary,
};
#[cfg(feature = "server")]
pub mod server;
pub mod types;
mod utils;
pub use types::{BookingId, NormalizedSeatKey, RowNumber, SeatColumn, SeatPriority, SeatToken};
pub use utils::{
    read_booking_rows_from_reader, read_booking_rows_from_string, read_manifest,
    read_manifest_from_path, split_seat_tokens, write_boarding_sequence_csv,
};

/// Orders booking rows into an outside-in boarding sequence using the standard
/// 20-row bus layout.
///
/// The whole batch is validated first; any fatal problem (no rows, a row missing a
/// field, a seat claimed twice) returns an error and no sequence.
pub fn generate_boarding_sequence(rows: &[BookingRow]) -> Result<BoardingSequence, Error> {
    generate_boarding_sequence_with_custom_config(&DEFAULT_BUS_LAYOUT_CONFIG, rows)
}

pub fn generate_boarding_sequence_with_custom_config(
    bus_layout_config: &BusLayoutConfig,
    rows: &[BookingRow],
) -> Result<BoardingSequence, Error> {
    SeatClaimValidator::new().validate(rows)?;

    let scorer = SeatPriorityScorer::new(bus_layout_config);
    let bookings = BookingAggregator::new(scorer).aggregate(rows);

    Ok(SequenceBuilder::build(bookings))
}

/// Decodes a CSV manifest and orders it; see [`generate_boarding_sequence`].
pub fn generate_boarding_sequence_from_csv(csv: &str) -> Result<BoardingSequence, Error> {
    let rows = read_booking_rows_from_string(csv)?;

    generate_boarding_sequence(&rows)
}
