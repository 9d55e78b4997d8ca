pub mod read_booking_rows;
pub use read_booking_rows::{read_booking_rows_from_reader, read_booking_rows_from_string};

pub mod read_manifest;
pub use read_manifest::{read_manifest, read_manifest_from_path};

pub mod split_seat_tokens;
pub use split_seat_tokens::split_seat_tokens;

pub mod write_boarding_sequence_csv;
pub use write_boarding_sequence_csv::write_boarding_sequence_csv;
