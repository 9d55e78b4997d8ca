// Types listed here are either shared across multiple files and/or exposed via the library.

/// Identifier of a booking as it appears in the `Booking_ID` column.
pub type BookingId = String;

/// A single raw seat identifier as written in the manifest (e.g. `"7A"` or `"A7"`).
pub type SeatToken = String;

/// Borrowed view of a seat token.
pub type SeatTokenRef = str;

/// Row component of a parsed seat. Rows are 1-based in the fixed bus layout, but
/// parsing does not bound-check them.
pub type RowNumber = u32;

/// Column component of a parsed seat, always an uppercase ASCII letter.
pub type SeatColumn = char;

/// Canonical `"<row>-<COLUMN>"` identity of a seat, used for collision detection.
pub type NormalizedSeatKey = String;

/// Boarding priority score. Lower scores board earlier.
pub type SeatPriority = f64;

/// 1-based position of a booking within the boarding sequence.
pub type BoardingPosition = usize;
