use crate::models::BusLayoutCell;

/// Header of the column holding the booking identifier.
pub const BOOKING_ID_COLUMN: &str = "Booking_ID";

/// Header of the column holding the comma-separated seat list.
pub const SEATS_COLUMN: &str = "Seats";

/// Header of the 1-based order column in exported sequences.
pub const BOARDING_ORDER_COLUMN: &str = "Boarding Order";

/// Separator between seat tokens within the `Seats` column.
pub const SEAT_TOKEN_SEPARATOR: char = ',';

/// Priority assigned to seats that cannot be parsed; ranks them after every real seat.
pub const SENTINEL_WORST_PRIORITY: f64 = 999.0;

/// Number of rows of the fixed bus layout.
pub const BUS_MAX_ROWS: u32 = 20;

/// Cells of a single row in the fixed bus layout, left to right.
pub const BUS_ROW_LAYOUT: &[BusLayoutCell] = &[
    BusLayoutCell::RowNumber,
    BusLayoutCell::Seat('A'),
    BusLayoutCell::Seat('B'),
    BusLayoutCell::Aisle,
    BusLayoutCell::Seat('C'),
    BusLayoutCell::Seat('D'),
];

pub const EMPTY_BATCH_MESSAGE: &str = "CSV file is empty or invalid.";

pub const MALFORMED_ROW_MESSAGE: &str = "CSV must have 'Booking_ID' and 'Seats' columns.";

pub const NO_FILE_UPLOADED_MESSAGE: &str = "No file uploaded.";

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "An internal server error occurred.";
