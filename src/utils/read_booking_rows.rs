use crate::constants::{BOOKING_ID_COLUMN, SEATS_COLUMN};
use crate::models::{BookingRow, Error, ParsedSeat};
use crate::utils::split_seat_tokens;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use std::io::{Cursor, Read};

/// Decodes a header-led CSV manifest held in memory.
pub fn read_booking_rows_from_string(csv: &str) -> Result<Vec<BookingRow>, Error> {
    let csv = csv.strip_prefix('\u{feff}').unwrap_or(csv);

    read_booking_rows_from_reader(Cursor::new(csv))
}

/// Decodes a header-led CSV manifest into booking rows, in file order.
///
/// Columns are located by header name, so their position and any extra columns
/// do not matter. A missing column, or a record too short to reach it, yields an
/// empty field; rejecting such rows is left to validation.
pub fn read_booking_rows_from_reader<R: Read>(reader: R) -> Result<Vec<BookingRow>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let booking_id_position = header_position(&headers, BOOKING_ID_COLUMN);
    let seats_position = header_position(&headers, SEATS_COLUMN);

    let mut rows = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let row = BookingRow::new(
            field(&record, booking_id_position),
            field(&record, seats_position),
        );

        for seat_token in split_seat_tokens(&row.seats_raw) {
            if ParsedSeat::parse(seat_token).is_none() {
                warn!("Invalid seat format, skipping: {}", seat_token);
            }
        }

        rows.push(row);
    }

    debug!("Read {} booking rows", rows.len());

    Ok(rows)
}

fn header_position(headers: &StringRecord, name: &str) -> Option<usize> {
    let position = headers.iter().position(|header| header.trim() == name);

    if position.is_none() {
        warn!("Manifest has no '{}' column", name);
    }

    position
}

fn field(record: &StringRecord, position: Option<usize>) -> String {
    position
        .and_then(|position| record.get(position))
        .unwrap_or_default()
        .to_string()
}
