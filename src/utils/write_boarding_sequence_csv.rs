use crate::constants::{BOARDING_ORDER_COLUMN, BOOKING_ID_COLUMN, SEATS_COLUMN};
use crate::models::{BoardingSequence, Error};
use csv::WriterBuilder;
use std::io::Write;

/// Writes the sequence as CSV with a 1-based `Boarding Order` column.
///
/// Seat lists are written verbatim and quoted whenever they contain a comma.
pub fn write_boarding_sequence_csv<W: Write>(
    sequence: &BoardingSequence,
    writer: W,
) -> Result<(), Error> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record([BOARDING_ORDER_COLUMN, BOOKING_ID_COLUMN, SEATS_COLUMN])?;

    for (index, booking) in sequence.iter().enumerate() {
        let position = (index + 1).to_string();
        writer.write_record([
            position.as_str(),
            booking.booking_id.as_str(),
            booking.seats_display.as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
