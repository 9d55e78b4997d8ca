use crate::types::BookingId;

/// One record of the manifest. Missing columns are represented by empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub seats_raw: String,
}

impl BookingRow {
    pub fn new(booking_id: impl Into<BookingId>, seats_raw: impl Into<String>) -> Self {
        Self {
            booking_id: booking_id.into(),
            seats_raw: seats_raw.into(),
        }
    }

    /// Both required fields carry a value.
    pub fn is_complete(&self) -> bool {
        !self.booking_id.is_empty() && !self.seats_raw.is_empty()
    }
}
