use crate::constants::{EMPTY_BATCH_MESSAGE, MALFORMED_ROW_MESSAGE};
use crate::types::SeatToken;
use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The manifest contained no booking rows.
    EmptyBatch,
    /// A row is missing its `Booking_ID` or `Seats` value. `row_index` is 0-based.
    MalformedRow { row_index: usize },
    /// A normalized seat was claimed more than once. Carries the raw token of the
    /// first repeated claim.
    DuplicateSeat { seat_token: SeatToken },
    ParserError(String),
    IoError(std::io::Error),
    Other(String),
}

impl Error {
    /// Whether the error was caused by the submitted manifest rather than by the
    /// system processing it.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyBatch
                | Error::MalformedRow { .. }
                | Error::DuplicateSeat { .. }
                | Error::ParserError(_)
        )
    }

    /// Process exit status for command-line callers: 2 for a rejected manifest,
    /// 1 for anything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_client_error() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyBatch => write!(f, "{}", EMPTY_BATCH_MESSAGE),
            Error::MalformedRow { .. } => write!(f, "{}", MALFORMED_ROW_MESSAGE),
            Error::DuplicateSeat { seat_token } => write!(
                f,
                "Duplicate seat assignment found: Seat \"{}\" is assigned to multiple bookings.",
                seat_token
            ),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::Other(msg) => write!(f, "Other Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::Other(format!("{:?}", other)),
            }
        } else {
            Error::ParserError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_seat_message_names_token() {
        let err = Error::DuplicateSeat {
            seat_token: "A7".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Duplicate seat assignment found: Seat \"A7\" is assigned to multiple bookings."
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::EmptyBatch.is_client_error());
        assert!(Error::MalformedRow { row_index: 3 }.is_client_error());
        assert!(Error::ParserError("bad quote".to_string()).is_client_error());
        assert!(!Error::Other("boom".to_string()).is_client_error());

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert!(!Error::IoError(io_err).is_client_error());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::EmptyBatch.exit_code(), 2);
        assert_eq!(
            Error::DuplicateSeat {
                seat_token: "7A".to_string()
            }
            .exit_code(),
            2
        );
        assert_eq!(Error::ParserError("bad quote".to_string()).exit_code(), 2);
        assert_eq!(Error::Other("boom".to_string()).exit_code(), 1);

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        assert_eq!(Error::IoError(io_err).exit_code(), 1);
    }
}
