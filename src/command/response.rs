//! Answers to processed lines.

use serde::Serialize;
use thiserror::Error;

use crate::lot::{Departure, LotError, Occupancy};

/// Header row of a non-empty status report.
pub const STATUS_HEADER: &str = "Slot No. Registration No.";

/// Outcome of one input line.
///
/// `Display` renders the plain message written to the output stream. A
/// non-empty status report ends every row, the last included, with a newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Response {
    Created { capacity: i64 },
    Parked { registration: String, slot: usize },
    Left(Departure),
    Status { slots: Vec<Occupancy> },
    Rejected(Rejection),
}

/// A line that was answered without changing the lot.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Sorry, parking lot is full")]
    LotFull,

    #[error("Registration number {registration} not found")]
    NotFound { registration: String },

    #[error("Invalid command: {line}")]
    InvalidCommand { line: String },

    #[error("Please create parking lot first")]
    NotCreated,
}

impl From<LotError> for Rejection {
    fn from(err: LotError) -> Self {
        match err {
            LotError::Full => Self::LotFull,
            LotError::NotFound(registration) => Self::NotFound { registration },
        }
    }
}

impl Response {
    #[must_use]
    pub fn invalid(line: &str) -> Self {
        Self::Rejected(Rejection::InvalidCommand {
            line: line.to_string(),
        })
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { capacity } => {
                write!(f, "Created a parking lot with {capacity} slots")
            }
            Self::Parked { slot, .. } => write!(f, "Allocated slot number: {slot}"),
            Self::Left(departure) => write!(f, "{departure}"),
            Self::Status { slots } if slots.is_empty() => write!(f, "Parking lot is empty"),
            Self::Status { slots } => {
                writeln!(f, "{STATUS_HEADER}")?;
                for row in slots {
                    writeln!(f, "{} {}", row.slot, row.registration)?;
                }
                Ok(())
            }
            Self::Rejected(rejection) => write!(f, "{rejection}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Response::Created { capacity: 6 }.to_string(),
            "Created a parking lot with 6 slots"
        );
        assert_eq!(
            Response::Parked {
                registration: "KA-01".to_string(),
                slot: 3
            }
            .to_string(),
            "Allocated slot number: 3"
        );
        assert_eq!(
            Response::Rejected(Rejection::LotFull).to_string(),
            "Sorry, parking lot is full"
        );
        assert_eq!(
            Response::invalid("Fly  away").to_string(),
            "Invalid command: Fly  away"
        );
        assert_eq!(
            Response::Rejected(Rejection::NotCreated).to_string(),
            "Please create parking lot first"
        );
    }

    #[test]
    fn test_status_message() {
        let empty = Response::Status { slots: vec![] };
        assert_eq!(empty.to_string(), "Parking lot is empty");

        let report = Response::Status {
            slots: vec![
                Occupancy {
                    slot: 1,
                    registration: "KA-04".to_string(),
                },
                Occupancy {
                    slot: 2,
                    registration: "KA-02".to_string(),
                },
            ],
        };
        assert_eq!(
            report.to_string(),
            "Slot No. Registration No.\n1 KA-04\n2 KA-02\n"
        );
    }

    #[test]
    fn test_lot_error_conversion() {
        let rejection: Rejection = LotError::NotFound("KA-09".to_string()).into();
        assert_eq!(rejection.to_string(), "Registration number KA-09 not found");
        assert_eq!(Rejection::from(LotError::Full), Rejection::LotFull);
    }
}
