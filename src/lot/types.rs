use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A parked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration: String,
}

impl Vehicle {
    #[must_use]
    pub fn new(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
        }
    }
}

/// One row of a status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub slot: usize,
    pub registration: String,
}

/// Result of a vehicle leaving the lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    pub registration: String,
    pub slot: usize,
    pub hours: i64,
    pub charge: u64,
}

impl std::fmt::Display for Departure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Registration number {} with Slot Number {} is free with Charge ${}",
            self.registration, self.slot, self.charge
        )
    }
}

/// Operations the lot refuses. Neither leaves the lot modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LotError {
    #[error("Sorry, parking lot is full")]
    Full,

    #[error("Registration number {0} not found")]
    NotFound(String),
}
