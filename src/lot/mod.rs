//! Parking lot state and billing.
//!
//! The [`ParkingLot`] owns slot occupancy and computes departure charges with
//! its [`Tariff`]. Slots are numbered from 1; the lowest free number is always
//! the one nearest the entrance.

mod billing;
mod manager;
mod types;

pub use billing::Tariff;
pub use manager::ParkingLot;
pub use types::{Departure, LotError, Occupancy, Vehicle};
