//! parkit - a parking lot simulator
//!
//! This crate reads parking lot commands line by line, applies them to a
//! single in-memory lot and reports one result per command.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod lot;
pub mod output;

pub use cli::args::{Cli, OutputFormat};
pub use command::{Command, Interpreter, Response};
pub use error::ParkitError;
pub use lot::ParkingLot;
