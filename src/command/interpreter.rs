//! Applies parsed commands to a lot.

use tracing::debug;

use super::{Command, NumberPolicy, Rejection, Response};
use crate::lot::ParkingLot;

/// Executes command lines against the lot it owns.
#[derive(Debug, Clone)]
pub struct Interpreter {
    lot: ParkingLot,
    numbers: NumberPolicy,
}

impl Interpreter {
    #[must_use]
    pub const fn new(lot: ParkingLot, numbers: NumberPolicy) -> Self {
        Self { lot, numbers }
    }

    #[must_use]
    pub const fn lot(&self) -> &ParkingLot {
        &self.lot
    }

    /// Parse and apply one line.
    ///
    /// Lines that do not parse are answered with an invalid-command rejection
    /// quoting the line verbatim.
    pub fn execute(&mut self, line: &str) -> Response {
        match Command::parse(line, self.numbers) {
            Some(command) => self.apply(command),
            None => {
                debug!(line, "invalid command");
                Response::invalid(line)
            }
        }
    }

    /// Apply an already parsed command.
    pub fn apply(&mut self, command: Command) -> Response {
        debug!(command = command.keyword(), "applying command");
        match command {
            Command::Create { capacity } => {
                self.lot.create(capacity);
                Response::Created { capacity }
            }
            Command::Park { registration } => match self.lot.park(&registration) {
                Ok(slot) => Response::Parked { registration, slot },
                Err(err) => Response::Rejected(Rejection::from(err)),
            },
            Command::Leave {
                registration,
                hours,
            } => match self.lot.leave(&registration, hours) {
                Ok(departure) => Response::Left(departure),
                Err(err) => Response::Rejected(Rejection::from(err)),
            },
            Command::Status => Response::Status {
                slots: self.lot.status(),
            },
        }
    }
}
