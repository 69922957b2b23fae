//! Command parsing and dispatch.
//!
//! A line such as `park KA-01-HH-1234` is parsed into a [`Command`], applied
//! to the lot by the [`Interpreter`] and answered with a [`Response`].

mod interpreter;
mod parser;
mod response;

pub use interpreter::Interpreter;
pub use parser::{Command, NumberPolicy};
pub use response::{Rejection, Response, STATUS_HEADER};
