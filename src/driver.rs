//! Reads command lines and writes their results.
//!
//! Until a lot exists only `create_parking_lot` is accepted. The first one
//! builds the [`Interpreter`], which then handles every later line.

use std::io::{BufRead, Write};

use tracing::{debug, info, trace};

use crate::command::{Command, Interpreter, Rejection, Response};
use crate::config::Settings;
use crate::error::ParkitError;
use crate::lot::ParkingLot;
use crate::output::format_response;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Blank lines skipped.
    pub blank: usize,
    /// Lines answered with a result.
    pub processed: usize,
    /// Results that were rejections.
    pub rejected: usize,
}

/// Command processing state for one input stream.
#[derive(Debug)]
pub struct Session {
    interpreter: Option<Interpreter>,
    settings: Settings,
    summary: RunSummary,
}

impl Session {
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            interpreter: None,
            settings,
            summary: RunSummary {
                lines: 0,
                blank: 0,
                processed: 0,
                rejected: 0,
            },
        }
    }

    /// The interpreter, once a lot has been created.
    #[must_use]
    pub const fn interpreter(&self) -> Option<&Interpreter> {
        self.interpreter.as_ref()
    }

    #[must_use]
    pub const fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Handle one input line. Empty lines produce no response; a line of
    /// only whitespace is answered like any other unrecognized command.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        self.summary.lines += 1;
        if line.is_empty() {
            trace!(line = self.summary.lines, "skipping blank line");
            self.summary.blank += 1;
            return None;
        }

        let response = match &mut self.interpreter {
            Some(interpreter) => interpreter.execute(line),
            None => self.create_lot(line),
        };

        self.summary.processed += 1;
        if response.is_rejected() {
            self.summary.rejected += 1;
        }
        Some(response)
    }

    fn create_lot(&mut self, line: &str) -> Response {
        match Command::parse(line, self.settings.numbers) {
            Some(Command::Create { capacity }) => {
                let lot = ParkingLot::new(capacity, self.settings.tariff);
                self.interpreter = Some(Interpreter::new(lot, self.settings.numbers));
                Response::Created { capacity }
            }
            _ => {
                debug!(line, "command before lot creation");
                Response::Rejected(Rejection::NotCreated)
            }
        }
    }
}

/// Process every line of `input`, writing one result per command to `out`.
///
/// # Errors
///
/// Returns `ParkitError::Read` if a line cannot be read, `ParkitError::Io` if
/// writing fails and `ParkitError::Parse` if a JSON result cannot be built.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    settings: Settings,
) -> Result<RunSummary, ParkitError> {
    let mut session = Session::new(settings);

    for line in input.lines() {
        let line = line.map_err(ParkitError::Read)?;
        if let Some(response) = session.handle_line(&line) {
            writeln!(out, "{}", format_response(&response, settings.format)?)?;
        }
    }
    out.flush()?;

    let summary = session.summary();
    info!(
        lines = summary.lines,
        blank = summary.blank,
        processed = summary.processed,
        rejected = summary.rejected,
        "end of input"
    );
    Ok(summary)
}
