//! Error types for the roster program
//!
//! Errors are split by layer:
//!
//! - [`RosterError`]: a lookup-backed roster operation could not resolve its student.
//! - [`InputError`]: operator input that cannot become a [`Request`](crate::menu::Request).
//! - [`AppError`]: terminal I/O and logging setup failures surfaced by `main`.
//!
//! Only [`RosterError`] is ever shown to the operator as part of normal flow; input
//! errors are reported at the prompt and the field is asked again.

use std::io;
use thiserror::Error;

use crate::menu::MenuChoice;

/// Failures of lookup-backed roster operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No student carries the given identifier
    #[error("Student not found. Please enter a correct student ID")]
    StudentNotFound { id: String },
}

impl RosterError {
    /// The identifier that failed to resolve
    pub fn id(&self) -> &str {
        match self {
            RosterError::StudentNotFound { id } => id,
        }
    }
}

/// Operator input that was rejected before reaching the roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Amount field did not parse to a finite number
    #[error("Please enter a valid amount (got '{input}')")]
    InvalidAmount { input: String },

    /// Menu selection matched neither a number nor a label
    #[error("Invalid selection: {input}")]
    InvalidSelection { input: String },

    /// A form was submitted before every field of the selection was answered
    #[error("{choice} needs {expected} answer(s), got {got}")]
    IncompleteForm {
        choice: MenuChoice,
        expected: usize,
        got: usize,
    },
}

/// Failures that end the program
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("cannot open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),

    #[error("cannot install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Input(#[from] InputError),
}
