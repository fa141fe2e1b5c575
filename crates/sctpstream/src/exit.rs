use std::fmt;
use std::io;

use sctpstream_handler::HandlerError;
use sctpstream_message::RecordError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const PROTOCOL_VIOLATION: i32 = 65;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn record_error(context: &str, err: RecordError) -> CliError {
    match err {
        RecordError::Io(source) => io_error(context, source),
        RecordError::WriterClosed => CliError::new(FAILURE, format!("{context}: {err}")),
        RecordError::InvalidMagic
        | RecordError::InvalidFlags(_)
        | RecordError::PayloadTooLarge { .. }
        | RecordError::Truncated { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
    }
}

pub fn handler_error(context: &str, err: HandlerError) -> CliError {
    match err {
        HandlerError::IncompleteMessage { .. } => {
            CliError::new(PROTOCOL_VIOLATION, format!("{context}: {err}"))
        }
    }
}
