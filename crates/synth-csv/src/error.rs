//! Error types for the CSV pipeline.

use synth_core::SpecError;
use synth_generator::GeneratorError;
use thiserror::Error;

/// Errors that can end a pipeline run.
///
/// Every variant is terminal: the run stops, rows already written to the
/// destination stay there.
#[derive(Error, Debug)]
pub enum SynthError {
    /// The input has no header row.
    #[error("CSV input is empty or missing a header")]
    EmptyInput,

    /// Parameters that cannot produce a run.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A data line could not be parsed.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Reading from the source or writing to the destination failed.
    #[error("Stream I/O error: {0}")]
    StreamIo(#[from] std::io::Error),

    /// The cancel flag was raised between rows.
    #[error("Run cancelled after writing {rows_written} rows")]
    Cancelled { rows_written: u64 },

    /// The configured timeout elapsed between rows.
    #[error("Run timed out after writing {rows_written} rows")]
    TimedOut { rows_written: u64 },
}

impl From<csv::Error> for SynthError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::StreamIo(io),
            _ => Self::MalformedRow { line, message },
        }
    }
}

impl From<SpecError> for SynthError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::InvalidConfiguration(message) => Self::InvalidConfiguration(message),
            other => Self::InvalidConfiguration(other.to_string()),
        }
    }
}

impl From<GeneratorError> for SynthError {
    fn from(err: GeneratorError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

impl SynthError {
    /// Stable short name of the error kind, for status lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidConfiguration(_) => "invalid_configuration",
            Self::MalformedRow { .. } => "malformed_row",
            Self::StreamIo(_) => "stream_io",
            Self::Cancelled { .. } => "cancelled",
            Self::TimedOut { .. } => "timed_out",
        }
    }
}
