//! Error types for ttyblank.

use thiserror::Error;

/// Errors that end a blanking run.
///
/// Every variant is fatal. Variants after `ConfigRead` are raised while the
/// restore guard is armed, so the terminal is reset before they reach the
/// caller.
#[derive(Error, Debug)]
pub enum BlankError {
    /// Standard input is not attached to an interactive terminal.
    #[error("not running in a terminal")]
    NotATerminal,

    /// The terminal attributes could not be captured.
    #[error("failed to read terminal attributes: {0}")]
    ConfigRead(#[source] std::io::Error),

    /// The non-interactive mode could not be applied.
    #[error("failed to set terminal to raw mode: {0}")]
    ConfigWrite(#[source] std::io::Error),

    /// An escape sequence could not be written.
    #[error("failed to write {sequence} code: {source}")]
    OutputWrite {
        sequence: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The blocking read failed.
    #[error("failed to read input key: {0}")]
    InputRead(#[source] std::io::Error),

    /// The blocking read returned without a byte.
    #[error("failed to read input key: end of input")]
    ShortRead,
}

impl BlankError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Convenience Result type for ttyblank operations.
pub type Result<T> = std::result::Result<T, BlankError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_a_terminal_display() {
        let err = BlankError::NotATerminal;
        assert_eq!(err.to_string(), "not running in a terminal");
    }

    #[test]
    fn test_config_read_includes_os_error() {
        let err = BlankError::ConfigRead(io::Error::from_raw_os_error(9));
        let msg = err.to_string();
        assert!(msg.contains("terminal attributes"));
        assert!(msg.contains("os error 9"));
    }

    #[test]
    fn test_output_write_names_sequence() {
        let err = BlankError::OutputWrite {
            sequence: "hide cursor",
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        let msg = err.to_string();
        assert!(msg.contains("hide cursor"));
        assert!(msg.contains("pipe closed"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = BlankError::InputRead(io::Error::new(io::ErrorKind::Interrupted, "eintr"));
        assert!(err.source().is_some());
        assert!(BlankError::ShortRead.source().is_none());
    }

    #[test]
    fn test_exit_code_is_failure() {
        assert_eq!(BlankError::NotATerminal.exit_code(), 1);
        assert_eq!(BlankError::ShortRead.exit_code(), 1);
    }
}
