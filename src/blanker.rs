//! The blanking run: snapshot, raw mode, clear, wait, restore.

use tracing::debug;

use crate::error::{BlankError, Result};
use crate::escape::BLANK_SEQUENCE;
use crate::guard::RestoreGuard;
use crate::terminal::Terminal;

/// Blank `term` and block until one byte of input arrives.
///
/// Returns the byte that was read. Once the attribute snapshot has been
/// taken, the terminal is restored and the cursor shown again before this
/// function returns, whatever the outcome.
///
/// # Errors
///
/// - [`BlankError::NotATerminal`] if `term` is not interactive. Nothing is
///   changed or written.
/// - [`BlankError::ConfigRead`] if the snapshot fails. Nothing is changed or
///   written.
/// - [`BlankError::ConfigWrite`], [`BlankError::OutputWrite`],
///   [`BlankError::InputRead`] or [`BlankError::ShortRead`] for failures
///   after the snapshot. The terminal has been restored.
pub fn blank<T: Terminal>(term: &mut T) -> Result<u8> {
    if !term.is_terminal() {
        return Err(BlankError::NotATerminal);
    }

    let saved = term.attributes().map_err(BlankError::ConfigRead)?;
    debug!("terminal attributes captured");

    let raw = term.blank_mode(&saved);
    let mut term = RestoreGuard::new(term, saved);

    term.set_attributes(&raw).map_err(BlankError::ConfigWrite)?;
    debug!("terminal switched to raw mode");

    for (sequence, bytes) in BLANK_SEQUENCE {
        term.write_all(bytes)
            .map_err(|source| BlankError::OutputWrite { sequence, source })?;
    }

    match term.read_byte() {
        Ok(Some(key)) => {
            debug!(key, "key received");
            Ok(key)
        }
        Ok(None) => Err(BlankError::ShortRead),
        Err(e) => Err(BlankError::InputRead(e)),
    }
}
