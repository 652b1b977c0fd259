//! Terminal abstraction layer.
//!
//! The blanker only needs a handful of primitives: a tty check, attribute
//! snapshot and apply, mode derivation, and single writes and reads. The
//! [`Terminal`] trait names them so the same sequence can drive a real tty
//! or a recording double.

mod mode;
mod tty;

pub use mode::blank_mode;
pub use tty::{FdStream, Stdio, Tty};

use std::io;

/// Primitive terminal operations used by the blanker.
pub trait Terminal {
    /// Snapshot of the terminal's attributes.
    type Attributes: Clone;

    /// Whether the controlled descriptor is an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Capture the current attributes.
    fn attributes(&self) -> io::Result<Self::Attributes>;

    /// Apply `attrs`, draining output and discarding pending input first.
    fn set_attributes(&mut self, attrs: &Self::Attributes) -> io::Result<()>;

    /// Derive the non-interactive input mode from a snapshot.
    fn blank_mode(&self, saved: &Self::Attributes) -> Self::Attributes;

    /// Write one escape sequence and flush it.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Block for at most one byte. `Ok(None)` is a zero-length read.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}
