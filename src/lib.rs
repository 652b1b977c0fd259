//! # ttyblank
//!
//! Blank a terminal and wait for a keypress before restoring it.
//!
//! Intended as a screen blanker that can stand in for a login prompt on a
//! virtual console. A run switches the tty to raw mode, clears the screen,
//! hides the cursor and blocks for a single byte. The original attributes
//! and the cursor are restored on every exit path once they were captured.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ttyblank::{blank, Tty};
//!
//! fn main() -> ttyblank::Result<()> {
//!     ttyblank::logging::try_init().ok();
//!
//!     let key = blank(&mut Tty::stdio())?;
//!     eprintln!("woken by byte {key:#04x}");
//!
//!     Ok(())
//! }
//! ```

pub mod blanker;
pub mod cli;
pub mod error;
pub mod escape;
pub mod guard;
pub mod logging;
pub mod terminal;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use blanker::blank;
pub use error::{BlankError, Result};
pub use guard::RestoreGuard;
pub use terminal::{blank_mode, FdStream, Stdio, Terminal, Tty};
