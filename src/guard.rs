//! Scope guard that puts the terminal back the way it was found.

use std::ops::{Deref, DerefMut};

use tracing::{debug, error, warn};

use crate::escape::SHOW_CURSOR;
use crate::terminal::Terminal;

/// RAII guard owning the saved terminal attributes.
///
/// Arm it right after the snapshot is taken and before anything is changed.
/// On drop it shows the cursor and then reapplies the snapshot. Failures of
/// either step are logged and never escalate. The guard derefs to the
/// terminal so the run keeps using it while armed.
pub struct RestoreGuard<'a, T: Terminal> {
    term: &'a mut T,
    saved: T::Attributes,
}

impl<'a, T: Terminal> RestoreGuard<'a, T> {
    /// Arm the guard with a snapshot taken from `term`.
    pub fn new(term: &'a mut T, saved: T::Attributes) -> Self {
        Self { term, saved }
    }
}

impl<T: Terminal> Deref for RestoreGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.term
    }
}

impl<T: Terminal> DerefMut for RestoreGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.term
    }
}

impl<T: Terminal> Drop for RestoreGuard<'_, T> {
    fn drop(&mut self) {
        // Cursor first, attributes second. A failed cursor write is not retried.
        if let Err(e) = self.term.write_all(SHOW_CURSOR) {
            warn!("could not write show cursor code: {}", e);
        }

        match self.term.set_attributes(&self.saved) {
            Ok(()) => debug!("terminal attributes restored"),
            Err(e) => error!("error restoring terminal settings: {}", e),
        }
    }
}
