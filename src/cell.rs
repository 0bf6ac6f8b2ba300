//! The shared cell: one value behind a reader/writer lock.
//!
//! Both operations poll the caller's [`Deadline`] once on entry. Once that check passes the
//! operation runs to completion, even if the deadline expires while the caller is queued on
//! the lock or holding it.

use parking_lot::RwLock;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::deadline::Deadline;
use crate::error::CellResult;

/// A single mutable value guarded by a reader/writer lock.
///
/// Any number of readers may hold the lock at once, or exactly one writer.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cellsim::{Deadline, SharedCell};
///
/// let cell = SharedCell::new("initial data".to_string());
/// let deadline = Deadline::after(Duration::from_secs(5));
///
/// cell.write(&deadline, "updated".to_string()).unwrap();
/// assert_eq!(cell.read(&deadline).unwrap(), "updated");
/// ```
#[derive(Default)]
pub struct SharedCell<T> {
    value: RwLock<T>,
}

impl<T> SharedCell<T> {
    /// Create a cell holding `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellsim::{Deadline, SharedCell};
    ///
    /// let cell = SharedCell::new(42);
    /// assert_eq!(cell.read(&Deadline::never()), Ok(42));
    /// ```
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
        }
    }

    /// Read the current value under a shared lock.
    ///
    /// # Errors
    ///
    /// Returns the deadline's error if it is already done; the lock is not touched.
    pub fn read(&self, deadline: &Deadline) -> CellResult<T>
    where
        T: Clone,
    {
        deadline.check()?;

        #[cfg(feature = "tracing")]
        trace!("acquiring shared lock");

        let guard = self.value.read();
        Ok(guard.clone())
    }

    /// Replace the value under the exclusive lock.
    ///
    /// # Errors
    ///
    /// Returns the deadline's error if it is already done; the value is left untouched.
    pub fn write(&self, deadline: &Deadline, value: T) -> CellResult<()> {
        self.update(deadline, |current| *current = value)
    }

    /// Run `f` with exclusive access to the value and return its result.
    ///
    /// # Errors
    ///
    /// Returns the deadline's error if it is already done; `f` is not called.
    pub fn update<R>(&self, deadline: &Deadline, f: impl FnOnce(&mut T) -> R) -> CellResult<R> {
        deadline.check()?;

        #[cfg(feature = "tracing")]
        trace!("acquiring exclusive lock");

        let mut guard = self.value.write();
        let result = f(&mut guard);

        #[cfg(feature = "tracing")]
        debug!("cell updated");

        Ok(result)
    }

    /// Consume the cell and return the value, without checking any deadline.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // try_read so Debug never blocks behind a writer
        match self.value.try_read() {
            Some(guard) => f.debug_struct("SharedCell").field("value", &*guard).finish(),
            None => f
                .debug_struct("SharedCell")
                .field("value", &"<locked>")
                .finish(),
        }
    }
}
