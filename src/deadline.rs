//! Shared deadline checked at the entry of every cell operation.
//!
//! A [`Deadline`] is cheap to clone; all clones observe the same expiry instant and the
//! same cancellation flag. It is only ever *polled*: nothing wakes or interrupts a task
//! when the deadline passes.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use crate::error::{CellError, CellResult};

struct DeadlineInner {
    expires_at: Option<Instant>,
    cancelled: AtomicBool,
}

/// Cancellation token with an optional expiry instant.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cellsim::{CellError, Deadline};
///
/// let deadline = Deadline::after(Duration::from_secs(60));
/// assert!(deadline.check().is_ok());
///
/// deadline.cancel();
/// assert_eq!(deadline.check(), Err(CellError::Cancelled));
/// ```
#[derive(Clone)]
pub struct Deadline {
    inner: Arc<DeadlineInner>,
}

impl Deadline {
    /// Deadline that expires `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        // Overflowing timeouts behave as "no expiry".
        Self::with_expiry(Instant::now().checked_add(timeout))
    }

    /// Deadline that expires at `instant`.
    pub fn at(instant: Instant) -> Self {
        Self::with_expiry(Some(instant))
    }

    /// Deadline that never expires unless cancelled.
    pub fn never() -> Self {
        Self::with_expiry(None)
    }

    fn with_expiry(expires_at: Option<Instant>) -> Self {
        Self {
            inner: Arc::new(DeadlineInner {
                expires_at,
                cancelled: AtomicBool::new(false),
            }),
        }
    }

    /// Cancel the deadline for every clone. Idempotent.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
    }

    /// The expiry instant, or `None` for [`Deadline::never`].
    pub fn expires_at(&self) -> Option<Instant> {
        self.inner.expires_at
    }

    /// Time left until expiry, saturating at zero. `None` when there is no expiry instant.
    pub fn remaining(&self) -> Option<Duration> {
        self.inner
            .expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    /// True once the deadline is cancelled or its instant has passed.
    pub fn is_done(&self) -> bool {
        self.check().is_err()
    }

    /// Entry check used by cell operations.
    ///
    /// # Errors
    ///
    /// - [`CellError::Cancelled`] if [`Deadline::cancel`] was called (takes precedence)
    /// - [`CellError::DeadlineExceeded`] if the expiry instant has passed
    pub fn check(&self) -> CellResult<()> {
        if self.inner.cancelled.load(Ordering::SeqCst) {
            return Err(CellError::Cancelled);
        }
        match self.inner.expires_at {
            Some(at) if Instant::now() >= at => Err(CellError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline")
            .field("expires_at", &self.inner.expires_at)
            .field("cancelled", &self.inner.cancelled.load(Ordering::SeqCst))
            .finish()
    }
}
