//! Workers that read from and write to a shared text cell.

use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{info, warn};

use crate::cell::SharedCell;
use crate::deadline::Deadline;
use crate::error::CellResult;

/// A numbered participant sharing one [`SharedCell<String>`].
///
/// Each operation is logged; failures are returned to the caller unchanged, never retried.
#[derive(Debug, Clone)]
pub struct Worker {
    id: usize,
    cell: Arc<SharedCell<String>>,
}

impl Worker {
    /// Create worker `id` sharing `cell`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use cellsim::{Deadline, SharedCell, Worker};
    ///
    /// let cell = Arc::new(SharedCell::new("initial data".to_string()));
    /// let worker = Worker::new(1, cell);
    /// assert_eq!(worker.read_from_cell(&Deadline::never()).unwrap(), "initial data");
    /// ```
    pub fn new(id: usize, cell: Arc<SharedCell<String>>) -> Self {
        Self { id, cell }
    }

    /// The worker's number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The text this worker writes: `new data written by Worker {id}`.
    pub fn written_data(&self) -> String {
        format!("new data written by Worker {}", self.id)
    }

    /// Read the cell, logging the value or the failure.
    ///
    /// # Errors
    ///
    /// Propagates the deadline error from [`SharedCell::read`].
    pub fn read_from_cell(&self, deadline: &Deadline) -> CellResult<String> {
        let result = self.cell.read(deadline);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(data) => info!(worker_id = self.id, data = %data, "worker read from cell"),
                Err(err) => warn!(worker_id = self.id, error = %err, "worker read failed"),
            }
        }

        result
    }

    /// Write `data` to the cell, logging the outcome.
    ///
    /// # Errors
    ///
    /// Propagates the deadline error from [`SharedCell::write`].
    pub fn write_to_cell(&self, deadline: &Deadline, data: String) -> CellResult<()> {
        #[cfg(feature = "tracing")]
        let logged = data.clone();

        let result = self.cell.write(deadline, data);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(()) => info!(worker_id = self.id, data = %logged, "worker wrote to cell"),
                Err(err) => warn!(worker_id = self.id, error = %err, "worker write failed"),
            }
        }

        result
    }
}
