//! Fixed-size worker simulation over one shared cell.
//!
//! Every worker gets the same [`Deadline`], reads the cell, pauses, then writes its own
//! data. [`Simulation::run`] waits for all workers before reading the final value.

use std::sync::Arc;
use std::time::Duration;

use futures::channel::mpsc;
use futures::future::BoxFuture;
use futures::StreamExt;
use futures_timer::Delay;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::cell::SharedCell;
use crate::deadline::Deadline;
use crate::error::CellResult;
use crate::worker::Worker;

/// Parameters of a simulation run.
///
/// The defaults are three workers, a 100ns deadline, a one second pause between each
/// worker's read and write, and the initial value `"initial data"`. With a deadline that
/// short most operations fail their entry check; raise it with
/// [`SimulationConfig::with_timeout`] to see them succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of workers, numbered from 1.
    pub workers: usize,
    /// Lifetime of the one deadline shared by every operation.
    pub timeout: Duration,
    /// Delay between each worker's read and its write.
    pub pause: Duration,
    /// Value the cell starts with.
    pub initial: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            workers: 3,
            timeout: Duration::from_nanos(100),
            pause: Duration::from_secs(1),
            initial: "initial data".to_string(),
        }
    }
}

impl SimulationConfig {
    /// Set the number of workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the shared deadline's lifetime.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pause between read and write.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Set the cell's starting value.
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }
}

/// What one worker observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerOutcome {
    /// 1-based worker number.
    pub worker_id: usize,
    /// The value read, or why the read was refused.
    pub read: CellResult<String>,
    /// The data written, or why the write was refused.
    pub write: CellResult<String>,
}

/// Per-worker outcomes, sorted by worker id, plus the value left in the cell.
///
/// The `Display` output follows worker id order, not the order operations happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// One entry per worker that finished, in worker id order.
    pub outcomes: Vec<WorkerOutcome>,
    /// The cell's value after every worker finished.
    pub final_value: String,
}

impl SimulationReport {
    /// Number of workers whose write was applied.
    pub fn successful_writes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.write.is_ok()).count()
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            let id = outcome.worker_id;
            match &outcome.read {
                Ok(data) => writeln!(f, "Worker {} reading from cell: {}", id, data)?,
                Err(err) => writeln!(f, "Worker {}: Read operation failed: {}", id, err)?,
            }
            match &outcome.write {
                Ok(data) => writeln!(f, "Worker {} writing to cell: {}", id, data)?,
                Err(err) => writeln!(f, "Worker {}: Write operation failed: {}", id, err)?,
            }
        }
        write!(f, "Final state of the cell: {}", self.final_value)
    }
}

/// Runs a [`SimulationConfig`] on any async runtime.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use cellsim::{Simulation, SimulationConfig};
///
/// # async {
/// let config = SimulationConfig::default()
///     .with_timeout(Duration::from_secs(5))
///     .with_pause(Duration::from_millis(10));
///
/// let report = Simulation::new(config)
///     .run(|fut| { tokio::spawn(fut); })
///     .await
///     .unwrap();
///
/// assert_eq!(report.successful_writes(), 3);
/// # };
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cellsim::{Simulation, SimulationConfig};
    ///
    /// let simulation = Simulation::new(SimulationConfig::default().with_workers(5));
    /// assert_eq!(simulation.config().workers, 5);
    /// ```
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The parameters this simulation runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Spawn every worker with `spawner`, wait for all of them, and read the final value.
    ///
    /// # Parameters
    ///
    /// - `spawner`: spawns a future on the caller's runtime. Examples:
    ///   - Tokio: `|fut| { tokio::spawn(fut); }`
    ///   - Plain threads: `|fut| { std::thread::spawn(move || futures::executor::block_on(fut)); }`
    ///
    /// # Errors
    ///
    /// Only the final read can fail the run. It uses [`Deadline::never`], so in practice the
    /// run always succeeds; worker failures are reported in [`SimulationReport::outcomes`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, spawner)))]
    pub async fn run<S>(&self, spawner: S) -> CellResult<SimulationReport>
    where
        S: Fn(BoxFuture<'static, ()>),
    {
        #[cfg(feature = "tracing")]
        info!(
            workers = self.config.workers,
            timeout = ?self.config.timeout,
            "starting simulation"
        );

        let cell = Arc::new(SharedCell::new(self.config.initial.clone()));
        let deadline = Deadline::after(self.config.timeout);

        // One guaranteed slot per sender, so try_send never fails for capacity
        let (outcome_tx, mut outcome_rx) = mpsc::channel::<WorkerOutcome>(self.config.workers);

        for id in 1..=self.config.workers {
            let worker = Worker::new(id, cell.clone());
            let deadline = deadline.clone();
            let pause = self.config.pause;
            let mut outcome_tx = outcome_tx.clone();

            #[cfg(feature = "tracing")]
            debug!(worker_id = id, "spawning worker");

            spawner(Box::pin(async move {
                let read = worker.read_from_cell(&deadline);

                Delay::new(pause).await;

                let data = worker.written_data();
                let write = worker.write_to_cell(&deadline, data.clone()).map(|()| data);

                // Ignore send errors - receiver may be dropped
                let _ = outcome_tx.try_send(WorkerOutcome {
                    worker_id: worker.id(),
                    read,
                    write,
                });
            }));
        }

        // Drop the original sender so the channel closes when all workers finish
        drop(outcome_tx);

        let mut outcomes = Vec::with_capacity(self.config.workers);
        while let Some(outcome) = outcome_rx.next().await {
            outcomes.push(outcome);
        }
        outcomes.sort_by_key(|o| o.worker_id);

        deadline.cancel();

        let final_value = cell.read(&Deadline::never())?;

        #[cfg(feature = "tracing")]
        info!(final_value = %final_value, "simulation finished");

        Ok(SimulationReport {
            outcomes,
            final_value,
        })
    }
}
