// Common test utilities and helpers for the test suite

use std::time::Duration;

use cellsim::SimulationConfig;
use futures::future::BoxFuture;

/// Spawner for the Tokio runtime the test is running on.
pub fn tokio_spawner(fut: BoxFuture<'static, ()>) {
    tokio::spawn(fut);
}

/// A config whose deadline comfortably outlives the run.
#[allow(dead_code)]
pub fn generous(workers: usize) -> SimulationConfig {
    SimulationConfig::default()
        .with_workers(workers)
        .with_timeout(Duration::from_secs(30))
        .with_pause(Duration::from_millis(2))
}

/// The data worker `id` writes.
#[allow(dead_code)]
pub fn data_of(id: usize) -> String {
    format!("new data written by Worker {}", id)
}
