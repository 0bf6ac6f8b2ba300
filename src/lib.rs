//! Shared Cell Simulation
//!
//! Concurrent readers and writers over a single value behind a reader/writer lock, with one
//! shared [`Deadline`] applied to every operation.
//!
//! # Features
//!
//! - **One shared cell**: [`SharedCell<T>`] allows any number of readers or exactly one writer.
//! - **Entry-checked deadlines**: every operation polls its [`Deadline`] once, before touching
//!   the lock. A deadline that passes while an operation waits for or holds the lock does not
//!   interrupt it.
//! - **Runtime-agnostic**: [`Simulation::run`] takes a spawner, so workers run on Tokio,
//!   async-std, smol, or plain threads.
//! - **Last write wins**: the final value is whatever the last successful writer stored.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use cellsim::{Simulation, SimulationConfig};
//!
//! # async {
//! let config = SimulationConfig::default()
//!     .with_workers(4)
//!     .with_timeout(Duration::from_secs(5))
//!     .with_pause(Duration::from_millis(50));
//!
//! let report = Simulation::new(config)
//!     .run(|fut| { tokio::spawn(fut); })
//!     .await
//!     .unwrap();
//!
//! println!("{report}");
//! # };
//! ```
//!
//! Using the cell directly:
//!
//! ```
//! use std::time::Duration;
//! use cellsim::{CellError, Deadline, SharedCell};
//!
//! let cell = SharedCell::new(String::from("initial data"));
//!
//! let expired = Deadline::after(Duration::ZERO);
//! assert_eq!(cell.write(&expired, "ignored".into()), Err(CellError::DeadlineExceeded));
//!
//! let deadline = Deadline::never();
//! cell.write(&deadline, "stored".into()).unwrap();
//! assert_eq!(cell.read(&deadline).unwrap(), "stored");
//! ```
//!
//! # Deadline Semantics
//!
//! The deadline is a polled flag, not a timer. An operation that passes its entry check
//! always completes, however long it then waits on the lock. There are no retries: a refused
//! operation is reported once and skipped.
//!
//! # Optional Tracing Support
//!
//! Enable the `tracing` feature to get structured logs from cell operations, workers, and
//! simulation runs. When the feature is disabled (the default) the logging code is removed at
//! compile time.
//!
//! ```toml
//! [dependencies]
//! cellsim = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! ## Log Levels
//!
//! - **INFO**: simulation start/finish, successful worker reads and writes
//! - **WARN**: operations refused by the deadline
//! - **DEBUG**: worker spawning, cell updates
//! - **TRACE**: lock acquisition
//!
//! ```bash
//! RUST_LOG=cellsim=info cargo run --example simulate --features tracing
//! ```

mod cell;
mod deadline;
mod error;
mod simulation;
mod worker;

// Public re-exports
pub use cell::SharedCell;
pub use deadline::Deadline;
pub use error::{CellError, CellResult};
pub use simulation::{Simulation, SimulationConfig, SimulationReport, WorkerOutcome};
pub use worker::Worker;
