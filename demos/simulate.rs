//! # Shared Cell Simulation
//!
//! Spawns a fixed number of workers against one shared cell. Each worker reads the cell,
//! pauses, then writes `new data written by Worker N`. All operations share one deadline,
//! checked only when an operation starts.
//!
//! The report is printed after every worker has finished, one worker at a time in id
//! order. It does not show the order in which operations actually happened; enable the
//! `tracing` feature to see per-operation log lines as they occur.
//!
//! ## Running This Example
//! ```bash
//! cargo run --example simulate
//! cargo run --example simulate -- --timeout-ms 5000 --pause-ms 100 --workers 5
//! RUST_LOG=cellsim=debug cargo run --example simulate --features tracing -- --timeout-ms 5000
//! ```
//!
//! ## Expected Output (defaults: 100ns deadline)
//! ```text
//! Worker 1: Read operation failed: context deadline exceeded
//! Worker 1: Write operation failed: context deadline exceeded
//! Worker 2: Read operation failed: context deadline exceeded
//! Worker 2: Write operation failed: context deadline exceeded
//! Worker 3: Read operation failed: context deadline exceeded
//! Worker 3: Write operation failed: context deadline exceeded
//! Final state of the cell: initial data
//! ```

use std::time::Duration;

use cellsim::{Simulation, SimulationConfig};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(about = "Concurrent workers over one deadline-checked shared cell")]
struct Args {
    /// Number of workers
    #[arg(short, long, default_value_t = 3)]
    workers: usize,

    /// Shared deadline in nanoseconds (ignored when --timeout-ms is given)
    #[arg(long, default_value_t = 100)]
    timeout_ns: u64,

    /// Shared deadline in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Pause between each worker's read and write, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    pause_ms: u64,

    /// Initial value of the cell
    #[arg(short, long, default_value = "initial data")]
    initial: String,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let timeout = match self.timeout_ms {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::from_nanos(self.timeout_ns),
        };

        SimulationConfig::default()
            .with_workers(self.workers)
            .with_timeout(timeout)
            .with_pause(Duration::from_millis(self.pause_ms))
            .with_initial(self.initial.clone())
    }
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cellsim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let simulation = Simulation::new(args.config());

    match simulation
        .run(|fut| {
            tokio::spawn(fut);
        })
        .await
    {
        Ok(report) => println!("{report}"),
        Err(err) => {
            eprintln!("Error reading final state of the cell: {err}");
            std::process::exit(1);
        }
    }
}
