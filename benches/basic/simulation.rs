//! Whole-simulation benchmarks

use std::time::Duration;

use cellsim::{Simulation, SimulationConfig};
use criterion::Criterion;

pub fn bench_simulation(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    for workers in [3usize, 100] {
        let config = SimulationConfig::default()
            .with_workers(workers)
            .with_timeout(Duration::from_secs(60))
            .with_pause(Duration::ZERO);
        let simulation = Simulation::new(config);

        c.bench_function(&format!("simulate_{}_workers", workers), |b| {
            b.iter(|| {
                rt.block_on(async {
                    simulation
                        .run(|fut| {
                            tokio::spawn(fut);
                        })
                        .await
                        .unwrap()
                })
            });
        });
    }
}
