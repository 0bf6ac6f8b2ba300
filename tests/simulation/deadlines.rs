//! How the shared deadline shapes a run

use std::time::Duration;

use cellsim::{CellError, Simulation, SimulationConfig};

use crate::common::tokio_spawner;

#[tokio::test]
async fn test_expired_deadline_refuses_everything() {
    let config = SimulationConfig::default()
        .with_workers(4)
        .with_timeout(Duration::ZERO)
        .with_pause(Duration::ZERO);

    let report = Simulation::new(config).run(tokio_spawner).await.unwrap();

    assert_eq!(report.outcomes.len(), 4);
    for outcome in &report.outcomes {
        assert_eq!(outcome.read, Err(CellError::DeadlineExceeded));
        assert_eq!(outcome.write, Err(CellError::DeadlineExceeded));
    }
    assert_eq!(report.successful_writes(), 0);
    assert_eq!(report.final_value, "initial data");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_deadline_expiring_during_pause_refuses_writes_only() {
    let config = SimulationConfig::default()
        .with_workers(3)
        .with_timeout(Duration::from_millis(200))
        .with_pause(Duration::from_millis(600));

    let report = Simulation::new(config).run(tokio_spawner).await.unwrap();

    for outcome in &report.outcomes {
        assert_eq!(outcome.read, Ok("initial data".to_string()));
        assert_eq!(outcome.write, Err(CellError::DeadlineExceeded));
    }
    assert_eq!(report.final_value, "initial data");
}

#[tokio::test]
async fn test_default_config_refuses_writes() {
    // 100ns deadline against a one second pause
    let report = Simulation::default().run(tokio_spawner).await.unwrap();

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.successful_writes(), 0);
    assert_eq!(report.final_value, "initial data");
}
