//! Cell operation benchmarks

use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cellsim::{Deadline, SharedCell};
use criterion::Criterion;

pub fn bench_cell_operations(c: &mut Criterion) {
    let cell = SharedCell::new("initial data".to_string());
    let deadline = Deadline::never();

    c.bench_function("read_uncontended", |b| {
        b.iter(|| black_box(cell.read(&deadline).unwrap()));
    });

    c.bench_function("write_uncontended", |b| {
        b.iter(|| cell.write(&deadline, black_box("data".to_string())).unwrap());
    });

    let expired = Deadline::after(Duration::ZERO);
    c.bench_function("read_refused_by_deadline", |b| {
        b.iter(|| black_box(cell.read(&expired).is_err()));
    });

    c.bench_function("read_write_8_threads", |b| {
        let cell = Arc::new(SharedCell::new(0u64));
        b.iter(|| {
            let handles: Vec<_> = (0..8u64)
                .map(|i| {
                    let cell = cell.clone();
                    let deadline = deadline.clone();
                    thread::spawn(move || {
                        let seen = cell.read(&deadline).unwrap();
                        cell.write(&deadline, seen.wrapping_add(i)).unwrap();
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });
}
