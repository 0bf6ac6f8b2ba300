//! Runtime tests module
//!
//! The simulation only needs a spawner, so it must behave the same on every executor.
