// src/engine/mod.rs
//! The convergence engine: per-round relaxation and the driver loop.

pub mod driver;
pub mod relax;

pub use driver::Driver;
