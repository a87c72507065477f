// src/report/mod.rs
//! Rendering of per-round tables and final route summaries.

pub mod console;
pub mod json;
