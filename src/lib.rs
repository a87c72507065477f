pub mod cli;
pub mod cost;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;
pub mod topology;
