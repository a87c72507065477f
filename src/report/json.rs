// src/report/json.rs
//! Machine-readable route summary.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::topology::{get_min, Topology};

/// One (router, destination) route in the final summary. `cost` and
/// `via` are null when the destination is unreachable.
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub router: String,
    pub destination: String,
    pub cost: Option<u32>,
    pub via: Option<String>,
}

/// Collects the converged routes in report order.
#[must_use]
pub fn collect_routes(topology: &Topology) -> Vec<RouteEntry> {
    let mut routes = Vec::new();
    for node in topology.iter() {
        for (dest, row) in &node.table {
            let best = get_min(row);
            routes.push(RouteEntry {
                router: node.name.clone(),
                destination: dest.clone(),
                cost: best.map(|(_, c)| c),
                via: best.map(|(v, _)| v.to_string()),
            });
        }
    }
    routes
}

/// Writes the route summary as a pretty-printed JSON array.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_routes<W: Write>(out: &mut W, topology: &Topology) -> Result<()> {
    let routes = collect_routes(topology);
    serde_json::to_writer_pretty(&mut *out, &routes)?;
    writeln!(out)?;
    Ok(())
}
