// src/report/console.rs
//! Text reporting. The exact output shape is a contract: tab-separated
//! cells, `INF` for unreachable, `-` for no information.

use std::io::{self, Write};

use crate::topology::{get_min, Node, Topology};

/// Prints one router's distance table as of the start of round `t`.
///
/// The header row lists destinations in table order; each following
/// line is one destination row with its via-candidate cells.
///
/// # Errors
/// Returns error if the write fails.
pub fn print_table<W: Write>(out: &mut W, node: &Node, t: u32) -> io::Result<()> {
    writeln!(out, "router {} at t={t}", node.name)?;
    for dest in node.table.keys() {
        write!(out, "\t{dest}")?;
    }
    writeln!(out)?;
    for (dest, row) in &node.table {
        write!(out, "{dest}")?;
        for cell in row.values() {
            write!(out, "\t{cell}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

/// Prints the best route per (router, destination) pair, using the
/// same min selection (and tie-break) as relaxation.
///
/// # Errors
/// Returns error if the write fails.
pub fn print_routes<W: Write>(out: &mut W, topology: &Topology) -> io::Result<()> {
    for node in topology.iter() {
        for (dest, row) in &node.table {
            match get_min(row) {
                Some((via, cost)) => writeln!(
                    out,
                    "router {}: {dest} is {cost} routing through {via}",
                    node.name
                )?,
                None => writeln!(out, "router {}: {dest} is unreachable", node.name)?,
            }
        }
    }
    writeln!(out)
}
