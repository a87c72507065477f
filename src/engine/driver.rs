// src/engine/driver.rs
//! The synchronous round loop that drives the simulation to a fixed
//! point.

use std::io::Write;

use crate::error::Result;
use crate::report::console;
use crate::topology::Topology;

use super::relax;

/// Drives a topology through convergence rounds.
///
/// The round counter `t` spans the whole simulation: a second pass
/// after an update batch continues the timeline instead of restarting
/// it. Round synchronization is double-buffered -- every round starts
/// with a full snapshot of each table, and relaxation reads only those
/// snapshots.
#[derive(Debug)]
pub struct Driver {
    topology: Topology,
    round: u32,
    render_tables: bool,
    render_routes: bool,
}

impl Driver {
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            round: 0,
            render_tables: true,
            render_routes: true,
        }
    }

    /// Disables per-round table rendering (quiet and JSON modes).
    pub fn set_render_tables(&mut self, render: bool) {
        self.render_tables = render;
    }

    /// Disables the final route summary rendering (JSON mode).
    pub fn set_render_routes(&mut self, render: bool) {
        self.render_routes = render;
    }

    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn topology_mut(&mut self) -> &mut Topology {
        &mut self.topology
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// First convergence pass: derive every table from the links, then
    /// run rounds until stable. Initialization itself performs no
    /// relaxation; nodes start unconverged so the loop always runs at
    /// least once on a non-empty topology.
    ///
    /// # Errors
    /// Returns error if report output fails.
    pub fn run_initial<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let names = self.topology.names();
        for name in &names {
            self.topology.node_mut(name)?.init_table(&names);
        }
        self.converge(out)
    }

    /// Re-convergence after an update batch (links and tables already
    /// mutated by the link mutator). Table shape is never re-derived.
    /// One un-rendered relaxation against the previous pass's snapshots
    /// re-arms the converged flags first; an update that changes
    /// nothing re-converges immediately with zero rendered rounds.
    ///
    /// # Errors
    /// Returns error if report output fails.
    pub fn run_update<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.relax_all()?;
        self.converge(out)
    }

    fn converge<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while !self.topology.all_converged() {
            for name in self.topology.names() {
                self.topology.node_mut(&name)?.snapshot();
            }
            if self.render_tables {
                for node in self.topology.iter() {
                    console::print_table(out, node, self.round)?;
                }
            }
            self.relax_all()?;
            self.round += 1;
        }
        if self.render_routes {
            console::print_routes(out, &self.topology)?;
        }
        Ok(())
    }

    /// Relaxes every node from the snapshots, then applies all changes.
    fn relax_all(&mut self) -> Result<()> {
        let mut updates = Vec::new();
        for node in self.topology.iter() {
            updates.push((node.name.clone(), relax::relax_node(&self.topology, node)));
        }
        for (name, update) in &updates {
            relax::apply_update(self.topology.node_mut(name)?, update);
        }
        Ok(())
    }
}
