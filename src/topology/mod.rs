// src/topology/mod.rs
//! The topology store: named routers and their symmetric links.

pub mod link;
pub mod node;

pub use link::LinkChange;
pub use node::{get_min, Node, Row, Table};

use std::collections::BTreeMap;

use crate::error::{Result, SimError};

/// Owns every router in the simulation, by value, keyed by name.
///
/// All addressing throughout the crate is by name, never by reference.
/// Name-sorted iteration order is load-bearing: table headers, route
/// summary lines and min tie-breaks all follow it.
#[derive(Debug, Default)]
pub struct Topology {
    nodes: BTreeMap<String, Node>,
}

impl Topology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a router. Nodes are created once and never destroyed
    /// during a run.
    ///
    /// # Errors
    /// Returns `DuplicateNode` if the name is already taken.
    pub fn create_node(&mut self, name: &str) -> Result<()> {
        if self.nodes.contains_key(name) {
            return Err(SimError::DuplicateNode {
                name: name.to_string(),
            });
        }
        self.nodes.insert(name.to_string(), Node::new(name));
        Ok(())
    }

    /// Looks up a router by name.
    ///
    /// # Errors
    /// Returns `UnknownNode` if no such router exists.
    pub fn node(&self, name: &str) -> Result<&Node> {
        self.nodes.get(name).ok_or_else(|| SimError::UnknownNode {
            name: name.to_string(),
        })
    }

    /// Mutable lookup by name.
    ///
    /// # Errors
    /// Returns `UnknownNode` if no such router exists.
    pub fn node_mut(&mut self, name: &str) -> Result<&mut Node> {
        self.nodes
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownNode {
                name: name.to_string(),
            })
    }

    /// All router names in iteration (name) order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// Routers in iteration (name) order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True once every router finished a round unchanged. Vacuously
    /// true for an empty topology.
    #[must_use]
    pub fn all_converged(&self) -> bool {
        self.nodes.values().all(|n| n.converged)
    }
}
