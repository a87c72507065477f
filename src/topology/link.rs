// src/topology/link.rs
//! The link mutator: symmetric create/update/remove of direct links.

use super::{Node, Topology};
use crate::cost::Cost;
use crate::error::Result;

/// One link event, as parsed from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkChange {
    /// Create the link or overwrite its cost.
    Set(u32),
    /// Remove the link (input cost `-1`).
    Remove,
}

impl Topology {
    /// Applies a link event to both endpoints.
    ///
    /// Each direction only touches its own node's state, so the order
    /// of the two halves does not matter. Both endpoints are checked
    /// before either is mutated: an unknown endpoint leaves the
    /// topology untouched.
    ///
    /// # Errors
    /// Returns `UnknownNode` if either endpoint is not registered.
    pub fn apply_link(&mut self, source: &str, dest: &str, change: LinkChange) -> Result<()> {
        self.node(source)?;
        self.node(dest)?;
        apply_one(self.node_mut(source)?, dest, change);
        apply_one(self.node_mut(dest)?, source, change);
        Ok(())
    }
}

/// One directed half of a link event.
///
/// Removing an existing link clears its whole via-column to `Unset`:
/// the direct component collapses everywhere, and transitive costs are
/// corrected on later rounds rather than immediately. Removing an
/// absent link is a no-op. A new link seeds its column `Infinite`
/// before writing the direct cost on the diagonal.
fn apply_one(node: &mut Node, dest: &str, change: LinkChange) {
    match change {
        LinkChange::Remove => {
            if node.links.remove(dest).is_some() {
                set_column(node, dest, Cost::Unset);
            }
        }
        LinkChange::Set(cost) if node.links.contains_key(dest) => {
            node.links.insert(dest.to_string(), cost);
            set_diagonal(node, dest, cost);
        }
        LinkChange::Set(cost) => {
            node.links.insert(dest.to_string(), cost);
            set_column(node, dest, Cost::Infinite);
            set_diagonal(node, dest, cost);
        }
    }
}

fn set_column(node: &mut Node, via: &str, value: Cost) {
    for row in node.table.values_mut() {
        row.insert(via.to_string(), value);
    }
}

fn set_diagonal(node: &mut Node, dest: &str, cost: u32) {
    if let Some(row) = node.table.get_mut(dest) {
        row.insert(dest.to_string(), Cost::Finite(cost));
    }
}
