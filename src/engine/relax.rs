// src/engine/relax.rs
//! One synchronous Bellman-Ford relaxation step.

use crate::cost::Cost;
use crate::topology::{get_min, Node, Topology};

/// The cells of one node that a relaxation pass wants to rewrite.
///
/// Computed against the previous-round snapshots and applied
/// afterwards, so no node ever observes another node's in-progress
/// table within a round.
#[derive(Debug, Default)]
pub struct NodeUpdate {
    pub cells: Vec<CellUpdate>,
}

#[derive(Debug)]
pub struct CellUpdate {
    pub dest: String,
    pub via: String,
    pub value: Cost,
}

/// Computes one relaxation pass for `node`.
///
/// For every destination row `y` and via-candidate `v` (`v != y`, cell
/// not `Unset`): D_x(y) via v = c(x,v) + min over v's previous-round
/// row for y, where c(x,v) is x's own diagonal cell for v. A via whose
/// previous-round row has no viable entry yields `Infinite`. Only cells
/// whose value actually changes are reported, so an empty change set is
/// exactly the node's converged state for the round.
#[must_use]
pub fn relax_node(topology: &Topology, node: &Node) -> NodeUpdate {
    let mut update = NodeUpdate::default();
    for (dest, row) in &node.table {
        for (via, &cell) in row {
            if via == dest || cell.is_unset() {
                continue;
            }
            let value = relax_cell(topology, node, dest, via);
            if value != cell {
                update.cells.push(CellUpdate {
                    dest: dest.clone(),
                    via: via.clone(),
                    value,
                });
            }
        }
    }
    update
}

fn relax_cell(topology: &Topology, node: &Node, dest: &str, via: &str) -> Cost {
    // Invariant: a non-Unset cell has a finite diagonal for its via.
    let Some(direct) = node.direct_cost(via) else {
        return Cost::Infinite;
    };
    let advertised = topology
        .node(via)
        .ok()
        .and_then(|v| v.table_prev.get(dest))
        .and_then(get_min);
    match advertised {
        Some((_, m)) => Cost::Finite(direct.saturating_add(m)),
        None => Cost::Infinite,
    }
}

/// Applies a computed update and refreshes the node's converged flag.
pub fn apply_update(node: &mut Node, update: &NodeUpdate) {
    node.converged = update.cells.is_empty();
    for cell in &update.cells {
        if let Some(row) = node.table.get_mut(&cell.dest) {
            row.insert(cell.via.clone(), cell.value);
        }
    }
}
