// src/topology/node.rs
//! Per-router state: direct links and the distance table.

use std::collections::BTreeMap;

use crate::cost::Cost;

/// One distance-table row: via-candidate name -> believed cost.
pub type Row = BTreeMap<String, Cost>;

/// A full distance table: destination name -> row. The `[d][d]`
/// diagonal cell is the "directly via d" component.
pub type Table = BTreeMap<String, Row>;

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Cleared whenever a round changes any cell of `table`.
    pub converged: bool,
    /// Direct links: neighbor name -> cost. Symmetric across the
    /// topology; the link mutator always updates both endpoints.
    pub links: BTreeMap<String, u32>,
    pub table: Table,
    /// Snapshot of `table` taken at the start of the current round; the
    /// only state other routers may read during relaxation.
    pub table_prev: Table,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            converged: false,
            links: BTreeMap::new(),
            table: Table::new(),
            table_prev: Table::new(),
        }
    }

    /// (Re)derives the full table shape from the current links.
    ///
    /// Every other router gets a row, and every row gets one column per
    /// other router, so missing connectivity is always a sentinel value
    /// rather than a missing entry. Columns default to `Unset`; a
    /// neighbor's column holds the direct cost on its own row and
    /// `Infinite` on every other row.
    pub fn init_table(&mut self, all_names: &[String]) {
        self.table.clear();
        for dest in all_names.iter().filter(|n| *n != &self.name) {
            let mut row = Row::new();
            for via in all_names.iter().filter(|n| *n != &self.name) {
                row.insert(via.clone(), Cost::Unset);
            }
            for (neighbor, &cost) in &self.links {
                let cell = if dest == neighbor {
                    Cost::Finite(cost)
                } else {
                    Cost::Infinite
                };
                row.insert(neighbor.clone(), cell);
            }
            self.table.insert(dest.clone(), row);
        }
    }

    /// Direct (diagonal) cost to `via`, when known.
    #[must_use]
    pub fn direct_cost(&self, via: &str) -> Option<u32> {
        self.table
            .get(via)
            .and_then(|row| row.get(via))
            .and_then(|c| c.finite())
    }

    /// Backs up `table` as the read source for the coming round.
    pub fn snapshot(&mut self) {
        self.table_prev = self.table.clone();
    }
}

/// Finds the cheapest viable entry of a row: the first strictly
/// smallest `Finite` cell in name order. `Unset` and `Infinite` cells
/// are never candidates ("unknown" is not "cost zero").
///
/// Shared between relaxation and display so both use one tie-break.
#[must_use]
pub fn get_min(row: &Row) -> Option<(&str, u32)> {
    let mut best: Option<(&str, u32)> = None;
    for (via, cell) in row {
        let Some(cost) = cell.finite() else {
            continue;
        };
        if best.map_or(true, |(_, b)| cost < b) {
            best = Some((via, cost));
        }
    }
    best
}
