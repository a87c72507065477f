// tests/unit_relax.rs
//! Relaxation step and convergence driver semantics.

use std::collections::BTreeMap;
use std::io;

use dvroute_core::cost::Cost;
use dvroute_core::engine::relax::{apply_update, relax_node};
use dvroute_core::engine::Driver;
use dvroute_core::topology::{get_min, LinkChange, Row, Topology};

fn chain_abc() -> Topology {
    let mut t = Topology::new();
    for n in ["A", "B", "C"] {
        t.create_node(n).unwrap();
    }
    t.apply_link("A", "B", LinkChange::Set(1)).unwrap();
    t.apply_link("B", "C", LinkChange::Set(1)).unwrap();
    let names = t.names();
    for name in &names {
        t.node_mut(name).unwrap().init_table(&names);
    }
    t
}

fn snapshot_all(t: &mut Topology) {
    for name in t.names() {
        t.node_mut(&name).unwrap().snapshot();
    }
}

fn quiet_driver(topology: Topology) -> Driver {
    let mut driver = Driver::new(topology);
    driver.set_render_tables(false);
    driver.set_render_routes(false);
    driver
}

#[test]
fn test_get_min_ignores_sentinels() {
    let row: Row = BTreeMap::from([
        ("A".to_string(), Cost::Unset),
        ("B".to_string(), Cost::Infinite),
        ("C".to_string(), Cost::Finite(5)),
    ]);
    assert_eq!(get_min(&row), Some(("C", 5)));

    let dead: Row = BTreeMap::from([
        ("A".to_string(), Cost::Unset),
        ("B".to_string(), Cost::Infinite),
    ]);
    assert_eq!(get_min(&dead), None);
}

#[test]
fn test_get_min_tie_breaks_on_first_name() {
    let row: Row = BTreeMap::from([
        ("X".to_string(), Cost::Finite(2)),
        ("M".to_string(), Cost::Finite(2)),
        ("Z".to_string(), Cost::Finite(3)),
    ]);
    assert_eq!(get_min(&row), Some(("M", 2)));
}

#[test]
fn test_first_round_learns_two_hop_route() {
    let mut t = chain_abc();
    snapshot_all(&mut t);

    let update = relax_node(&t, t.node("A").unwrap());
    apply_update(t.node_mut("A").unwrap(), &update);

    let a = t.node("A").unwrap();
    assert_eq!(a.table["C"]["B"], Cost::Finite(2));
    assert!(!a.converged);
}

#[test]
fn test_unresolved_infinite_cell_does_not_unconverge() {
    let mut t = chain_abc();
    snapshot_all(&mut t);

    // B's route to A via C stays Infinite: C advertises nothing for A
    // yet. An unchanged cell must not clear the converged flag, or
    // disconnected topologies would never settle.
    let update = relax_node(&t, t.node("B").unwrap());
    assert!(update.cells.is_empty());
}

#[test]
fn test_relax_skips_unset_cells() {
    let mut t = chain_abc();
    snapshot_all(&mut t);

    // C is not A's neighbor, so the via-C column carries no information
    // and is never recomputed.
    let update = relax_node(&t, t.node("A").unwrap());
    assert!(update.cells.iter().all(|c| c.via != "C"));
}

#[test]
fn test_chain_converges_to_shortest_paths() {
    let mut driver = quiet_driver(chain_abc());
    driver.run_initial(&mut io::sink()).unwrap();

    let t = driver.topology();
    assert_eq!(get_min(&t.node("A").unwrap().table["B"]), Some(("B", 1)));
    assert_eq!(get_min(&t.node("A").unwrap().table["C"]), Some(("B", 2)));
    assert_eq!(get_min(&t.node("B").unwrap().table["C"]), Some(("C", 1)));
    assert_eq!(get_min(&t.node("C").unwrap().table["A"]), Some(("B", 2)));
    assert_eq!(driver.round(), 3);
}

#[test]
fn test_equal_cost_routes_prefer_first_name() {
    let mut t = Topology::new();
    for n in ["A", "B", "C", "D"] {
        t.create_node(n).unwrap();
    }
    t.apply_link("A", "B", LinkChange::Set(1)).unwrap();
    t.apply_link("A", "C", LinkChange::Set(1)).unwrap();
    t.apply_link("B", "D", LinkChange::Set(1)).unwrap();
    t.apply_link("C", "D", LinkChange::Set(1)).unwrap();
    let names = t.names();
    for name in &names {
        t.node_mut(name).unwrap().init_table(&names);
    }

    let mut driver = quiet_driver(t);
    driver.run_initial(&mut io::sink()).unwrap();

    // D is reachable at cost 2 via both B and C; B wins in name order.
    let a = driver.topology().node("A").unwrap();
    assert_eq!(get_min(&a.table["D"]), Some(("B", 2)));
}

#[test]
fn test_disconnected_node_converges() {
    let mut t = Topology::new();
    for n in ["A", "B", "D"] {
        t.create_node(n).unwrap();
    }
    t.apply_link("A", "B", LinkChange::Set(1)).unwrap();
    let names = t.names();
    for name in &names {
        t.node_mut(name).unwrap().init_table(&names);
    }

    let mut driver = quiet_driver(t);
    driver.run_initial(&mut io::sink()).unwrap();

    let t = driver.topology();
    assert!(t.all_converged());
    assert_eq!(get_min(&t.node("A").unwrap().table["D"]), None);
    assert_eq!(get_min(&t.node("D").unwrap().table["A"]), None);
}

#[test]
fn test_reapplied_link_cost_is_idempotent() {
    let mut driver = quiet_driver(chain_abc());
    driver.run_initial(&mut io::sink()).unwrap();
    let rounds = driver.round();

    driver
        .topology_mut()
        .apply_link("A", "B", LinkChange::Set(1))
        .unwrap();
    driver.run_update(&mut io::sink()).unwrap();

    // Nothing changed, so re-convergence is immediate.
    assert_eq!(driver.round(), rounds);
    let a = driver.topology().node("A").unwrap();
    assert_eq!(get_min(&a.table["C"]), Some(("B", 2)));
}

#[test]
fn test_removed_link_drives_routes_unreachable() {
    let mut t = Topology::new();
    for n in ["A", "B"] {
        t.create_node(n).unwrap();
    }
    t.apply_link("A", "B", LinkChange::Set(1)).unwrap();
    let names = t.names();
    for name in &names {
        t.node_mut(name).unwrap().init_table(&names);
    }

    let mut driver = quiet_driver(t);
    driver.run_initial(&mut io::sink()).unwrap();
    assert_eq!(
        get_min(&driver.topology().node("A").unwrap().table["B"]),
        Some(("B", 1))
    );

    driver
        .topology_mut()
        .apply_link("A", "B", LinkChange::Remove)
        .unwrap();
    driver.run_update(&mut io::sink()).unwrap();

    let t = driver.topology();
    assert!(t.all_converged());
    assert_eq!(get_min(&t.node("A").unwrap().table["B"]), None);
    assert_eq!(get_min(&t.node("B").unwrap().table["A"]), None);
}
