// src/cli/mod.rs
//! CLI entry points.

pub mod args;

pub use args::{Cli, OutputFormat};

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::engine::Driver;
use crate::input::{self, Scenario};
use crate::report::json;
use crate::topology::Topology;

/// Runs a parsed command line against stdin/stdout.
///
/// # Errors
/// Returns error on unreadable input, malformed scenario lines, or
/// references to undeclared routers.
pub fn run(cli: &Cli) -> Result<()> {
    let scenario = read_scenario(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rounds = simulate(&scenario, cli, &mut out)?;
    eprintln!("{}", format!("converged after {rounds} rounds").dimmed());
    Ok(())
}

fn read_scenario(cli: &Cli) -> Result<Scenario> {
    match &cli.file {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            input::read_scenario(BufReader::new(file))
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        None => input::read_scenario(io::stdin().lock()).context("failed to parse stdin"),
    }
}

/// Builds the topology from a scenario and drives it to convergence,
/// writing reports to `out`. Returns the total round count. Split from
/// `run` so tests can capture output.
///
/// # Errors
/// Returns error on undeclared router references or failed writes.
pub fn simulate<W: Write>(scenario: &Scenario, cli: &Cli, out: &mut W) -> Result<u32> {
    let mut topology = Topology::new();
    for name in &scenario.nodes {
        topology.create_node(name)?;
    }
    for link in &scenario.links {
        topology.apply_link(&link.source, &link.dest, link.change)?;
    }

    let mut driver = Driver::new(topology);
    let text = cli.format == OutputFormat::Text;
    driver.set_render_tables(text && !cli.quiet);
    driver.set_render_routes(text);

    driver.run_initial(out)?;
    if scenario.has_updates() {
        for link in &scenario.updates {
            driver
                .topology_mut()
                .apply_link(&link.source, &link.dest, link.change)?;
        }
        driver.run_update(out)?;
    }

    if cli.format == OutputFormat::Json {
        json::write_routes(out, driver.topology())?;
    }
    Ok(driver.round())
}
