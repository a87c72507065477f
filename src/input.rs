// src/input.rs
//! Line-oriented scenario parsing.
//!
//! Three blank-line-delimited sections: router names, initial links,
//! and an optional update batch. Link lines are `<source> <dest>
//! <cost>` with `-1` meaning "remove this link". Parsing is fail-fast:
//! the first malformed line aborts its section.

use std::io::BufRead;

use crate::error::{Result, SimError};
use crate::topology::LinkChange;

/// One parsed link line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    pub source: String,
    pub dest: String,
    pub change: LinkChange,
}

/// A full parsed scenario.
#[derive(Debug, Default)]
pub struct Scenario {
    pub nodes: Vec<String>,
    pub links: Vec<LinkSpec>,
    pub updates: Vec<LinkSpec>,
}

impl Scenario {
    /// True when an update batch was present; it triggers a second
    /// convergence pass.
    #[must_use]
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }
}

/// Reads a scenario from line-oriented text. Content after the update
/// section is ignored.
///
/// # Errors
/// Returns `MalformedLine` for a bad link line, or the underlying I/O
/// error from the reader.
pub fn read_scenario<R: BufRead>(reader: R) -> Result<Scenario> {
    let mut lines = reader.lines();
    let mut scenario = Scenario {
        nodes: next_section(&mut lines)?,
        ..Scenario::default()
    };
    for line in next_section(&mut lines)? {
        scenario.links.push(parse_link(&line)?);
    }
    for line in next_section(&mut lines)? {
        scenario.updates.push(parse_link(&line)?);
    }
    Ok(scenario)
}

/// Collects trimmed lines up to the next blank line or end of input.
fn next_section<R: BufRead>(lines: &mut std::io::Lines<R>) -> Result<Vec<String>> {
    let mut section = Vec::new();
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        section.push(trimmed.to_string());
    }
    Ok(section)
}

/// Parses one `<source> <dest> <cost>` link line. Costs must be `-1`
/// (remove) or a positive integer; self-links and extra fields are
/// rejected.
///
/// # Errors
/// Returns `MalformedLine` on any violation.
pub fn parse_link(line: &str) -> Result<LinkSpec> {
    let malformed = || SimError::MalformedLine {
        line: line.to_string(),
    };

    let mut fields = line.split_whitespace();
    let source = fields.next().ok_or_else(malformed)?;
    let dest = fields.next().ok_or_else(malformed)?;
    let cost: i64 = fields
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    if fields.next().is_some() || source == dest {
        return Err(malformed());
    }

    let change = match cost {
        -1 => LinkChange::Remove,
        c if c >= 1 => LinkChange::Set(u32::try_from(c).map_err(|_| malformed())?),
        _ => return Err(malformed()),
    };
    Ok(LinkSpec {
        source: source.to_string(),
        dest: dest.to_string(),
        change,
    })
}
