//! Position document loading
//!
//! Parses YAML position documents into validated [`Position`] records. A
//! document maps an entry key to the core elements of each position:
//!
//! ```yaml
//! auto_mechanic:
//!   title: Auto Mechanic II
//!   summary: Maintains the motor pool.
//!   workplan:
//!     repair: 40
//!     inspection: 35
//!     paperwork: 25
//! ```
//!
//! Workplan validation happens during conversion, so a document with a
//! malformed breakdown fails here with the underlying [`WorkplanError`]
//! preserved in the error chain.
//!
//! [`WorkplanError`]: crate::error::WorkplanError

use eyre::{Context, Result, eyre};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::{Position, RawPosition};

/// Parse a YAML position document into its raw entries, document order
/// preserved
pub fn read_position_file<P: AsRef<Path>>(path: P) -> Result<IndexMap<String, RawPosition>> {
    let content =
        fs::read_to_string(&path).context(format!("Failed to read position file {}", path.as_ref().display()))?;

    let data: IndexMap<String, RawPosition> =
        serde_yaml::from_str(&content).context("Failed to parse position file")?;

    debug!(entries = data.len(), "parsed position file");
    Ok(data)
}

/// Load and validate every position in a document
pub fn load_positions<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    let data = read_position_file(&path)?;

    let mut positions = Vec::with_capacity(data.len());
    for (key, raw) in data {
        let position = Position::from_raw(raw).context(format!("Invalid workplan for position entry '{key}'"))?;
        positions.push(position);
    }

    info!(count = positions.len(), "loaded positions");
    Ok(positions)
}

/// Load a single-position document; with multiple entries the last wins
pub fn load_position<P: AsRef<Path>>(path: P) -> Result<Position> {
    load_positions(&path)?
        .pop()
        .ok_or_else(|| eyre!("No position entries in {}", path.as_ref().display()))
}

/// Entry keys of every position in a document
pub fn position_keys<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = read_position_file(path)?;
    Ok(data.into_keys().collect())
}

/// Job titles of every position in a document, unvalidated
pub fn position_titles<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = read_position_file(path)?;
    Ok(data.into_values().map(|raw| raw.title).collect())
}
