//! Position domain type
//!
//! The core common elements of a work position to be advertised and
//! recruited for: title, narrative sections, and the validated workplan.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::workplan::Workplan;
use crate::chart::Figure;
use crate::error::WorkplanError;

/// Position entry as it appears in a YAML position document
///
/// The workplan stays raw YAML here; it is validated when the entry is
/// converted into a [`Position`], so a malformed breakdown is caught at the
/// deserialization boundary rather than deep inside chart assembly.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPosition {
    /// Job title, e.g. "Auto Mechanic II"
    pub title: String,

    /// General purpose of the position
    #[serde(default)]
    pub summary: String,

    /// Professional outcomes and expectations
    #[serde(default)]
    pub expectations: String,

    /// Scope of the position within the organization
    #[serde(default)]
    pub scope: String,

    /// Activities and deliverables
    #[serde(default)]
    pub activities: String,

    /// Task area to percentage breakdown, not yet validated
    pub workplan: Value,
}

/// A validated position record
#[derive(Debug, Clone, Serialize)]
pub struct Position {
    /// Job title, e.g. "Auto Mechanic II"
    pub title: String,

    /// General purpose of the position
    pub summary: String,

    /// Professional outcomes and expectations
    pub expectations: String,

    /// Scope of the position within the organization
    pub scope: String,

    /// Activities and deliverables
    pub activities: String,

    /// Validated time breakdown across task areas
    pub workplan: Workplan,
}

impl Position {
    /// Validate a raw entry into a position record
    pub fn from_raw(raw: RawPosition) -> Result<Self, WorkplanError> {
        let workplan = Workplan::from_value(&raw.workplan)?;

        Ok(Self {
            title: raw.title,
            summary: raw.summary,
            expectations: raw.expectations,
            scope: raw.scope,
            activities: raw.activities,
            workplan,
        })
    }

    /// Radar chart specification for this position's workplan
    pub fn chart(&self) -> Result<Figure, WorkplanError> {
        Figure::radar(&self.title, &self.workplan)
    }
}
