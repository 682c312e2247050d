//! Domain types for position descriptions
//!
//! Core domain types: Position, Workplan.
//!
//! A workplan's mapping order determines the angular position of each axis
//! on the radar chart, so workplans preserve insertion order.

mod position;
mod workplan;

pub use position::{Position, RawPosition};
pub use workplan::{WORKPLAN_TOTAL, Workplan, validate};
