//! Positions - standardized position description workplans
//!
//! Validates workplans (task area to percentage-of-time mappings) for job
//! positions and turns them into declarative radar chart specifications for
//! the position description pipeline. Document assembly, publishing, and
//! storage distribution are external collaborators; this crate owns the
//! semantic core and the data it hands them.
//!
//! # Architecture
//!
//! ```text
//! position YAML ──> loader ──> Position { workplan: Workplan }
//!                                  │  validate: mapping, integer values,
//!                                  │            values total 100
//!                                  ▼
//!                              Figure (radar chart specification)
//!                                  │
//!                                  ▼
//!                              export (JSON for the renderer)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use positions::{Config, export, loader};
//!
//! let config = Config::load(None)?;
//! let position = loader::load_position("data/auto_mechanic.yaml")?;
//! let figure = position.chart()?;
//! export::save_figure(&figure, &position.title, &config.storage.charts_dir)?;
//! ```

pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod loader;

pub use chart::{FILL_COLOR, Figure, position_chart};
pub use config::Config;
pub use domain::{Position, RawPosition, WORKPLAN_TOTAL, Workplan, validate};
pub use error::WorkplanError;
pub use export::save_figure;
pub use loader::{load_position, load_positions, position_keys, position_titles};
