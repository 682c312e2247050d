//! Chart specification export
//!
//! Writes figure specifications as JSON documents into the charts directory
//! so the rendering collaborator can pick them up. Remote publishing is a
//! separate concern and lives outside this crate.

use chrono::Local;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::chart::Figure;

/// Compose the export filename for a position title, e.g.
/// `Auto Mechanic II 2026-08-05.json`
pub fn chart_filename(title: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d");
    format!("{title} {timestamp}.json")
}

/// Write the figure for `title` into `charts_dir`, creating the directory
/// if needed, and return the written path
pub fn save_figure(figure: &Figure, title: &str, charts_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(charts_dir)
        .context(format!("Failed to create charts directory {}", charts_dir.display()))?;

    let path = charts_dir.join(chart_filename(title));

    let spec = serde_json::to_string_pretty(figure).context("Failed to serialize chart specification")?;
    fs::write(&path, spec).context(format!("Failed to write chart specification {}", path.display()))?;

    info!(path = %path.display(), "saved chart specification");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::position_chart;
    use tempfile::TempDir;

    #[test]
    fn test_chart_filename_carries_title_and_date() {
        let name = chart_filename("Auto Mechanic II");
        assert!(name.starts_with("Auto Mechanic II "));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_save_figure_round_trips() {
        let workplan = serde_yaml::from_str("{repair: 40, inspection: 35, paperwork: 25}").unwrap();
        let figure = position_chart("Auto Mechanic II", &workplan).unwrap();

        let dir = TempDir::new().expect("Failed to create temp dir");
        let charts_dir = dir.path().join("charts");
        let path = save_figure(&figure, "Auto Mechanic II", &charts_dir).unwrap();

        assert!(path.exists());

        let restored: Figure = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, figure);
    }
}
