//! Project persistence: save and load digitizer projects as JSON.
//!
//! This module provides serializable mirror types so the on-disk schema
//! stays independent of the in-memory store; decoded color channels are
//! re-derived on load. Calibration anchors are session state tied to the
//! displayed image and are not part of the document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::axes::AxisRange;
use crate::data::datasets::{Datasets, MAX_DATASETS};
use crate::data::project::Project;

/// Serializable version of one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSerde {
    pub name: String,
    pub color: String,
    pub points: Vec<[f64; 2]>,
}

/// The project document.
///
/// Any number of datasets parse; applying to a project keeps the first
/// [`MAX_DATASETS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSerde {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_log: bool,
    pub y_log: bool,
    pub datasets: Vec<DatasetSerde>,
}

impl From<&Project> for ProjectSerde {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            xlabel: p.xlabel.clone(),
            ylabel: p.ylabel.clone(),
            x_min: p.axes.x_min,
            x_max: p.axes.x_max,
            y_min: p.axes.y_min,
            y_max: p.axes.y_max,
            x_log: p.axes.x_log,
            y_log: p.axes.y_log,
            datasets: p
                .datasets
                .iter()
                .map(|ds| DatasetSerde {
                    name: ds.name.clone(),
                    color: ds.color().to_string(),
                    points: ds.points.clone(),
                })
                .collect(),
        }
    }
}

impl ProjectSerde {
    /// Apply stored state to a project.
    ///
    /// Returns how many datasets were applied; less than the stored count
    /// when the document carries more than [`MAX_DATASETS`].
    pub fn apply_to(self, project: &mut Project) -> usize {
        project.title = self.title;
        project.xlabel = self.xlabel;
        project.ylabel = self.ylabel;
        project.axes = AxisRange {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
            x_log: self.x_log,
            y_log: self.y_log,
        };
        let applied = self.datasets.len().min(MAX_DATASETS);
        project.datasets = Datasets::default();
        for (i, ds) in self.datasets.into_iter().take(MAX_DATASETS).enumerate() {
            if let Some(slot) = project.datasets.slot_mut(i) {
                slot.name = ds.name;
                slot.set_color(&ds.color);
                slot.points = ds.points;
            }
        }
        applied
    }
}

/// Serialize a project as pretty JSON.
pub fn project_to_json(project: &Project) -> Result<String, String> {
    serde_json::to_string_pretty(&ProjectSerde::from(project)).map_err(|e| e.to_string())
}

/// Deserialize a project document from JSON.
pub fn project_from_json(json: &str) -> Result<ProjectSerde, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Save a project to a JSON file at the given path.
pub fn save_project_to_path(project: &Project, path: &Path) -> Result<(), String> {
    let txt = project_to_json(project)?;
    std::fs::write(path, txt).map_err(|e| e.to_string())
}

/// Load a project document from a JSON file at the given path.
pub fn load_project_from_path(path: &Path) -> Result<ProjectSerde, String> {
    let txt = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    project_from_json(&txt)
}
