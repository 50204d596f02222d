//! Dataset storage: six fixed slots, one active.

use crate::color::{hex_to_rgb, DEFAULT_PALETTE};

/// Number of dataset slots; fixed for the lifetime of a project.
pub const MAX_DATASETS: usize = 6;

/// A named, colored, ordered collection of digitized points.
///
/// The hex color and its decoded channels are kept in lockstep through
/// [`Dataset::set_color`]; there is no state where they disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    color: String,
    color_rgb: [f64; 3],
    pub points: Vec<[f64; 2]>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, color: &str) -> Self {
        Self {
            name: name.into(),
            color: color.to_string(),
            color_rgb: hex_to_rgb(color),
            points: Vec::new(),
        }
    }

    /// The dataset color as a hex string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The dataset color decoded to RGB channels in `[0, 1]`.
    pub fn color_rgb(&self) -> [f64; 3] {
        self.color_rgb
    }

    /// Change the color; the decoded channels are re-derived in the same step.
    pub fn set_color(&mut self, hex: &str) {
        self.color = hex.to_string();
        self.color_rgb = hex_to_rgb(hex);
    }
}

/// Reference to one point in one dataset, as returned by the nearest-point
/// query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRef {
    pub dataset: usize,
    pub point: usize,
}

/// The six dataset slots plus the active-slot index.
#[derive(Debug, Clone)]
pub struct Datasets {
    slots: [Dataset; MAX_DATASETS],
    active: usize,
}

impl Default for Datasets {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|i| {
                Dataset::new(format!("Dataset {}", i + 1), DEFAULT_PALETTE[i])
            }),
            active: 0,
        }
    }
}

impl Datasets {
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Dataset {
        &self.slots[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Dataset {
        &mut self.slots[self.active]
    }

    /// Switch the active slot. Out-of-range indices are ignored.
    pub fn select_active(&mut self, index: usize) {
        if index < MAX_DATASETS {
            self.active = index;
        }
    }

    pub fn rename_active(&mut self, name: impl Into<String>) {
        self.active_mut().name = name.into();
    }

    pub fn recolor_active(&mut self, hex: &str) {
        self.active_mut().set_color(hex);
    }

    pub fn get(&self, index: usize) -> Option<&Dataset> {
        self.slots.get(index)
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut Dataset> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.slots.iter()
    }

    /// Append a point. No deduplication, no reordering by x.
    pub fn add_point(&mut self, dataset: usize, point: [f64; 2]) {
        if let Some(ds) = self.slots.get_mut(dataset) {
            ds.points.push(point);
        }
    }

    /// Move one point by position. Stale indices are ignored.
    pub fn move_point(&mut self, dataset: usize, point: usize, new_point: [f64; 2]) {
        if let Some(p) = self.slots.get_mut(dataset).and_then(|ds| ds.points.get_mut(point)) {
            *p = new_point;
        }
    }

    /// Delete one point by position. Stale indices are ignored.
    pub fn delete_point(&mut self, dataset: usize, point: usize) {
        if let Some(ds) = self.slots.get_mut(dataset) {
            if point < ds.points.len() {
                ds.points.remove(point);
            }
        }
    }

    pub fn delete_by_selection(&mut self, selection: PointRef) {
        self.delete_point(selection.dataset, selection.point);
    }

    /// Replace the active dataset's points, e.g. with an auto-trace result.
    pub fn replace_active_points(&mut self, points: Vec<[f64; 2]>) {
        self.active_mut().points = points;
    }

    /// Total number of points across all slots.
    pub fn total_points(&self) -> usize {
        self.slots.iter().map(|ds| ds.points.len()).sum()
    }
}
