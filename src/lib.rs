//! DigiPlot crate root: re-exports and module wiring.
//!
//! DigiPlot turns a raster image of a plotted graph into numeric datasets:
//! load a chart image, calibrate its axes with four clicks plus numeric
//! bounds, then pick points by hand or auto-trace a curve by color, and
//! export the result as JSON or CSV.
//!
//! The crate splits into cohesive modules:
//! - `color`: hex parsing, color distance and the default palette
//! - `data`: the digitizing core (axes, calibration, transforms, datasets,
//!   nearest-point lookup, auto-trace, CSV export)
//! - `persistence`: JSON project documents
//! - `app`: the egui/eframe application shell

pub mod app;
pub mod color;
pub mod data;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run, DigiPlotApp};
pub use color::{color_distance, hex_to_rgb, DEFAULT_PALETTE};
pub use data::axes::AxisRange;
pub use data::calibration::{CalibrationAnchors, CalibrationError, CalibrationSession};
pub use data::canvas::ImagePlacement;
pub use data::datasets::{Dataset, Datasets, PointRef, MAX_DATASETS};
pub use data::project::Project;
pub use data::trace::auto_trace;
