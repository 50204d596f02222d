pub mod axes;
pub mod calibration;
pub mod canvas;
pub mod datasets;
pub mod export;
pub mod point_select;
pub mod project;
pub mod trace;
pub mod transform;
