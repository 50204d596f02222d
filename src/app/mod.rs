//! The DigiPlot application shell: window, panels and canvas interaction.

mod canvas_ui;
mod menu_ui;
mod side_ui;

use eframe::egui;
use image::RgbImage;

use crate::color::rgb_to_color32;
use crate::data::axes::AxisRange;
use crate::data::calibration::CalibrationSession;
use crate::data::canvas::ImagePlacement;
use crate::data::datasets::PointRef;
use crate::data::project::Project;

/// Canvas pixel radius within which a click selects an existing point.
pub(crate) const SELECT_RADIUS: f64 = 8.0;

/// Widest canvas the image is scaled down to fit at load time.
const MAX_CANVAS_WIDTH: f64 = 1400.0;

/// Text entry state for the axis bounds, parsed on "Apply calibration".
#[derive(Default)]
pub(crate) struct BoundsEntry {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
    pub x_log: bool,
    pub y_log: bool,
}

impl BoundsEntry {
    /// Mirror an axis range back into the entry fields, e.g. after loading
    /// a project.
    pub(crate) fn from_axes(axes: &AxisRange) -> Self {
        Self {
            x_min: axes.x_min.to_string(),
            x_max: axes.x_max.to_string(),
            y_min: axes.y_min.to_string(),
            y_max: axes.y_max.to_string(),
            x_log: axes.x_log,
            y_log: axes.y_log,
        }
    }
}

/// The digitizer application state: one project plus the transient
/// interaction state (loaded image, calibration session, drag target).
pub struct DigiPlotApp {
    pub(crate) project: Project,
    pub(crate) session: CalibrationSession,
    pub(crate) image: Option<RgbImage>,
    pub(crate) texture: Option<egui::TextureHandle>,
    pub(crate) placement: ImagePlacement,
    pub(crate) drag: Option<PointRef>,
    pub(crate) bounds_entry: BoundsEntry,
    pub(crate) show_preview: bool,
    pub(crate) status: String,
}

impl Default for DigiPlotApp {
    fn default() -> Self {
        Self {
            project: Project::default(),
            session: CalibrationSession::default(),
            image: None,
            texture: None,
            placement: ImagePlacement::default(),
            drag: None,
            bounds_entry: BoundsEntry::default(),
            show_preview: false,
            status: "Open an image to start digitizing".to_string(),
        }
    }
}

impl DigiPlotApp {
    /// Install a freshly decoded image: upload the display texture, fix the
    /// placement, and drop state that referred to the previous image.
    pub(crate) fn install_image(&mut self, ctx: &egui::Context, img: RgbImage) {
        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgb(size, img.as_raw());
        self.texture =
            Some(ctx.load_texture("plot-image", color_image, egui::TextureOptions::LINEAR));
        let scale = (MAX_CANVAS_WIDTH / img.width() as f64).min(1.0);
        self.placement = ImagePlacement { offset: [0.0, 0.0], scale };
        self.image = Some(img);
        self.drag = None;
        self.session = CalibrationSession::default();
        // Anchors clicked on the previous image are meaningless now.
        self.project.clear_anchors();
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} points", self.project.datasets.total_points()));
                });
            });
        });
    }

    fn render_preview_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("preview_panel")
            .resizable(true)
            .min_height(120.0)
            .default_height(240.0)
            .show(ctx, |ui| {
                let plot = egui_plot::Plot::new("data_preview")
                    .legend(egui_plot::Legend::default())
                    .x_axis_label(self.project.xlabel.clone())
                    .y_axis_label(self.project.ylabel.clone());
                plot.show(ui, |plot_ui| {
                    for ds in self.project.datasets.iter() {
                        if ds.points.is_empty() {
                            continue;
                        }
                        plot_ui.points(
                            egui_plot::Points::new(ds.name.clone(), ds.points.clone())
                                .radius(2.5)
                                .color(rgb_to_color32(ds.color_rgb())),
                        );
                    }
                });
            });
    }
}

impl eframe::App for DigiPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_status_bar(ctx);
        if self.show_preview {
            self.render_preview_panel(ctx);
        }
        self.render_canvas(ctx);
    }
}

/// Launch the digitizer in a native window. Blocks until the window closes.
pub fn run() -> eframe::Result<()> {
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]);
    eframe::run_native(
        "DigiPlot",
        native_options,
        Box::new(|_cc| Ok(Box::new(DigiPlotApp::default()))),
    )
}
