//! Right side panel: dataset slots, axis calibration and auto-trace.

use eframe::egui;

use super::DigiPlotApp;
use crate::color::{default_palette, rgb_to_color32, rgb_to_hex, DEFAULT_PALETTE};
use crate::data::axes::{parse_bound, AxisRange};
use crate::data::datasets::MAX_DATASETS;
use crate::data::trace::auto_trace;

impl DigiPlotApp {
    pub(super) fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("controls")
            .min_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Project");
                ui.horizontal(|ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut self.project.title);
                });
                ui.horizontal(|ui| {
                    ui.label("X label");
                    ui.text_edit_singleline(&mut self.project.xlabel);
                });
                ui.horizontal(|ui| {
                    ui.label("Y label");
                    ui.text_edit_singleline(&mut self.project.ylabel);
                });

                ui.separator();
                self.render_dataset_controls(ui);
                ui.separator();
                self.render_calibration_controls(ui);
                ui.separator();
                self.render_trace_controls(ui);
            });
    }

    fn render_dataset_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Datasets");
        let active = self.project.datasets.active_index();
        egui::ComboBox::from_id_salt("active_dataset")
            .selected_text(self.project.datasets.active().name.clone())
            .show_ui(ui, |ui| {
                for i in 0..MAX_DATASETS {
                    let (name, count) = {
                        let Some(ds) = self.project.datasets.get(i) else { continue };
                        (ds.name.clone(), ds.points.len())
                    };
                    if ui
                        .selectable_label(i == active, format!("{name} ({count} points)"))
                        .clicked()
                    {
                        self.project.datasets.select_active(i);
                    }
                }
            });

        let mut name = self.project.datasets.active().name.clone();
        ui.horizontal(|ui| {
            ui.label("Name");
            if ui.text_edit_singleline(&mut name).changed() {
                self.project.datasets.rename_active(name.clone());
            }
        });

        ui.horizontal(|ui| {
            ui.label("Color");
            let mut c = rgb_to_color32(self.project.datasets.active().color_rgb());
            if ui.color_edit_button_srgba(&mut c).changed() {
                let rgb = [
                    c.r() as f64 / 255.0,
                    c.g() as f64 / 255.0,
                    c.b() as f64 / 255.0,
                ];
                self.project.datasets.recolor_active(&rgb_to_hex(rgb));
            }
            let mut hex = self.project.datasets.active().color().to_string();
            if ui.text_edit_singleline(&mut hex).changed() {
                self.project.datasets.recolor_active(&hex);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Palette");
            for (i, rgb) in default_palette().iter().enumerate() {
                let (rect, resp) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::click());
                ui.painter().rect_filled(rect, 2.0, rgb_to_color32(*rgb));
                if resp.clicked() {
                    self.project.datasets.recolor_active(DEFAULT_PALETTE[i]);
                }
            }
        });

        if ui.button("Clear points").clicked() {
            self.project.datasets.replace_active_points(Vec::new());
        }
    }

    fn render_calibration_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Calibration");
        let label = if self.session.is_collecting() {
            format!("Calibrating: {} clicks left", self.session.remaining())
        } else {
            "Calibrate (4 clicks)".to_string()
        };
        if ui
            .button(label)
            .on_hover_text("Click X-min, X-max, Y-min, Y-max on the image")
            .clicked()
        {
            match self.session.start(self.image.is_some()) {
                Ok(()) => self.status = "Click the X axis minimum".to_string(),
                Err(e) => self.status = e.to_string(),
            }
        }

        egui::Grid::new("axis_bounds").num_columns(2).show(ui, |ui| {
            ui.label("X min");
            ui.text_edit_singleline(&mut self.bounds_entry.x_min);
            ui.end_row();
            ui.label("X max");
            ui.text_edit_singleline(&mut self.bounds_entry.x_max);
            ui.end_row();
            ui.label("Y min");
            ui.text_edit_singleline(&mut self.bounds_entry.y_min);
            ui.end_row();
            ui.label("Y max");
            ui.text_edit_singleline(&mut self.bounds_entry.y_max);
            ui.end_row();
        });
        ui.checkbox(&mut self.bounds_entry.x_log, "X log scale");
        ui.checkbox(&mut self.bounds_entry.y_log, "Y log scale");

        if ui.button("Apply calibration").clicked() {
            self.apply_bounds();
        }
        if self.project.is_calibrated() {
            ui.label("Axes are calibrated");
        }
    }

    fn apply_bounds(&mut self) {
        let parsed = [
            parse_bound(&self.bounds_entry.x_min),
            parse_bound(&self.bounds_entry.x_max),
            parse_bound(&self.bounds_entry.y_min),
            parse_bound(&self.bounds_entry.y_max),
        ];
        let [Some(x_min), Some(x_max), Some(y_min), Some(y_max)] = parsed else {
            self.status = "Enter numeric values for all four axis bounds".to_string();
            return;
        };
        let axes = AxisRange {
            x_min,
            x_max,
            y_min,
            y_max,
            x_log: self.bounds_entry.x_log,
            y_log: self.bounds_entry.y_log,
        };
        match self.project.apply_calibration(axes) {
            Ok(()) => self.status = "Calibration applied".to_string(),
            Err(e) => self.status = e.to_string(),
        }
    }

    fn render_trace_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Auto-trace");
        if ui
            .button("Trace active dataset color")
            .on_hover_text("Scan each image column for the pixel closest to the dataset color")
            .clicked()
        {
            self.run_auto_trace();
        }
        ui.checkbox(&mut self.show_preview, "Show data preview");
    }

    fn run_auto_trace(&mut self) {
        let Some(image) = &self.image else {
            self.status = "Open an image before tracing".to_string();
            return;
        };
        if !self.project.is_calibrated() {
            self.status = "Calibrate the axes before tracing".to_string();
            return;
        }
        let target = self.project.datasets.active().color_rgb();
        let points = auto_trace(
            image,
            &self.placement,
            self.project.anchors(),
            &self.project.axes,
            target,
        );
        let n = points.len();
        self.project.datasets.replace_active_points(points);
        self.status = format!(
            "Auto-trace produced {} points for '{}'",
            n,
            self.project.datasets.active().name
        );
    }
}
