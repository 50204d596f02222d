//! Top menu bar: image loading, project save/load and CSV export.

use eframe::egui;

use super::DigiPlotApp;
use crate::data::datasets::MAX_DATASETS;
use crate::data::export::{default_file_stem, write_csv_path};
use crate::persistence;

impl DigiPlotApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open image…").clicked() {
                        self.prompt_open_image(ui.ctx());
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Save project…").clicked() {
                        self.prompt_save_project();
                        ui.close();
                    }
                    if ui.button("Load project…").clicked() {
                        self.prompt_load_project();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Export CSV…").clicked() {
                        self.prompt_export_csv();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn prompt_open_image(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp"])
            .pick_file()
        else {
            return;
        };
        match image::open(&path) {
            Ok(img) => {
                let rgb = img.to_rgb8();
                let (w, h) = (rgb.width(), rgb.height());
                self.install_image(ctx, rgb);
                self.status = format!("Loaded {w}x{h} image; calibrate the axes");
            }
            Err(e) => {
                // The previous image and project stay untouched.
                self.status = format!("Failed to load image: {e}");
                eprintln!("Failed to load image {:?}: {e}", path);
            }
        }
    }

    fn prompt_save_project(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", default_file_stem(&self.project.title)))
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        match persistence::save_project_to_path(&self.project, &path) {
            Ok(()) => self.status = format!("Saved project to {}", path.display()),
            Err(e) => {
                self.status = format!("Failed to save project: {e}");
                eprintln!("Failed to save project: {e}");
            }
        }
    }

    fn prompt_load_project(&mut self) {
        let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file()
        else {
            return;
        };
        match persistence::load_project_from_path(&path) {
            Ok(doc) => {
                let stored = doc.datasets.len();
                let applied = doc.apply_to(&mut self.project);
                self.bounds_entry = super::BoundsEntry::from_axes(&self.project.axes);
                self.status = if applied < stored {
                    format!(
                        "Loaded {applied} of {stored} datasets; only {MAX_DATASETS} slots available"
                    )
                } else {
                    format!("Loaded project from {}", path.display())
                };
            }
            Err(e) => self.status = format!("Failed to load project: {e}"),
        }
    }

    fn prompt_export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.csv", default_file_stem(&self.project.title)))
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        match write_csv_path(&path, &self.project.datasets) {
            Ok(()) => self.status = format!("Exported CSV to {}", path.display()),
            Err(e) => {
                self.status = format!("Failed to export CSV: {e}");
                eprintln!("Failed to export CSV: {e}");
            }
        }
    }
}
