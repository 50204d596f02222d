//! Central canvas: image display, marker rendering and pointer interaction.

use eframe::egui;

use super::{DigiPlotApp, SELECT_RADIUS};
use crate::color::rgb_to_color32;
use crate::data::datasets::PointRef;

impl DigiPlotApp {
    pub(super) fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let desired = match &self.image {
                Some(img) => egui::vec2(
                    (img.width() as f64 * self.placement.scale) as f32,
                    (img.height() as f64 * self.placement.scale) as f32,
                ),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Open an image (File → Open image…) to start digitizing");
                    });
                    return;
                }
            };
            egui::ScrollArea::both().auto_shrink(false).show(ui, |ui| {
                let (response, painter) =
                    ui.allocate_painter(desired, egui::Sense::click_and_drag());
                let origin = response.rect.min;

                if let Some(texture) = &self.texture {
                    painter.image(
                        texture.id(),
                        egui::Rect::from_min_size(origin, desired),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }

                self.handle_pointer(&response, origin);
                self.draw_markers(&painter, origin);
            });
        });
    }

    fn handle_pointer(&mut self, response: &egui::Response, origin: egui::Pos2) {
        let canvas_pos =
            |p: egui::Pos2| [(p.x - origin.x) as f64, (p.y - origin.y) as f64];

        if self.session.is_collecting() {
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    match self.session.record_click(canvas_pos(pos)) {
                        Some(anchors) => {
                            self.project.set_anchors(anchors);
                            self.status =
                                "Anchors set; enter the axis bounds and apply the calibration"
                                    .to_string();
                        }
                        None => {
                            self.status =
                                format!("Calibration: {} clicks to go", self.session.remaining());
                        }
                    }
                }
            }
            // While calibrating, clicks never reach the point tools below.
            return;
        }

        if !self.project.is_calibrated() {
            if response.clicked() {
                self.status = "Calibrate the axes before adding points".to_string();
            }
            return;
        }

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.drag = self.project.find_nearest(canvas_pos(pos), SELECT_RADIUS);
            }
        }
        if response.dragged() {
            if let (Some(sel), Some(pos)) = (self.drag, response.interact_pointer_pos()) {
                let p = canvas_pos(pos);
                let moved = self.project.pixel_to_data(p[0], p[1]);
                self.project.datasets.move_point(sel.dataset, sel.point, moved);
            }
        }
        if response.drag_stopped() {
            self.drag = None;
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = canvas_pos(pos);
                if self.project.find_nearest(p, SELECT_RADIUS).is_none() {
                    let point = self.project.pixel_to_data(p[0], p[1]);
                    let active = self.project.datasets.active_index();
                    self.project.datasets.add_point(active, point);
                }
            }
        }

        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(sel) = self.project.find_nearest(canvas_pos(pos), SELECT_RADIUS) {
                    self.project.datasets.delete_by_selection(sel);
                }
            }
        }
    }

    fn draw_markers(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let to_screen =
            |p: [f64; 2]| egui::pos2(origin.x + p[0] as f32, origin.y + p[1] as f32);

        for click in self.session.clicks() {
            draw_cross(painter, to_screen(*click), egui::Color32::RED);
        }
        if let Some(a) = self.project.anchors() {
            for px in [a.x_min_px, a.x_max_px, a.y_min_px, a.y_max_px] {
                draw_cross(painter, to_screen(px), egui::Color32::DARK_RED);
            }
        }
        for (di, ds) in self.project.datasets.iter().enumerate() {
            let color = rgb_to_color32(ds.color_rgb());
            for (pi, p) in ds.points.iter().enumerate() {
                let pos = to_screen(self.project.data_to_pixel(p[0], p[1]));
                if self.drag == Some(PointRef { dataset: di, point: pi }) {
                    painter.circle_stroke(pos, 7.0, egui::Stroke::new(2.0, egui::Color32::WHITE));
                }
                painter.circle_filled(pos, 4.0, color);
            }
        }
    }
}

fn draw_cross(painter: &egui::Painter, pos: egui::Pos2, color: egui::Color32) {
    let r = 6.0;
    let stroke = egui::Stroke::new(1.5, color);
    painter.line_segment(
        [egui::pos2(pos.x - r, pos.y), egui::pos2(pos.x + r, pos.y)],
        stroke,
    );
    painter.line_segment(
        [egui::pos2(pos.x, pos.y - r), egui::pos2(pos.x, pos.y + r)],
        stroke,
    );
}
