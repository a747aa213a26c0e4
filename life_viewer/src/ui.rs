// ui.rs - egui front end for LifeViewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Duration;
use life_board::patterns;

use crate::LifeViewer;

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.tick() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Left click or drag to add cells, right click or drag to remove them. The edges wrap around.");

            ui.separator();

            self.draw_board(ui);

            ui.separator();

            let grid = self.board().grid();
            let total = grid.cells().len();
            let live_cells = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        if self.is_running() {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl LifeViewer {
    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let (cols, rows) = self.board().size();
        let box_size = self.config().cell_size;
        let pitch = box_size + self.config().spacing;
        let total_size = Vec2::new(self.config().extent(cols), self.config().extent(rows));

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        let grid = self.board().grid();
        for y in 0..rows {
            for x in 0..cols {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(x as f32 * pitch, y as f32 * pitch),
                    Vec2::splat(box_size),
                );
                let alive = grid.get(x, y).is_some_and(|c| c.is_alive());
                let cell_color = if alive { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Primary button paints, secondary erases
        let held = ui.input(|i| {
            if i.pointer.primary_down() {
                Some(true)
            } else if i.pointer.secondary_down() {
                Some(false)
            } else {
                None
            }
        });
        let action = held
            .or(response.clicked().then_some(true))
            .or(response.secondary_clicked().then_some(false));

        if let (Some(alive), Some(pos)) = (action, response.interact_pointer_pos()) {
            let local = pos - origin;
            if local.x >= 0.0 && local.y >= 0.0 {
                let x = (local.x / pitch) as usize;
                let y = (local.y / pitch) as usize;
                if x < cols && y < rows {
                    self.paint(x, y, alive);
                }
            }
        }
    }
}
