//! Live view of an evolving particle set
//!
//! Every frame advances the simulator by a fixed interval and redraws the
//! particles as dots on a canvas spanning [-1, 1] on both axes.

use eframe::egui;
use orbitsim_core::{Particle, Simulator};

/// Half-width of the visible world square
const WORLD_EXTENT: f32 = 1.0;
const DOT_RADIUS: f32 = 4.0;

pub struct VizApp {
    initial: Vec<Particle>,
    sim: Simulator,
    interval: f64,
    playing: bool,
    frames: u64,
    last_error: Option<String>,
}

impl VizApp {
    pub fn new(particles: Vec<Particle>, interval: f64, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            sim: Simulator::new(particles.clone()),
            initial: particles,
            interval,
            playing: true,
            frames: 0,
            last_error: None,
        }
    }

    fn reset(&mut self) {
        self.sim = Simulator::new(self.initial.clone());
        self.frames = 0;
        self.last_error = None;
    }

    fn advance_frame(&mut self) {
        match self.sim.evolve(self.interval) {
            Ok(_) => self.frames += 1,
            Err(e) => {
                log::error!("evolve failed: {}", e);
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
    }
}

impl eframe::App for VizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing && self.last_error.is_none();
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }

                if ui.button("⏭ Step").clicked() && self.last_error.is_none() {
                    self.advance_frame();
                }

                ui.separator();
                ui.label(format!(
                    "Frame: {}   t = {:.5}   particles: {}",
                    self.frames,
                    self.sim.elapsed(),
                    self.sim.len()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            // Equal aspect: the shorter side spans the full world square
            let center = rect.center();
            let scale = rect.width().min(rect.height()) / (2.0 * WORLD_EXTENT) * 0.9;

            painter.rect_stroke(
                egui::Rect::from_center_size(center, egui::vec2(2.0 * scale, 2.0 * scale)),
                0.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            );

            for p in self.sim.particles() {
                let screen_pos =
                    center + egui::vec2(p.x() as f32 * scale, -(p.y() as f32) * scale);
                painter.circle_filled(screen_pos, DOT_RADIUS, egui::Color32::RED);
            }

            if let Some(ref error) = self.last_error {
                ui.vertical_centered(|ui| {
                    ui.add_space(rect.height() * 0.4);
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED)
                            .size(16.0),
                    );
                });
            }
        });

        if self.playing {
            self.advance_frame();
            ctx.request_repaint();
        }
    }
}
