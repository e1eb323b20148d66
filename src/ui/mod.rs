//! User interface components for the photo wall.
//!
//! This module contains all UI-related code: the main application struct,
//! the wall with its drag handling, the lightbox overlay, and card painting.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main PhotoWallApp
//! - `wall` - Card layout, drag sessions, and click-vs-drag resolution
//! - `lightbox` - The full-screen viewer overlay and its keyboard contract
//! - `rendering` - Painting cards onto the wall

mod lightbox;
mod rendering;
mod state;
mod wall;


pub use lightbox::Lightbox;
pub use state::PhotoWallApp;

use std::time::Instant;

use eframe::egui;

impl eframe::App for PhotoWallApp {
    /// Main update function called by egui for each frame.
    ///
    /// Drains finished image decodes, advances the fixed-delay timers,
    /// handles the lightbox keyboard contract, and lays out the toolbar,
    /// footer, wall, and overlays.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_loader(ctx);
        self.welcome.tick(now);
        self.lightbox.tick(now);
        if self.wall.glow_until.is_some_and(|until| now >= until) {
            self.wall.glow_until = None;
        }

        self.handle_lightbox_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.draw_footer(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_wall(ui);
        });

        self.draw_welcome_banner(ctx);
        self.draw_lightbox(ctx);

        self.schedule_timer_repaints(ctx, now);
    }
}

impl PhotoWallApp {
    /// Renders the toolbar with the shuffle control and the music toggle.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Shuffle").clicked() {
                let viewport = ui.ctx().screen_rect().size();
                self.shuffle(viewport);
            }

            ui.separator();

            match &self.music {
                Some(player) => {
                    let label = if player.is_playing() {
                        "Pause music"
                    } else {
                        "Play music"
                    };
                    if ui.button(label).clicked() {
                        player.toggle();
                    }
                }
                None => {
                    // No output device; the control stays visible but inert.
                    ui.add_enabled(false, egui::Button::new("Play music"));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let count = self.gallery.len();
                let label = if count == 1 {
                    "1 photo".to_string()
                } else {
                    format!("{count} photos")
                };
                ui.label(label);
            });
        });
    }

    /// Renders the footer strip under the wall.
    fn draw_footer(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Drag the photos around · click one to view it up close")
                    .weak(),
            );
        });
    }

    /// Renders the welcome banner. Clicking it dismisses it early; the
    /// auto-dismiss timer handles the rest.
    fn draw_welcome_banner(&mut self, ctx: &egui::Context) {
        if !self.welcome.visible() {
            return;
        }
        let mut dismissed = false;
        egui::Area::new(egui::Id::new("welcome_banner"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 28.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new("Welcome to the photo wall").strong());
                        ui.label("Make yourself at home — everything on the wall can be moved.");
                    });
                });
                let response = ui.interact(
                    ui.min_rect(),
                    egui::Id::new("welcome_dismiss"),
                    egui::Sense::click(),
                );
                if response.clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.welcome.dismiss();
        }
    }

    /// Keeps the UI repainting until the next pending timer fires.
    fn schedule_timer_repaints(&self, ctx: &egui::Context, now: Instant) {
        let deadlines = [
            self.welcome.deadline(),
            self.lightbox.deadline(),
            self.wall.glow_until,
        ];
        if let Some(next) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }
    }
}
