//! Wall layout and drag interaction.
//!
//! This module lays cards out on their home slots, runs the per-frame drag
//! session, distinguishes drags from clicks, and clamps card offsets to the
//! viewport-derived limit.

use std::time::Instant;

use eframe::egui;

use super::state::PhotoWallApp;
use crate::constants::{
    CARD_GAP, CARD_HEIGHT, CARD_IMAGE_INSET, CARD_WIDTH, LINK_BADGE_RADIUS,
    OFFSET_LIMIT_DIVISOR, SHUFFLE_GLOW_DURATION,
};
use crate::scatter::{self, ViewportClass};
use crate::types::{Picture, PictureId};

impl PhotoWallApp {
    /// Draws the wall and runs pointer interaction for the frame.
    pub fn draw_wall(&mut self, ui: &mut egui::Ui) {
        let wall_rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(wall_rect, egui::Sense::click_and_drag());

        // The initial scatter waits for the first frame so it sees the real
        // viewport size.
        if !self.wall.scattered {
            let viewport = ui.ctx().screen_rect().size();
            self.scatter_cards(viewport);
            self.wall.scattered = true;
        }

        let homes = home_positions(self.gallery.len(), wall_rect);
        self.handle_wall_interaction(ui, &response, &homes);
        self.update_wall_cursor(ui, &homes);
        self.render_cards(ui.painter(), &homes, Instant::now());
    }

    /// Re-scatters every card and starts the shuffle glow.
    pub fn shuffle(&mut self, viewport: egui::Vec2) {
        self.scatter_cards(viewport);
        self.wall.glow_until = Some(Instant::now() + SHUFFLE_GLOW_DURATION);
    }

    /// Assigns fresh random placements to every card.
    pub fn scatter_cards(&mut self, viewport: egui::Vec2) {
        let class = ViewportClass::from_width(viewport.x);
        let mut rng = rand::thread_rng();
        for picture in &mut self.gallery.pictures {
            let placement = scatter::random_placement(&mut rng, class);
            picture.offset = placement.offset;
            picture.rotation = placement.rotation;
        }
    }

    /// Runs one frame of drag/click handling.
    ///
    /// A session starts on the press frame, applies pointer deltas while
    /// the button is held, and ends on release. Release without movement is
    /// a click and opens the lightbox at the pressed card's index.
    pub fn handle_wall_interaction(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        homes: &[egui::Pos2],
    ) {
        let viewport = ui.ctx().screen_rect().size();

        if ui.input(|i| i.pointer.primary_down()) {
            let Some(pos) = response.interact_pointer_pos() else {
                return;
            };
            if ui.input(|i| i.pointer.primary_pressed()) {
                self.begin_press(pos, homes);
            } else if let Some(id) = self.interaction.dragging_card {
                self.update_drag(id, pos, viewport);
            }
        } else {
            self.finish_press(ui, response, homes);
        }
    }

    /// Handles the press frame: arms the link badge or starts a drag
    /// session on the topmost card under the pointer.
    fn begin_press(&mut self, pos: egui::Pos2, homes: &[egui::Pos2]) {
        let Some(index) = self.find_card_at_position(pos, homes) else {
            return;
        };
        let picture = &self.gallery.pictures[index];

        // Presses on the link badge never start a drag.
        if picture.link.is_some() {
            let rect = card_rect(picture, homes[index]);
            if link_badge_hit(rect, picture.rotation, pos) {
                self.interaction.pending_link = Some(picture.id);
                return;
            }
        }

        self.interaction.dragging_card = Some(picture.id);
        self.interaction.drag_moved = false;
        // The press position seeds the sample chain, so the first move
        // event applies the actual pointer movement.
        self.interaction.previous_sample = Some(pos);
    }

    /// Applies the pointer delta since the previous sample to the dragged
    /// card, clamped to the viewport limit per axis.
    fn update_drag(&mut self, id: PictureId, pos: egui::Pos2, viewport: egui::Vec2) {
        let delta = match self.interaction.previous_sample {
            Some(previous) => pos - previous,
            None => egui::Vec2::ZERO,
        };
        self.interaction.previous_sample = Some(pos);
        if delta == egui::Vec2::ZERO {
            return;
        }

        self.interaction.drag_moved = true;
        if let Some(picture) = self.gallery.picture_mut(id) {
            let moved = (picture.offset.0 + delta.x, picture.offset.1 + delta.y);
            picture.offset = clamp_offset(moved, viewport);
        }
    }

    /// Handles the release frame. Drag state is cleared unconditionally;
    /// a still press becomes a click that opens the lightbox, and an armed
    /// link badge opens its URL when released over the badge.
    fn finish_press(&mut self, ui: &egui::Ui, response: &egui::Response, homes: &[egui::Pos2]) {
        if let Some(id) = self.interaction.dragging_card.take() {
            self.interaction.previous_sample = None;
            if self.interaction.drag_moved {
                self.interaction.drag_moved = false;
            } else if let Some(index) = self.gallery.index_of(id) {
                self.lightbox.show(&self.gallery, index as isize);
            }
        }

        if let Some(id) = self.interaction.pending_link.take() {
            let released_over_badge = response.interact_pointer_pos().is_some_and(|pos| {
                self.gallery.index_of(id).is_some_and(|index| {
                    let picture = &self.gallery.pictures[index];
                    link_badge_hit(card_rect(picture, homes[index]), picture.rotation, pos)
                })
            });
            if released_over_badge {
                if let Some(link) = self.gallery.picture(id).and_then(|p| p.link.clone()) {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                }
            }
        }
    }

    /// Finds the topmost card under the pointer, if any.
    pub fn find_card_at_position(&self, pos: egui::Pos2, homes: &[egui::Pos2]) -> Option<usize> {
        // Later cards draw on top, so scan back to front.
        self.gallery
            .pictures
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, picture)| {
                card_rect(picture, homes[index]).contains(pos).then_some(index)
            })
    }

    fn update_wall_cursor(&self, ui: &egui::Ui, homes: &[egui::Pos2]) {
        if self.interaction.dragging_card.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if ui
            .input(|i| i.pointer.hover_pos())
            .is_some_and(|pos| self.find_card_at_position(pos, homes).is_some())
        {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}

/// Home slots for `count` cards: a centered grid sized to the wall, with
/// each row centered on its own.
pub(crate) fn home_positions(count: usize, wall: egui::Rect) -> Vec<egui::Pos2> {
    if count == 0 {
        return Vec::new();
    }
    let pitch_x = CARD_WIDTH + CARD_GAP;
    let pitch_y = CARD_HEIGHT + CARD_GAP;
    let cols = ((wall.width() / pitch_x).floor() as usize).clamp(1, count);
    let rows = count.div_ceil(cols);

    let mut homes = Vec::with_capacity(count);
    for index in 0..count {
        let col = index % cols;
        let row = index / cols;
        let row_len = if row == rows - 1 { count - row * cols } else { cols };
        let x = wall.center().x + (col as f32 - (row_len as f32 - 1.0) / 2.0) * pitch_x;
        let y = wall.center().y + (row as f32 - (rows as f32 - 1.0) / 2.0) * pitch_y;
        homes.push(egui::pos2(x, y));
    }
    homes
}

/// The card's on-screen rectangle before rotation.
pub(crate) fn card_rect(picture: &Picture, home: egui::Pos2) -> egui::Rect {
    let center = home + egui::vec2(picture.offset.0, picture.offset.1);
    egui::Rect::from_center_size(center, egui::vec2(CARD_WIDTH, CARD_HEIGHT))
}

/// Clamps an offset to ±(viewport dimension / divisor) per axis.
pub(crate) fn clamp_offset(offset: (f32, f32), viewport: egui::Vec2) -> (f32, f32) {
    let limit_x = viewport.x / OFFSET_LIMIT_DIVISOR;
    let limit_y = viewport.y / OFFSET_LIMIT_DIVISOR;
    (
        offset.0.clamp(-limit_x, limit_x),
        offset.1.clamp(-limit_y, limit_y),
    )
}

/// Center of the link badge: inset from the card's top-right corner and
/// rotated with the card.
pub(crate) fn link_badge_center(rect: egui::Rect, rotation_deg: f32) -> egui::Pos2 {
    let rot = egui::emath::Rot2::from_angle(rotation_deg.to_radians());
    let corner = rect.right_top()
        + egui::vec2(
            -(CARD_IMAGE_INSET + LINK_BADGE_RADIUS),
            CARD_IMAGE_INSET + LINK_BADGE_RADIUS,
        );
    rect.center() + rot * (corner - rect.center())
}

/// Whether a pointer position lands on the link badge.
pub(crate) fn link_badge_hit(rect: egui::Rect, rotation_deg: f32, pos: egui::Pos2) -> bool {
    pos.distance(link_badge_center(rect, rotation_deg)) <= LINK_BADGE_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageSource;

    #[test]
    fn clamp_limit_matches_viewport_over_divisor() {
        let viewport = egui::vec2(1000.0, 600.0);
        let clamped = clamp_offset((5000.0, -5000.0), viewport);
        assert!((clamped.0 - 1000.0 / 1.5).abs() < 0.01);
        assert!((clamped.1 + 600.0 / 1.5).abs() < 0.01);
    }

    #[test]
    fn clamp_holds_over_any_delta_sequence() {
        let viewport = egui::vec2(1000.0, 600.0);
        let limit_x = viewport.x / OFFSET_LIMIT_DIVISOR;
        let limit_y = viewport.y / OFFSET_LIMIT_DIVISOR;

        let deltas = [
            (300.0, -120.0),
            (300.0, -120.0),
            (300.0, -120.0),
            (-50.0, 700.0),
            (9000.0, 9000.0),
            (-1.0, -1.0),
        ];
        let mut offset = (0.0, 0.0);
        for (dx, dy) in deltas {
            offset = clamp_offset((offset.0 + dx, offset.1 + dy), viewport);
            assert!(offset.0.abs() <= limit_x);
            assert!(offset.1.abs() <= limit_y);
        }
    }

    #[test]
    fn small_offsets_pass_through_unclamped() {
        let viewport = egui::vec2(1000.0, 600.0);
        assert_eq!(clamp_offset((12.0, -30.0), viewport), (12.0, -30.0));
    }

    #[test]
    fn home_positions_cover_every_card() {
        let wall = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 800.0));
        let homes = home_positions(7, wall);
        assert_eq!(homes.len(), 7);
        // All homes stay horizontally centered around the wall center.
        let mean_x: f32 = homes.iter().map(|p| p.x).sum::<f32>() / homes.len() as f32;
        assert!((mean_x - wall.center().x).abs() < 1.0);
    }

    #[test]
    fn home_positions_on_narrow_wall_use_one_column() {
        let wall = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(100.0, 800.0));
        let homes = home_positions(3, wall);
        assert_eq!(homes.len(), 3);
        assert!(homes.iter().all(|p| (p.x - wall.center().x).abs() < 0.01));
    }

    #[test]
    fn card_rect_follows_the_offset() {
        let mut picture = Picture::new("p", ImageSource::Sample(0));
        picture.offset = (40.0, -16.0);
        let rect = card_rect(&picture, egui::pos2(200.0, 300.0));
        assert_eq!(rect.center(), egui::pos2(240.0, 284.0));
        assert_eq!(rect.width(), CARD_WIDTH);
        assert_eq!(rect.height(), CARD_HEIGHT);
    }

    #[test]
    fn link_badge_sits_in_the_top_right_corner() {
        let rect = egui::Rect::from_center_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(CARD_WIDTH, CARD_HEIGHT),
        );
        let center = link_badge_center(rect, 0.0);
        assert!(center.x > 0.0 && center.y < 0.0);
        assert!(rect.contains(center));

        assert!(link_badge_hit(rect, 0.0, center));
        assert!(!link_badge_hit(rect, 0.0, rect.center()));
    }
}
