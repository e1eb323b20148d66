//! Card rendering.
//!
//! Cards are painted as tilted polaroid frames: a drop shadow, a light
//! frame, the photo area, a caption strip, and an optional link badge.
//! Rotation is applied per card by rotating the meshes and text around the
//! card center.

use std::time::{Duration, Instant};

use eframe::egui;

use super::state::PhotoWallApp;
use super::wall::{card_rect, link_badge_center};
use crate::constants::{
    CARD_CAPTION_STRIP, CARD_IMAGE_INSET, LINK_BADGE_RADIUS, SHUFFLE_GLOW_DURATION,
};
use crate::types::{LoadState, Picture};

const FRAME_COLOR: egui::Color32 = egui::Color32::from_rgb(248, 246, 240);
const CAPTION_COLOR: egui::Color32 = egui::Color32::from_rgb(72, 66, 60);
const GLOW_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 214, 120);

impl PhotoWallApp {
    /// Paints every card, back to front, so later pictures overlap earlier
    /// ones the same way hit-testing resolves them.
    pub fn render_cards(&self, painter: &egui::Painter, homes: &[egui::Pos2], now: Instant) {
        let glow = self.wall.glow_until.and_then(|until| {
            let remaining = until.saturating_duration_since(now);
            (remaining > Duration::ZERO)
                .then(|| remaining.as_secs_f32() / SHUFFLE_GLOW_DURATION.as_secs_f32())
        });

        for (index, picture) in self.gallery.pictures.iter().enumerate() {
            let rect = card_rect(picture, homes[index]);
            self.render_card(painter, picture, rect, glow);
        }
    }

    fn render_card(
        &self,
        painter: &egui::Painter,
        picture: &Picture,
        rect: egui::Rect,
        glow: Option<f32>,
    ) {
        let angle = picture.rotation.to_radians();
        let rot = egui::emath::Rot2::from_angle(angle);

        // Drop shadow.
        let mut shadow = egui::Mesh::default();
        shadow.add_colored_rect(
            rect.translate(egui::vec2(4.0, 6.0)),
            egui::Color32::from_black_alpha(60),
        );
        shadow.rotate(rot, rect.center());
        painter.add(egui::Shape::mesh(shadow));

        // Frame.
        let mut frame = egui::Mesh::default();
        frame.add_colored_rect(rect, FRAME_COLOR);
        frame.rotate(rot, rect.center());
        painter.add(egui::Shape::mesh(frame));

        // Photo area: the texture when loaded, a placeholder tone otherwise.
        let photo_rect = photo_area(rect);
        match self.textures.get(&picture.id) {
            Some(texture) => {
                let mut mesh = egui::Mesh::with_texture(texture.id());
                mesh.add_rect_with_uv(
                    photo_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                mesh.rotate(rot, rect.center());
                painter.add(egui::Shape::mesh(mesh));
            }
            None => {
                let fill = if picture.load_state == LoadState::Failed {
                    egui::Color32::from_gray(90)
                } else {
                    egui::Color32::from_gray(200)
                };
                let mut mesh = egui::Mesh::default();
                mesh.add_colored_rect(photo_rect, fill);
                mesh.rotate(rot, rect.center());
                painter.add(egui::Shape::mesh(mesh));
            }
        }

        // Caption strip, rotated with the card.
        let galley = painter.layout(
            picture.caption_text().to_string(),
            egui::FontId::proportional(13.0),
            CAPTION_COLOR,
            rect.width() - 2.0 * CARD_IMAGE_INSET,
        );
        let strip_center_y = (photo_rect.max.y + rect.max.y) / 2.0;
        let anchor = egui::pos2(
            rect.center().x - galley.size().x / 2.0,
            strip_center_y - galley.size().y / 2.0,
        );
        let anchor = rect.center() + rot * (anchor - rect.center());
        let mut caption = egui::epaint::TextShape::new(anchor, galley, CAPTION_COLOR);
        caption.angle = angle;
        painter.add(caption);

        // Link badge in the photo corner.
        if picture.link.is_some() {
            let center = link_badge_center(rect, picture.rotation);
            painter.circle_filled(center, LINK_BADGE_RADIUS, egui::Color32::from_rgb(38, 38, 46));
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "↗",
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }

        // Shuffle glow, fading out over its duration.
        if let Some(strength) = glow {
            let alpha = (strength * 200.0) as u8;
            let corners = rotated_corners(rect.expand(3.0), rot);
            painter.add(egui::Shape::closed_line(
                corners,
                egui::Stroke::new(
                    2.5,
                    egui::Color32::from_rgba_unmultiplied(
                        GLOW_COLOR.r(),
                        GLOW_COLOR.g(),
                        GLOW_COLOR.b(),
                        alpha,
                    ),
                ),
            ));
        }
    }
}

/// The photo region inside a card frame: inset on three sides, leaving the
/// caption strip at the bottom.
fn photo_area(rect: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        rect.min + egui::vec2(CARD_IMAGE_INSET, CARD_IMAGE_INSET),
        egui::pos2(rect.max.x - CARD_IMAGE_INSET, rect.max.y - CARD_CAPTION_STRIP),
    )
}

fn rotated_corners(rect: egui::Rect, rot: egui::emath::Rot2) -> Vec<egui::Pos2> {
    let center = rect.center();
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
    .into_iter()
    .map(|corner| center + rot * (corner - center))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_area_leaves_room_for_the_caption_strip() {
        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(180.0, 214.0));
        let photo = photo_area(rect);
        assert_eq!(photo.min, egui::pos2(CARD_IMAGE_INSET, CARD_IMAGE_INSET));
        assert_eq!(photo.max.y, rect.max.y - CARD_CAPTION_STRIP);
        assert!(photo.height() > 0.0);
    }

    #[test]
    fn rotated_corners_preserve_distance_to_center() {
        let rect = egui::Rect::from_center_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 60.0));
        let rot = egui::emath::Rot2::from_angle(0.3);
        let corners = rotated_corners(rect, rot);
        let expected = rect.left_top().distance(rect.center());
        for corner in corners {
            assert!((corner.distance(rect.center()) - expected).abs() < 0.01);
        }
    }
}
