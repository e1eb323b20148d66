//! The lightbox viewer.
//!
//! A full-screen overlay showing one picture at a time, with wrapping
//! next/previous navigation, a close control, and a save-a-copy control.
//! The cursor state is plain data and testable without a window; the
//! overlay itself is painted from [`PhotoWallApp::draw_lightbox`].

use std::time::Instant;

use eframe::egui;

use super::state::PhotoWallApp;
use crate::constants::LIGHTBOX_CLEAR_DELAY;
use crate::types::{Gallery, ImageSource, LoadState, Picture, PictureId};

/// Cursor and visibility state of the lightbox overlay.
///
/// Invariant: while the overlay is visible the cursor is a valid index into
/// the gallery (indices wrap instead of going out of bounds).
#[derive(Default)]
pub struct Lightbox {
    visible: bool,
    cursor: usize,
    /// Picture whose image the overlay is holding on to. Kept briefly after
    /// close so the closing frame never shows an empty viewer.
    current: Option<PictureId>,
    clear_at: Option<Instant>,
}

impl Lightbox {
    /// Selects and shows the picture at `index`, wrapping out-of-range
    /// values into range.
    ///
    /// No-op on an empty gallery. When the selected picture has no loadable
    /// image the cursor still moves but the overlay contents are left
    /// untouched.
    pub fn show(&mut self, gallery: &Gallery, index: isize) {
        let Some(index) = gallery.wrap_index(index) else {
            return;
        };
        self.cursor = index;

        let picture = &gallery.pictures[index];
        if picture.load_state == LoadState::Failed {
            return;
        }
        self.current = Some(picture.id);
        self.clear_at = None;
        self.visible = true;
    }

    /// Advances to the next picture, wrapping past the end.
    pub fn next(&mut self, gallery: &Gallery) {
        self.show(gallery, self.cursor as isize + 1);
    }

    /// Steps back to the previous picture, wrapping past the start.
    pub fn previous(&mut self, gallery: &Gallery) {
        self.show(gallery, self.cursor as isize - 1);
    }

    /// Hides the overlay. The displayed image is dropped a short moment
    /// later, once the clear timer fires.
    pub fn close(&mut self, now: Instant) {
        self.visible = false;
        self.clear_at = Some(now + LIGHTBOX_CLEAR_DELAY);
    }

    /// Fires the deferred image clear once its deadline passes. Idempotent.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.clear_at {
            if now >= at {
                self.current = None;
                self.clear_at = None;
            }
        }
    }

    /// Whether the overlay is showing.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Picture the overlay is currently holding, if any.
    pub fn displayed(&self) -> Option<PictureId> {
        self.current
    }

    /// Pending clear deadline, used to keep repainting until it fires.
    pub fn deadline(&self) -> Option<Instant> {
        self.clear_at
    }
}

impl PhotoWallApp {
    /// Paints the lightbox overlay when it is visible.
    pub fn draw_lightbox(&mut self, ctx: &egui::Context) {
        if !self.lightbox.visible() {
            return;
        }
        let Some(picture) = self
            .lightbox
            .displayed()
            .and_then(|id| self.gallery.picture(id))
            .cloned()
        else {
            return;
        };
        let texture = self.textures.get(&picture.id).cloned();

        let screen = ctx.screen_rect();
        let mut close_requested = false;
        let mut step: isize = 0;
        let mut save_requested = false;

        egui::Area::new(egui::Id::new("lightbox"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                // Backdrop over the whole screen; clicks that no control
                // or content claims land here and close the overlay.
                let backdrop = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(217));

                let bounds = content_bounds(screen);
                let display_rect = match &texture {
                    Some(tex) => fitted_rect(tex.size_vec2(), bounds),
                    None => bounds,
                };

                if let Some(tex) = &texture {
                    ui.painter().image(
                        tex.id(),
                        display_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                } else {
                    ui.painter().text(
                        bounds.center(),
                        egui::Align2::CENTER_CENTER,
                        "Loading…",
                        egui::FontId::proportional(18.0),
                        egui::Color32::from_gray(180),
                    );
                }

                let caption_band = egui::Rect::from_min_max(
                    egui::pos2(display_rect.min.x, display_rect.max.y),
                    egui::pos2(display_rect.max.x, display_rect.max.y + 48.0),
                );
                ui.painter().text(
                    egui::pos2(display_rect.center().x, display_rect.max.y + 16.0),
                    egui::Align2::CENTER_TOP,
                    picture.caption_text(),
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_gray(230),
                );

                // Clicks on the picture or its caption stay inside the
                // overlay instead of closing it.
                ui.interact(
                    display_rect.union(caption_band),
                    ui.id().with("lightbox_content"),
                    egui::Sense::click(),
                );

                if ui.put(close_button_rect(screen), egui::Button::new("✕")).clicked() {
                    close_requested = true;
                }
                if ui.put(prev_button_rect(screen), egui::Button::new("◀")).clicked() {
                    step = -1;
                }
                if ui.put(next_button_rect(screen), egui::Button::new("▶")).clicked() {
                    step = 1;
                }
                if ui
                    .put(save_button_rect(screen), egui::Button::new("Save a copy"))
                    .clicked()
                {
                    save_requested = true;
                }

                if backdrop.clicked() {
                    close_requested = true;
                }
            });

        if close_requested {
            self.lightbox.close(Instant::now());
        } else if step != 0 {
            let target = self.lightbox.cursor() as isize + step;
            self.lightbox.show(&self.gallery, target);
        }
        if save_requested {
            if let Err(err) = save_copy(&picture) {
                log::warn!("could not save a copy of {}: {err}", picture.title);
            }
        }
    }

    /// Handles the lightbox keyboard contract: Escape closes, the arrow
    /// keys navigate. Only active while the overlay is visible.
    pub fn handle_lightbox_keys(&mut self, ctx: &egui::Context) {
        if !self.lightbox.visible() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.lightbox.close(Instant::now());
        } else if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.lightbox.next(&self.gallery);
        } else if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.lightbox.previous(&self.gallery);
        }
    }
}

/// Region of the screen available for the picture itself.
fn content_bounds(screen: egui::Rect) -> egui::Rect {
    screen.shrink2(egui::vec2(screen.width() * 0.12, screen.height() * 0.14))
}

/// Largest rect with the texture's aspect ratio that fits the bounds,
/// centered.
fn fitted_rect(tex_size: egui::Vec2, bounds: egui::Rect) -> egui::Rect {
    let scale = (bounds.width() / tex_size.x).min(bounds.height() / tex_size.y);
    egui::Rect::from_center_size(bounds.center(), tex_size * scale)
}

fn close_button_rect(screen: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(screen.right() - 56.0, screen.top() + 16.0),
        egui::vec2(40.0, 40.0),
    )
}

fn prev_button_rect(screen: egui::Rect) -> egui::Rect {
    egui::Rect::from_center_size(
        egui::pos2(screen.left() + 44.0, screen.center().y),
        egui::vec2(44.0, 64.0),
    )
}

fn next_button_rect(screen: egui::Rect) -> egui::Rect {
    egui::Rect::from_center_size(
        egui::pos2(screen.right() - 44.0, screen.center().y),
        egui::vec2(44.0, 64.0),
    )
}

fn save_button_rect(screen: egui::Rect) -> egui::Rect {
    egui::Rect::from_center_size(
        egui::pos2(screen.center().x, screen.bottom() - 36.0),
        egui::vec2(130.0, 32.0),
    )
}

/// Writes a copy of the picture to a user-chosen destination. The suggested
/// filename comes from [`Picture::save_name`]. Cancelling the dialog is not
/// an error.
fn save_copy(picture: &Picture) -> Result<(), String> {
    let Some(dest) = rfd::FileDialog::new()
        .set_file_name(picture.save_name())
        .save_file()
    else {
        return Ok(());
    };

    match &picture.source {
        ImageSource::File(path) => {
            std::fs::copy(path, &dest)
                .map_err(|err| format!("copy to {}: {err}", dest.display()))?;
        }
        ImageSource::Sample(seed) => {
            let image = crate::samples::sample_image(*seed);
            let rgb: Vec<u8> = image
                .pixels
                .iter()
                .flat_map(|c| [c.r(), c.g(), c.b()])
                .collect();
            image::save_buffer(
                &dest,
                &rgb,
                image.width() as u32,
                image.height() as u32,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|err| format!("write {}: {err}", dest.display()))?;
        }
    }
    log::info!("saved a copy of {} to {}", picture.title, dest.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Picture;
    use std::time::Duration;

    fn gallery_of(n: usize) -> Gallery {
        let mut gallery = Gallery::new();
        for i in 0..n {
            let mut picture = Picture::new(format!("p{i}"), ImageSource::Sample(i as u32));
            picture.load_state = LoadState::Loaded;
            gallery.push(picture);
        }
        gallery
    }

    #[test]
    fn show_wraps_into_range() {
        let gallery = gallery_of(5);
        let mut lightbox = Lightbox::default();

        lightbox.show(&gallery, 2);
        assert!(lightbox.visible());
        assert_eq!(lightbox.cursor(), 2);

        lightbox.show(&gallery, -1);
        assert_eq!(lightbox.cursor(), 4);

        lightbox.show(&gallery, 5);
        assert_eq!(lightbox.cursor(), 0);

        lightbox.show(&gallery, 13);
        assert_eq!(lightbox.cursor(), 3);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let gallery = gallery_of(5);
        let mut lightbox = Lightbox::default();

        lightbox.show(&gallery, 4);
        lightbox.next(&gallery);
        assert_eq!(lightbox.cursor(), 0);
    }

    #[test]
    fn next_then_previous_restores_cursor() {
        let gallery = gallery_of(4);
        for start in 0..4 {
            let mut lightbox = Lightbox::default();
            lightbox.show(&gallery, start as isize);

            lightbox.next(&gallery);
            lightbox.previous(&gallery);
            assert_eq!(lightbox.cursor(), start);

            lightbox.previous(&gallery);
            lightbox.next(&gallery);
            assert_eq!(lightbox.cursor(), start);
        }
    }

    #[test]
    fn show_on_empty_gallery_is_a_no_op() {
        let gallery = Gallery::new();
        let mut lightbox = Lightbox::default();

        lightbox.show(&gallery, 0);
        lightbox.next(&gallery);
        lightbox.previous(&gallery);

        assert!(!lightbox.visible());
        assert_eq!(lightbox.displayed(), None);
    }

    #[test]
    fn show_skips_population_for_failed_images() {
        let mut gallery = gallery_of(3);
        gallery.pictures[1].load_state = LoadState::Failed;
        let mut lightbox = Lightbox::default();

        lightbox.show(&gallery, 1);

        // The cursor moves but the overlay is never populated or shown.
        assert_eq!(lightbox.cursor(), 1);
        assert!(!lightbox.visible());
        assert_eq!(lightbox.displayed(), None);
    }

    #[test]
    fn close_defers_the_image_clear() {
        let gallery = gallery_of(2);
        let mut lightbox = Lightbox::default();
        lightbox.show(&gallery, 0);
        let shown = lightbox.displayed();
        assert!(shown.is_some());

        let now = Instant::now();
        lightbox.close(now);
        assert!(!lightbox.visible());

        // Before the deadline the image is still held.
        lightbox.tick(now + Duration::from_millis(50));
        assert_eq!(lightbox.displayed(), shown);

        // After the deadline it is dropped. A second tick is a no-op.
        lightbox.tick(now + Duration::from_millis(300));
        assert_eq!(lightbox.displayed(), None);
        lightbox.tick(now + Duration::from_millis(400));
        assert_eq!(lightbox.displayed(), None);
    }

    #[test]
    fn reopening_cancels_a_pending_clear() {
        let gallery = gallery_of(2);
        let mut lightbox = Lightbox::default();
        lightbox.show(&gallery, 0);

        let now = Instant::now();
        lightbox.close(now);
        lightbox.show(&gallery, 1);

        // The old deadline must not clear the freshly shown image.
        lightbox.tick(now + Duration::from_secs(1));
        assert!(lightbox.visible());
        assert!(lightbox.displayed().is_some());
    }

    #[test]
    fn fitted_rect_preserves_aspect_and_fits() {
        let bounds = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0));
        let rect = fitted_rect(egui::vec2(400.0, 300.0), bounds);
        assert!(bounds.contains_rect(rect));
        let aspect = rect.width() / rect.height();
        assert!((aspect - 4.0 / 3.0).abs() < 0.01);
    }
}
