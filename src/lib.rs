//! # Photo Wall
//!
//! A desktop photo wall: picture cards scattered across the window that can
//! be dragged around, shuffled, and opened in a full-screen lightbox viewer.
//!
//! ## Features
//! - Draggable photo cards with offsets clamped to the viewport
//! - Click-vs-drag resolution: a still click opens the lightbox, a drag
//!   does not
//! - Device-aware random scatter and a shuffle control
//! - Lightbox with wrapping next/previous navigation, keyboard control,
//!   and a save-a-copy dialog
//! - Background music toggle and an auto-dismissing welcome banner
//! - Optional photo directory with a `gallery.json` sidecar for titles,
//!   captions, and links

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod audio;
mod constants;
mod loader;
mod samples;
mod scatter;
mod types;
mod ui;

pub use scatter::{Placement, ViewportClass};
pub use types::*;
pub use ui::{Lightbox, PhotoWallApp};

use std::path::PathBuf;

/// Runs the photo wall application.
///
/// `photos_dir` selects the directory to scan for photos. When it is absent,
/// empty, or unreadable the built-in sample gallery is shown instead.
///
/// # Returns
///
/// Returns `Ok(())` when the application exits normally, or an
/// `eframe::Error` if the window cannot be created.
pub fn run_app(photos_dir: Option<PathBuf>) -> Result<(), eframe::Error> {
    let gallery = match &photos_dir {
        Some(dir) => match loader::scan_directory(dir) {
            Ok(gallery) if !gallery.is_empty() => gallery,
            Ok(_) => {
                log::warn!(
                    "no photos found in {}; showing the sample gallery",
                    dir.display()
                );
                samples::sample_gallery()
            }
            Err(err) => {
                log::warn!("{err}; showing the sample gallery");
                samples::sample_gallery()
            }
        },
        None => samples::sample_gallery(),
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Photo Wall",
        options,
        Box::new(move |cc| Ok(Box::new(PhotoWallApp::new(cc, gallery)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_starts_with_banner_up_and_lightbox_closed() {
        let app = PhotoWallApp::with_gallery(samples::sample_gallery());
        assert!(app.welcome.visible());
        assert!(!app.lightbox.visible());
        assert!(!app.gallery.is_empty());
    }

    #[test]
    fn fresh_app_has_no_active_drag_session() {
        let app = PhotoWallApp::with_gallery(samples::sample_gallery());
        assert!(app.interaction.dragging_card.is_none());
        assert!(app.interaction.previous_sample.is_none());
        assert!(!app.interaction.drag_moved);
    }
}
