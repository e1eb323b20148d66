//! Application state structures.
//!
//! This module contains the state structs tracking the wall's current UI
//! state: the active drag session, the wall surface, the welcome banner, and
//! the main [`PhotoWallApp`].

use std::collections::HashMap;
use std::time::Instant;

use eframe::egui;

use super::lightbox::Lightbox;
use crate::audio::MusicPlayer;
use crate::constants::WELCOME_DISMISS_DELAY;
use crate::loader::{ImageLoader, LoadResult};
use crate::samples;
use crate::types::{Gallery, ImageSource, LoadState, PictureId};

/// State for pointer interaction with the wall.
///
/// At most one drag session is active at any time; its fields live here
/// rather than on the cards themselves.
#[derive(Default)]
pub struct InteractionState {
    /// Card currently being dragged, if any.
    pub dragging_card: Option<PictureId>,
    /// Whether the active session has seen any movement. A release without
    /// movement counts as a click on the card.
    pub drag_moved: bool,
    /// Previous pointer sample; each move applies the delta between
    /// consecutive samples. `Some` only while a session is active.
    pub previous_sample: Option<egui::Pos2>,
    /// Card whose link badge was pressed. The link opens on release over
    /// the same badge; no drag session starts for such presses.
    pub pending_link: Option<PictureId>,
}

/// State of the wall surface itself.
#[derive(Default)]
pub struct WallState {
    /// Whether the initial scatter has run. It needs the real viewport
    /// size, so it waits for the first frame.
    pub scattered: bool,
    /// End of the shuffle glow, if a shuffle happened recently.
    pub glow_until: Option<Instant>,
}

/// The dismissible welcome banner.
///
/// Shown at startup; dismisses itself after a fixed delay or when clicked,
/// whichever comes first. The timer is fire-once and firing after a manual
/// dismiss is a no-op.
pub struct WelcomeBanner {
    visible: bool,
    dismiss_at: Option<Instant>,
}

impl WelcomeBanner {
    /// Creates a visible banner whose auto-dismiss counts from `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            visible: true,
            dismiss_at: Some(now + WELCOME_DISMISS_DELAY),
        }
    }

    /// Whether the banner is still showing.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Hides the banner immediately.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.dismiss_at = None;
    }

    /// Fires the auto-dismiss once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.dismiss_at {
            if now >= at {
                self.dismiss();
            }
        }
    }

    /// Pending deadline, used to keep repainting until the timer fires.
    pub fn deadline(&self) -> Option<Instant> {
        if self.visible {
            self.dismiss_at
        } else {
            None
        }
    }
}

/// The main application: the gallery plus all UI state.
pub struct PhotoWallApp {
    /// The pictures on the wall.
    pub gallery: Gallery,
    /// Pointer interaction state.
    pub interaction: InteractionState,
    /// Wall surface state.
    pub wall: WallState,
    /// The lightbox viewer.
    pub lightbox: Lightbox,
    /// The welcome banner.
    pub welcome: WelcomeBanner,
    /// Uploaded textures by picture id.
    pub textures: HashMap<PictureId, egui::TextureHandle>,
    /// Background image decoding.
    pub loader: ImageLoader,
    /// Background music, when an output device is available.
    pub music: Option<MusicPlayer>,
}

impl PhotoWallApp {
    /// Creates the app around a gallery without touching platform
    /// resources. Used directly by tests; [`PhotoWallApp::new`] builds on it.
    pub fn with_gallery(gallery: Gallery) -> Self {
        Self {
            gallery,
            interaction: InteractionState::default(),
            wall: WallState::default(),
            lightbox: Lightbox::default(),
            welcome: WelcomeBanner::new(Instant::now()),
            textures: HashMap::new(),
            loader: ImageLoader::new(),
            music: None,
        }
    }

    /// Creates the app for a real window: uploads sample textures, starts
    /// background decodes, and opens the music stream.
    pub fn new(cc: &eframe::CreationContext<'_>, gallery: Gallery) -> Self {
        let mut app = Self::with_gallery(gallery);
        app.start_image_loads(&cc.egui_ctx);
        app.music = match MusicPlayer::new() {
            Ok(player) => Some(player),
            Err(err) => {
                log::warn!("music disabled: {err}");
                None
            }
        };
        app
    }

    fn start_image_loads(&mut self, ctx: &egui::Context) {
        for picture in &mut self.gallery.pictures {
            match &picture.source {
                ImageSource::Sample(seed) => {
                    let image = samples::sample_image(*seed);
                    let texture = ctx.load_texture(
                        picture.title.clone(),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(picture.id, texture);
                    picture.load_state = LoadState::Loaded;
                }
                ImageSource::File(path) => {
                    self.loader.spawn_decode(ctx, picture.id, path.clone());
                }
            }
        }
    }

    /// Applies finished background decodes to the gallery and texture cache.
    pub fn drain_loader(&mut self, ctx: &egui::Context) {
        while let Some(result) = self.loader.poll() {
            match result {
                LoadResult::Decoded { id, image } => {
                    let texture =
                        ctx.load_texture(id.to_string(), image, egui::TextureOptions::LINEAR);
                    self.textures.insert(id, texture);
                    if let Some(picture) = self.gallery.picture_mut(id) {
                        picture.load_state = LoadState::Loaded;
                    }
                }
                LoadResult::Failed { id } => {
                    if let Some(picture) = self.gallery.picture_mut(id) {
                        picture.load_state = LoadState::Failed;
                    }
                }
            }
        }
    }
}
