//! Core data types for the photo wall.
//!
//! This module defines the picture and gallery structures shared by the wall,
//! the lightbox, and the loader. Offsets and rotations are transient display
//! state; they are assigned at startup and reshuffled on demand, never saved.

use std::path::PathBuf;
use uuid::Uuid;

use crate::constants::SAVE_EXTENSION;

/// Unique identifier for pictures on the wall.
pub type PictureId = Uuid;

/// Where a picture's pixels come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// An image file on disk, decoded in the background after startup.
    File(PathBuf),
    /// A built-in sample rendered procedurally (used when no photo
    /// directory is given).
    Sample(u32),
}

/// How far image loading has progressed for a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Decoding has not finished yet.
    #[default]
    Pending,
    /// A texture is available for this picture.
    Loaded,
    /// Decoding failed; the card renders as an empty frame and the
    /// lightbox skips it.
    Failed,
}

/// A single photo card on the wall.
///
/// Cards are created once at startup and live for the whole session. Only
/// their offset and rotation change afterwards, through dragging and
/// shuffling.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Unique identifier for this picture.
    pub id: PictureId,
    /// Display title, also used as alternative text and as the basis for
    /// the suggested save filename.
    pub title: String,
    /// Optional caption shown on the card and in the lightbox. When absent
    /// the title stands in for it.
    pub caption: Option<String>,
    /// Optional external link opened from the card's link badge.
    pub link: Option<String>,
    /// Where the pixels come from.
    pub source: ImageSource,
    /// Current offset from the card's home slot, in points.
    pub offset: (f32, f32),
    /// Current tilt in degrees.
    pub rotation: f32,
    /// Image loading progress.
    pub load_state: LoadState,
}

impl Picture {
    /// Creates a new picture with no caption, no link, and a neutral
    /// placement.
    pub fn new(title: impl Into<String>, source: ImageSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            caption: None,
            link: None,
            source,
            offset: (0.0, 0.0),
            rotation: 0.0,
            load_state: LoadState::default(),
        }
    }

    /// The text shown under the photo: the caption when present, otherwise
    /// the title.
    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.title)
    }

    /// Suggested filename for saving a copy: the title with spaces replaced
    /// by hyphens plus a fixed image extension.
    pub fn save_name(&self) -> String {
        format!("{}.{}", self.title.replace(' ', "-"), SAVE_EXTENSION)
    }
}

/// The ordered collection of pictures on the wall.
///
/// Order is load order and stays stable for the session; the lightbox cursor
/// indexes into it.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    /// All pictures, in display order. Later entries are drawn on top.
    pub pictures: Vec<Picture>,
}

impl Gallery {
    /// Creates an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pictures in the gallery.
    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    /// Whether the gallery holds no pictures.
    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    /// Appends a picture and returns its id.
    pub fn push(&mut self, picture: Picture) -> PictureId {
        let id = picture.id;
        self.pictures.push(picture);
        id
    }

    /// Looks up a picture by id.
    pub fn picture(&self, id: PictureId) -> Option<&Picture> {
        self.pictures.iter().find(|p| p.id == id)
    }

    /// Looks up a picture by id, mutably.
    pub fn picture_mut(&mut self, id: PictureId) -> Option<&mut Picture> {
        self.pictures.iter_mut().find(|p| p.id == id)
    }

    /// Position of a picture in display order.
    pub fn index_of(&self, id: PictureId) -> Option<usize> {
        self.pictures.iter().position(|p| p.id == id)
    }

    /// Wraps an arbitrary index into range, Euclidean-style: `-1` maps to
    /// the last picture, `len` maps back to the first. Returns `None` when
    /// the gallery is empty.
    pub fn wrap_index(&self, index: isize) -> Option<usize> {
        if self.pictures.is_empty() {
            return None;
        }
        Some(index.rem_euclid(self.pictures.len() as isize) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picture(title: &str) -> Picture {
        Picture::new(title, ImageSource::Sample(0))
    }

    #[test]
    fn caption_falls_back_to_title() {
        let mut pic = picture("Golden hour");
        assert_eq!(pic.caption_text(), "Golden hour");

        pic.caption = Some("Last light over the bay".to_string());
        assert_eq!(pic.caption_text(), "Last light over the bay");
    }

    #[test]
    fn save_name_replaces_spaces_with_hyphens() {
        let pic = picture("Sunset at the pier");
        assert_eq!(pic.save_name(), "Sunset-at-the-pier.jpg");
    }

    #[test]
    fn save_name_without_spaces_is_unchanged() {
        let pic = picture("Harbor");
        assert_eq!(pic.save_name(), "Harbor.jpg");
    }

    #[test]
    fn wrap_index_is_euclidean() {
        let mut gallery = Gallery::new();
        for i in 0..5 {
            gallery.push(picture(&format!("p{i}")));
        }

        assert_eq!(gallery.wrap_index(0), Some(0));
        assert_eq!(gallery.wrap_index(4), Some(4));
        assert_eq!(gallery.wrap_index(5), Some(0));
        assert_eq!(gallery.wrap_index(-1), Some(4));
        assert_eq!(gallery.wrap_index(-6), Some(4));
        assert_eq!(gallery.wrap_index(12), Some(2));
    }

    #[test]
    fn wrap_index_on_empty_gallery_is_none() {
        let gallery = Gallery::new();
        assert_eq!(gallery.wrap_index(0), None);
        assert_eq!(gallery.wrap_index(-1), None);
    }

    #[test]
    fn index_of_finds_pictures_in_order() {
        let mut gallery = Gallery::new();
        let a = gallery.push(picture("a"));
        let b = gallery.push(picture("b"));

        assert_eq!(gallery.index_of(a), Some(0));
        assert_eq!(gallery.index_of(b), Some(1));
        assert_eq!(gallery.index_of(Uuid::new_v4()), None);
    }
}
