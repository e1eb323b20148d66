//! Gallery loading.
//!
//! Scans a photo directory into a [`Gallery`], applies the optional
//! `gallery.json` sidecar (titles, captions, links keyed by file name), and
//! decodes image files on background threads so the UI never blocks on IO.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::constants::DECODE_MAX_EDGE;
use crate::types::{Gallery, ImageSource, Picture, PictureId};

/// File extensions recognized as photos when scanning a directory.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Name of the optional sidecar file describing the photos.
const SIDECAR_NAME: &str = "gallery.json";

/// One sidecar entry, keyed by photo file name in `gallery.json`.
///
/// All fields are optional; anything missing falls back to defaults derived
/// from the file name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SidecarEntry {
    /// Display title; defaults to a prettified file stem.
    pub title: Option<String>,
    /// Caption shown under the photo.
    pub caption: Option<String>,
    /// External link opened from the card's link badge.
    pub link: Option<String>,
}

/// Builds a gallery from the image files in `dir`, in file-name order.
///
/// The directory may contain a `gallery.json` sidecar mapping file names to
/// [`SidecarEntry`] values. Non-image files are ignored. An empty directory
/// yields an empty gallery (navigation then no-ops).
///
/// # Errors
///
/// Returns an error when the directory cannot be read.
pub fn scan_directory(dir: &Path) -> Result<Gallery, String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|err| format!("cannot read {}: {err}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_image_extension(path))
        .collect();
    paths.sort();

    let sidecar = read_sidecar(dir);

    let mut gallery = Gallery::new();
    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let entry = sidecar.get(&file_name).cloned().unwrap_or_default();

        let title = entry.title.unwrap_or_else(|| default_title(&path));
        let mut picture = Picture::new(title, ImageSource::File(path));
        picture.caption = entry.caption;
        picture.link = entry.link;
        gallery.push(picture);
    }

    log::info!(
        "scanned {} photo(s) from {}",
        gallery.len(),
        dir.display()
    );
    Ok(gallery)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Derives a display title from the file stem: separators become spaces.
fn default_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_else(|| "photo".to_string())
}

/// Reads the sidecar if present. A malformed sidecar is logged and treated
/// as absent rather than failing the whole scan.
fn read_sidecar(dir: &Path) -> HashMap<String, SidecarEntry> {
    let path = dir.join(SIDECAR_NAME);
    let Ok(raw) = std::fs::read_to_string(&path) else {
        return HashMap::new();
    };
    match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(err) => {
            log::warn!("ignoring malformed {}: {err}", path.display());
            HashMap::new()
        }
    }
}

/// Result of one background decode.
pub enum LoadResult {
    /// The file decoded successfully.
    Decoded {
        /// Picture the pixels belong to.
        id: PictureId,
        /// Decoded pixels, ready for texture upload.
        image: egui::ColorImage,
    },
    /// The file could not be opened or decoded.
    Failed {
        /// Picture whose image is missing.
        id: PictureId,
    },
}

/// Decodes image files on background threads and hands results back to the
/// UI thread over a channel.
pub struct ImageLoader {
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    /// Creates a loader with an empty result queue.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Starts decoding `path` for the given picture on a background thread.
    ///
    /// Oversized photos are downscaled to [`DECODE_MAX_EDGE`] on the longest
    /// edge before upload. The context is woken once the result is queued.
    pub fn spawn_decode(&self, ctx: &egui::Context, id: PictureId, path: PathBuf) {
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let result = match image::open(&path) {
                Ok(img) => {
                    let img = if img.width() > DECODE_MAX_EDGE || img.height() > DECODE_MAX_EDGE {
                        img.thumbnail(DECODE_MAX_EDGE, DECODE_MAX_EDGE)
                    } else {
                        img
                    };
                    let rgba = img.to_rgba8();
                    let size = [rgba.width() as usize, rgba.height() as usize];
                    let image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                    LoadResult::Decoded { id, image }
                }
                Err(err) => {
                    log::warn!("failed to decode {}: {err}", path.display());
                    LoadResult::Failed { id }
                }
            };
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Takes the next finished decode, if any. Never blocks.
    pub fn poll(&self) -> Option<LoadResult> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn scan_picks_image_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jpg"), b"").unwrap();
        fs::write(dir.path().join("a.PNG"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let gallery = scan_directory(dir.path()).unwrap();

        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.pictures[0].title, "a");
        assert_eq!(gallery.pictures[1].title, "b");
    }

    #[test]
    fn scan_applies_sidecar_metadata() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pier.jpg"), b"").unwrap();
        fs::write(dir.path().join("dunes.jpg"), b"").unwrap();
        fs::write(
            dir.path().join("gallery.json"),
            r#"{
                "pier.jpg": {
                    "title": "Sunset at the pier",
                    "caption": "Last light over the bay",
                    "link": "https://example.com/pier"
                }
            }"#,
        )
        .unwrap();

        let gallery = scan_directory(dir.path()).unwrap();

        assert_eq!(gallery.len(), 2);
        let pier = gallery
            .pictures
            .iter()
            .find(|p| p.title == "Sunset at the pier")
            .expect("sidecar title applied");
        assert_eq!(pier.caption.as_deref(), Some("Last light over the bay"));
        assert_eq!(pier.link.as_deref(), Some("https://example.com/pier"));

        let dunes = gallery
            .pictures
            .iter()
            .find(|p| p.title == "dunes")
            .expect("default title for uncovered file");
        assert!(dunes.caption.is_none());
    }

    #[test]
    fn malformed_sidecar_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("gallery.json"), b"not json").unwrap();

        let gallery = scan_directory(dir.path()).unwrap();
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn scan_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_directory(&missing).is_err());
    }

    #[test]
    fn default_title_prettifies_stems() {
        assert_eq!(default_title(Path::new("IMG_2024-06.jpg")), "IMG 2024 06");
        assert_eq!(default_title(Path::new("harbor.png")), "harbor");
    }

    #[test]
    fn empty_directory_yields_empty_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = scan_directory(dir.path()).unwrap();
        assert!(gallery.is_empty());
    }
}
