//! Built-in sample gallery.
//!
//! Used when the application starts without a photo directory, so there is
//! always something on the wall to drag around. Sample images are rendered
//! procedurally; no asset files are involved.

use crate::types::{Gallery, ImageSource, Picture};

struct SampleInfo {
    title: &'static str,
    caption: Option<&'static str>,
    link: Option<&'static str>,
    /// Gradient endpoints, RGB.
    from: [u8; 3],
    to: [u8; 3],
}

const SAMPLES: &[SampleInfo] = &[
    SampleInfo {
        title: "Golden hour",
        caption: Some("Last light over the bay"),
        link: None,
        from: [244, 180, 96],
        to: [120, 60, 96],
    },
    SampleInfo {
        title: "Harbor mist",
        caption: None,
        link: None,
        from: [176, 196, 210],
        to: [70, 90, 120],
    },
    SampleInfo {
        title: "Pine ridge",
        caption: Some("Morning walk above the treeline"),
        link: Some("https://www.example.com/pine-ridge"),
        from: [94, 140, 106],
        to: [24, 48, 40],
    },
    SampleInfo {
        title: "Night market",
        caption: Some("Lanterns on Thorn street"),
        link: None,
        from: [250, 120, 90],
        to: [40, 20, 70],
    },
    SampleInfo {
        title: "Dune sea",
        caption: None,
        link: None,
        from: [240, 214, 160],
        to: [160, 110, 70],
    },
    SampleInfo {
        title: "First snow",
        caption: Some("The yard before anyone woke up"),
        link: None,
        from: [235, 240, 250],
        to: [130, 150, 190],
    },
];

/// Builds the built-in sample gallery.
pub fn sample_gallery() -> Gallery {
    let mut gallery = Gallery::new();
    for (seed, info) in SAMPLES.iter().enumerate() {
        let mut picture = Picture::new(info.title, ImageSource::Sample(seed as u32));
        picture.caption = info.caption.map(str::to_string);
        picture.link = info.link.map(str::to_string);
        gallery.push(picture);
    }
    gallery
}

/// Renders the sample image for a seed: a soft two-tone gradient with a
/// little banding so the cards read as distinct photos.
pub fn sample_image(seed: u32) -> egui::ColorImage {
    const W: usize = 480;
    const H: usize = 360;

    let info = &SAMPLES[seed as usize % SAMPLES.len()];
    let mut bytes = Vec::with_capacity(W * H * 4);
    for y in 0..H {
        for x in 0..W {
            let u = x as f32 / (W - 1) as f32;
            let v = y as f32 / (H - 1) as f32;
            let ripple = 0.08 * ((u * 9.0).sin() * (v * 7.0).cos());
            let t = ((u + v) * 0.5 + ripple).clamp(0.0, 1.0);
            for channel in 0..3 {
                let a = info.from[channel] as f32;
                let b = info.to[channel] as f32;
                bytes.push((a + (b - a) * t).round() as u8);
            }
            bytes.push(255);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([W, H], &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_gallery_has_distinct_seeds() {
        let gallery = sample_gallery();
        assert!(!gallery.is_empty());

        for (index, picture) in gallery.pictures.iter().enumerate() {
            assert_eq!(picture.source, ImageSource::Sample(index as u32));
        }
    }

    #[test]
    fn sample_gallery_exercises_caption_fallback_and_links() {
        let gallery = sample_gallery();
        assert!(gallery.pictures.iter().any(|p| p.caption.is_none()));
        assert!(gallery.pictures.iter().any(|p| p.link.is_some()));
    }

    #[test]
    fn sample_image_has_expected_dimensions() {
        let image = sample_image(0);
        assert_eq!(image.size, [480, 360]);
    }

    #[test]
    fn sample_image_seed_wraps() {
        // Out-of-range seeds reuse the palette table instead of panicking.
        let image = sample_image(SAMPLES.len() as u32 + 3);
        assert_eq!(image.size, [480, 360]);
    }
}
