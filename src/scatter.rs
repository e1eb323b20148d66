//! Random placement of cards on the wall.
//!
//! Every card gets a fresh offset and tilt at startup and again on shuffle.
//! Compact viewports use a narrower, upward-biased envelope so cards stay
//! clear of the footer strip; wide viewports scatter symmetrically around
//! each card's home slot.

use rand::Rng;

use crate::constants::{
    COMPACT_SCATTER_MAX_LIFT, COMPACT_SCATTER_MIN_LIFT, COMPACT_SCATTER_RANGE_X,
    COMPACT_SCATTER_ROTATION_RANGE, COMPACT_VIEWPORT_MAX_WIDTH, SCATTER_RANGE,
    SCATTER_ROTATION_RANGE,
};

/// A freshly drawn card placement: offset from the home slot plus tilt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Offset from the card's home slot, in points.
    pub offset: (f32, f32),
    /// Tilt in degrees.
    pub rotation: f32,
}

/// Viewport classes with different scatter envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Regular desktop-sized viewport.
    Wide,
    /// Narrow viewport; cards scatter less and drift upward.
    Compact,
}

impl ViewportClass {
    /// Classifies a viewport by its width in points.
    pub fn from_width(width: f32) -> Self {
        if width <= COMPACT_VIEWPORT_MAX_WIDTH {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

/// Draws a uniformly random placement for one card.
pub fn random_placement(rng: &mut impl Rng, class: ViewportClass) -> Placement {
    match class {
        ViewportClass::Wide => Placement {
            offset: (
                rng.gen_range(-SCATTER_RANGE..=SCATTER_RANGE),
                rng.gen_range(-SCATTER_RANGE..=SCATTER_RANGE),
            ),
            rotation: rng.gen_range(-SCATTER_ROTATION_RANGE..=SCATTER_ROTATION_RANGE),
        },
        ViewportClass::Compact => Placement {
            offset: (
                rng.gen_range(-COMPACT_SCATTER_RANGE_X..=COMPACT_SCATTER_RANGE_X),
                -rng.gen_range(COMPACT_SCATTER_MIN_LIFT..=COMPACT_SCATTER_MAX_LIFT),
            ),
            rotation: rng.gen_range(-COMPACT_SCATTER_ROTATION_RANGE..=COMPACT_SCATTER_ROTATION_RANGE),
        },
    }
}
