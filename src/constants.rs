//! Shared application-wide constants.
//! Centralizes tweakable values used across layout, interaction, and timers.

use std::time::Duration;

// Card dimensions
/// Card width in points, including the frame.
pub const CARD_WIDTH: f32 = 180.0;
/// Card height in points, including the frame and caption strip.
pub const CARD_HEIGHT: f32 = 214.0;
/// Inset between the frame edge and the photo area.
pub const CARD_IMAGE_INSET: f32 = 10.0;
/// Height of the caption strip under the photo area.
pub const CARD_CAPTION_STRIP: f32 = 34.0;
/// Spacing between home slots when laying cards out.
pub const CARD_GAP: f32 = 26.0;
/// Radius of the link badge in the card corner.
pub const LINK_BADGE_RADIUS: f32 = 11.0;

// Dragging
/// Divisor applied to each viewport dimension to obtain the drag clamp:
/// offsets are limited to ±(dimension / divisor) per axis.
pub const OFFSET_LIMIT_DIVISOR: f32 = 1.5;

// Scatter
/// Viewports at most this wide use the compact scatter envelope.
pub const COMPACT_VIEWPORT_MAX_WIDTH: f32 = 768.0;
/// Symmetric offset range on wide viewports, per axis.
pub const SCATTER_RANGE: f32 = 100.0;
/// Symmetric rotation range on wide viewports, in degrees.
pub const SCATTER_ROTATION_RANGE: f32 = SCATTER_RANGE / 4.0;
/// Horizontal offset range on compact viewports.
pub const COMPACT_SCATTER_RANGE_X: f32 = 40.0;
/// Minimum upward offset on compact viewports (keeps cards off the footer).
pub const COMPACT_SCATTER_MIN_LIFT: f32 = 30.0;
/// Maximum upward offset on compact viewports.
pub const COMPACT_SCATTER_MAX_LIFT: f32 = 90.0;
/// Symmetric rotation range on compact viewports, in degrees.
pub const COMPACT_SCATTER_ROTATION_RANGE: f32 = 10.0;

// Timers
/// How long the welcome banner stays up before dismissing itself.
pub const WELCOME_DISMISS_DELAY: Duration = Duration::from_secs(5);
/// Delay between closing the lightbox and dropping the displayed image,
/// so the closing frame never shows an empty viewer.
pub const LIGHTBOX_CLEAR_DELAY: Duration = Duration::from_millis(200);
/// How long the shuffle glow lingers on the cards.
pub const SHUFFLE_GLOW_DURATION: Duration = Duration::from_millis(350);

// Saving
/// Extension appended to the suggested filename when saving a copy.
pub const SAVE_EXTENSION: &str = "jpg";

// Loading
/// Longest edge that decoded photos are downscaled to before upload.
pub const DECODE_MAX_EDGE: u32 = 1600;
