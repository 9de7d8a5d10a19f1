//! Browser viewport dimensions as seen by the window manager.

use serde::{Deserialize, Serialize};

/// Fallback width used when the host cannot report a viewport.
pub const FALLBACK_VIEWPORT_WIDTH: i32 = 1024;
/// Fallback height used when the host cannot report a viewport.
pub const FALLBACK_VIEWPORT_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Visible area of the page in CSS pixels.
pub struct Viewport {
    /// Inner width.
    pub width: i32,
    /// Inner height.
    pub height: i32,
}

impl Viewport {
    /// Creates a viewport, clamping negative dimensions to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: FALLBACK_VIEWPORT_WIDTH,
            height: FALLBACK_VIEWPORT_HEIGHT,
        }
    }
}
