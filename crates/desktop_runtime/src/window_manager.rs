//! Window-manager geometry and stacking helpers shared by the reducer and window instances.
//!
//! Everything here is a pure function of its inputs. The minimum-size floor is applied in exactly
//! one place per axis ([`resize_trailing`] / [`resize_leading`]) so every edge and corner shares it.

use crate::{
    model::{AxisSide, ResizeEdge, Viewport, WindowId, WindowRect},
    window_instance::WindowRecord,
};

/// Grows or shrinks an extent from its far end (east/south). The origin never moves.
pub fn resize_trailing(start_len: i32, delta: i32, min_len: i32) -> i32 {
    start_len.saturating_add(delta).max(min_len)
}

/// Grows or shrinks an extent from its near end (west/north), returning `(origin, len)`.
///
/// The far end stays pinned, so once the floor engages the origin freezes at
/// `start_origin + start_len - min_len` instead of following the pointer.
pub fn resize_leading(start_origin: i32, start_len: i32, delta: i32, min_len: i32) -> (i32, i32) {
    let len = start_len.saturating_sub(delta).max(min_len);
    (start_origin + (start_len - len), len)
}

fn resize_axis(
    side: Option<AxisSide>,
    start_origin: i32,
    start_len: i32,
    delta: i32,
    min_len: i32,
) -> (i32, i32) {
    match side {
        Some(AxisSide::Trailing) => (start_origin, resize_trailing(start_len, delta, min_len)),
        Some(AxisSide::Leading) => resize_leading(start_origin, start_len, delta, min_len),
        None => (start_origin, start_len),
    }
}

/// Applies resize deltas for a given edge/corner drag. Each axis clamps independently.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    let (x, w) = resize_axis(edge.horizontal(), start.x, start.w, dx, min_w);
    let (y, h) = resize_axis(edge.vertical(), start.y, start.h, dy, min_h);
    WindowRect { x, y, w, h }
}

/// Translates `rect` the least amount that keeps it inside `viewport`. Size is never touched.
///
/// A window larger than the viewport is pinned to the left/top edge so its title bar stays
/// reachable.
pub fn fit_rect_into_viewport(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let mut x = rect.x;
    let mut y = rect.y;
    if rect.right() > viewport.width {
        x = viewport.width - rect.w;
    }
    if rect.bottom() > viewport.height {
        y = viewport.height - rect.h;
    }
    WindowRect {
        x: x.max(0),
        y: y.max(0),
        ..rect
    }
}

/// Fullscreen geometry: the whole viewport minus the dock strip, floored at the minimum size.
pub fn fullscreen_rect(
    viewport: Viewport,
    dock_reserved_height: i32,
    min_w: i32,
    min_h: i32,
) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width.max(min_w),
        h: (viewport.height - dock_reserved_height).max(min_h),
    }
}

/// Moves `window_id` to the top of the stack and focuses it.
///
/// Returns `false` when the window does not exist.
pub fn raise_window(windows: &mut Vec<WindowRecord>, window_id: WindowId) -> bool {
    let Some(index) = windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    if index + 1 != windows.len() {
        let window = windows.remove(index);
        windows.push(window);
    }
    normalize_window_stack(windows);
    true
}

/// Normalizes z-index ordering and keeps exactly one focused window: the topmost one.
pub fn normalize_window_stack(windows: &mut [WindowRecord]) {
    let top = windows.len();
    for (idx, window) in windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        window.is_focused = idx + 1 == top;
    }
}
