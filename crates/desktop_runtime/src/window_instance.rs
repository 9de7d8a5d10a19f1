//! Per-window drag/resize/fullscreen state machine.
//!
//! A [`WindowRecord`] owns its geometry and its own interaction phase. Nothing here touches another
//! window, which is what keeps interleaved event streams for two windows from interfering.

use thiserror::Error;

use crate::{
    model::{AppId, PointerPosition, ResizeEdge, Viewport, WindowConfig, WindowId, WindowRect},
    window_manager::{fit_rect_into_viewport, fullscreen_rect, resize_rect},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Interaction phase of one window. Drag and resize are exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WindowInteraction {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window's top-left corner at grab time.
        grab_offset: PointerPosition,
    },
    Resizing(ResizeSession),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InteractionError {
    #[error("window is already being dragged")]
    DragInProgress,
    #[error("window is already being resized")]
    ResizeInProgress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub min_width: i32,
    pub min_height: i32,
    pub fullscreen: bool,
    /// Geometry captured on entering fullscreen.
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub interaction: WindowInteraction,
}

impl WindowRecord {
    /// Mounts a window from its construction contract.
    ///
    /// Minimums below one pixel are raised to one, and an initial size below the minimum is raised
    /// to the minimum.
    pub fn open(id: WindowId, app_id: AppId, config: &WindowConfig) -> Self {
        let min_width = config.min_width.max(1);
        let min_height = config.min_height.max(1);
        let rect = WindowRect {
            x: config.initial_position.x,
            y: config.initial_position.y,
            w: config.width,
            h: config.height,
        }
        .clamped_min(min_width, min_height);

        Self {
            id,
            app_id,
            title: config.title.clone(),
            rect,
            min_width,
            min_height,
            fullscreen: false,
            restore_rect: None,
            z_index: 0,
            is_focused: false,
            interaction: WindowInteraction::Idle,
        }
    }

    pub fn is_interacting(&self) -> bool {
        !matches!(self.interaction, WindowInteraction::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, WindowInteraction::Dragging { .. })
    }

    pub fn active_resize_edge(&self) -> Option<ResizeEdge> {
        match &self.interaction {
            WindowInteraction::Resizing(session) => Some(session.edge),
            _ => None,
        }
    }

    /// Cursor shown over the whole frame while an interaction is active.
    pub fn cursor(&self) -> &'static str {
        match &self.interaction {
            WindowInteraction::Idle => "default",
            WindowInteraction::Dragging { .. } => "grabbing",
            WindowInteraction::Resizing(session) => session.edge.cursor(),
        }
    }

    /// Inline style for the window frame, fixed to the viewport at its current rect.
    pub fn css_style(&self) -> String {
        format!(
            "position:fixed;left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};cursor:{};",
            self.rect.x,
            self.rect.y,
            self.rect.w,
            self.rect.h,
            self.z_index,
            self.cursor()
        )
    }

    fn ensure_idle(&self) -> Result<(), InteractionError> {
        match self.interaction {
            WindowInteraction::Idle => Ok(()),
            WindowInteraction::Dragging { .. } => Err(InteractionError::DragInProgress),
            WindowInteraction::Resizing(_) => Err(InteractionError::ResizeInProgress),
        }
    }

    /// `idle -> dragging`. The caller guarantees the pointer-down came from the title bar.
    pub fn begin_drag(&mut self, pointer: PointerPosition) -> Result<(), InteractionError> {
        self.ensure_idle()?;
        self.interaction = WindowInteraction::Dragging {
            grab_offset: pointer.offset_from(self.rect.position()),
        };
        Ok(())
    }

    /// `idle -> resizing(edge)`.
    pub fn begin_resize(
        &mut self,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Result<(), InteractionError> {
        self.ensure_idle()?;
        self.interaction = WindowInteraction::Resizing(ResizeSession {
            edge,
            pointer_start: pointer,
            rect_start: self.rect,
        });
        Ok(())
    }

    /// Applies a pointer sample to the active drag or resize. Returns `true` when geometry changed.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let next = match &self.interaction {
            WindowInteraction::Idle => return false,
            WindowInteraction::Dragging { grab_offset } => WindowRect {
                x: pointer.x - grab_offset.x,
                y: pointer.y - grab_offset.y,
                ..self.rect
            },
            WindowInteraction::Resizing(session) => {
                let delta = pointer.offset_from(session.pointer_start);
                resize_rect(
                    session.rect_start,
                    session.edge,
                    delta.x,
                    delta.y,
                    self.min_width,
                    self.min_height,
                )
            }
        };

        let changed = next != self.rect;
        self.rect = next;
        changed
    }

    /// Returns to idle unconditionally. Returns `true` if a drag or resize was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = self.is_interacting();
        self.interaction = WindowInteraction::Idle;
        was_active
    }

    /// Enters fullscreen (snapshotting geometry) or exits it (restoring the snapshot exactly).
    pub fn toggle_fullscreen(&mut self, viewport: Viewport, dock_reserved_height: i32) {
        if self.fullscreen {
            if let Some(restore_rect) = self.restore_rect.take() {
                self.rect = restore_rect;
            }
            self.fullscreen = false;
        } else {
            self.restore_rect = Some(self.rect);
            self.rect = fullscreen_rect(
                viewport,
                dock_reserved_height,
                self.min_width,
                self.min_height,
            );
            self.fullscreen = true;
        }
    }

    /// Re-clamps position (never size) after the viewport changed. Returns `true` when moved.
    pub fn fit_to_viewport(&mut self, viewport: Viewport) -> bool {
        let fitted = fit_rect_into_viewport(self.rect, viewport);
        let moved = fitted != self.rect;
        self.rect = fitted;
        moved
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window_at(x: i32, y: i32, w: i32, h: i32) -> WindowRecord {
        WindowRecord::open(
            WindowId(1),
            AppId::Terminal,
            &WindowConfig {
                initial_position: PointerPosition::new(x, y),
                width: w,
                height: h,
                ..WindowConfig::default()
            },
        )
    }

    #[test]
    fn open_applies_construction_defaults() {
        let window = WindowRecord::open(WindowId(7), AppId::Notes, &WindowConfig::default());
        assert_eq!(
            window.rect,
            WindowRect {
                x: 50,
                y: 50,
                w: 600,
                h: 500
            }
        );
        assert_eq!((window.min_width, window.min_height), (300, 200));
        assert_eq!(window.title, "Window");
        assert_eq!(window.interaction, WindowInteraction::Idle);
    }

    #[test]
    fn open_raises_undersized_initial_geometry_to_floor() {
        let window = window_at(0, 0, -40, 10);
        assert_eq!((window.rect.w, window.rect.h), (300, 200));
    }

    #[test]
    fn drag_tracks_pointer_minus_grab_offset() {
        let mut window = window_at(100, 80, 600, 500);
        window.begin_drag(PointerPosition::new(130, 90)).unwrap();

        for (x, y) in [(140, 95), (170, 120), (210, 160)] {
            window.pointer_move(PointerPosition::new(x, y));
        }

        assert_eq!(window.rect.position(), PointerPosition::new(180, 150));
        assert_eq!((window.rect.w, window.rect.h), (600, 500));
    }

    #[test]
    fn drag_is_unclamped_off_screen() {
        let mut window = window_at(10, 10, 600, 500);
        window.begin_drag(PointerPosition::new(20, 20)).unwrap();
        window.pointer_move(PointerPosition::new(-5000, -5000));
        assert_eq!(window.rect.position(), PointerPosition::new(-5010, -5010));
    }

    #[test]
    fn pointer_up_returns_to_idle_and_reports_activity() {
        let mut window = window_at(0, 0, 600, 500);
        assert!(!window.pointer_up());

        window.begin_resize(ResizeEdge::East, PointerPosition::new(600, 10)).unwrap();
        assert_eq!(window.active_resize_edge(), Some(ResizeEdge::East));
        assert!(window.pointer_up());
        assert_eq!(window.interaction, WindowInteraction::Idle);
        assert!(!window.pointer_move(PointerPosition::new(900, 10)));
    }

    #[test]
    fn no_direct_transition_between_drag_and_resize() {
        let mut window = window_at(0, 0, 600, 500);
        window.begin_drag(PointerPosition::new(5, 5)).unwrap();
        assert_eq!(
            window.begin_resize(ResizeEdge::South, PointerPosition::new(5, 5)),
            Err(InteractionError::DragInProgress)
        );
        assert!(window.is_dragging());

        window.pointer_up();
        window.begin_resize(ResizeEdge::South, PointerPosition::new(5, 500)).unwrap();
        assert_eq!(
            window.begin_drag(PointerPosition::new(5, 5)),
            Err(InteractionError::ResizeInProgress)
        );
    }

    #[test]
    fn west_resize_freezes_at_floor() {
        let mut window = window_at(100, 100, 400, 300);
        window.begin_resize(ResizeEdge::West, PointerPosition::new(100, 200)).unwrap();
        window.pointer_move(PointerPosition::new(250, 200));

        assert_eq!(window.rect.w, 300);
        assert_eq!(window.rect.x, 200);
    }

    #[test]
    fn resize_uses_start_geometry_not_previous_sample() {
        let mut window = window_at(100, 100, 400, 300);
        window.begin_resize(ResizeEdge::SouthWest, PointerPosition::new(100, 400)).unwrap();
        window.pointer_move(PointerPosition::new(60, 450));
        window.pointer_move(PointerPosition::new(80, 420));

        assert_eq!(
            window.rect,
            WindowRect {
                x: 80,
                y: 100,
                w: 420,
                h: 320
            }
        );
    }

    #[test]
    fn fullscreen_round_trip_restores_exact_geometry() {
        let mut window = window_at(123, 45, 678, 432);
        let before = window.rect;

        window.toggle_fullscreen(Viewport::new(1440, 900), 50);
        assert!(window.fullscreen);
        assert_eq!(
            window.rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1440,
                h: 850
            }
        );

        window.toggle_fullscreen(Viewport::new(1440, 900), 50);
        assert!(!window.fullscreen);
        assert_eq!(window.rect, before);
        assert_eq!(window.restore_rect, None);
    }

    #[test]
    fn viewport_shrink_translates_without_resizing() {
        let mut window = window_at(500, 100, 400, 300);
        assert!(window.fit_to_viewport(Viewport::new(800, 600)));
        assert_eq!(window.rect.right(), 800);
        assert_eq!((window.rect.w, window.rect.h), (400, 300));
        assert!(!window.fit_to_viewport(Viewport::new(800, 600)));
    }

    #[test]
    fn frame_style_is_fixed_and_tracks_interaction_cursor() {
        let mut window = window_at(40, 60, 320, 240);
        window.z_index = 3;
        assert_eq!(
            window.css_style(),
            "position:fixed;left:40px;top:60px;width:320px;height:240px;z-index:3;cursor:default;"
        );

        window
            .begin_resize(ResizeEdge::SouthWest, PointerPosition::new(40, 300))
            .unwrap();
        assert!(window.css_style().ends_with("cursor:nesw-resize;"));

        window.pointer_up();
        window.begin_drag(PointerPosition::new(50, 70)).unwrap();
        assert!(window.css_style().ends_with("cursor:grabbing;"));
    }
}
