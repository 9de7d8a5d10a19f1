//! Core desktop runtime state types shared by the reducer, host, and components.

use serde::{Deserialize, Serialize};

use crate::{desktop_icons::DesktopIconLayer, window_instance::WindowRecord};

pub use platform_host::{FileKind, FileRecord, Viewport};

/// Depth of the side resize strips, in px.
pub const RESIZE_EDGE_THICKNESS: i32 = 1;
/// Side length of the corner resize squares, in px.
pub const RESIZE_CORNER_SIZE: i32 = 4;

pub const DEFAULT_WINDOW_TITLE: &str = "Window";
pub const DEFAULT_WINDOW_X: i32 = 50;
pub const DEFAULT_WINDOW_Y: i32 = 50;
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 500;
pub const DEFAULT_MIN_WINDOW_WIDTH: i32 = 300;
pub const DEFAULT_MIN_WINDOW_HEIGHT: i32 = 200;
pub const DEFAULT_DOCK_RESERVED_HEIGHT: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Terminal,
    FileManager,
    Notes,
    Calendar,
    Browser,
    Weather,
    Calculator,
    Games,
    Vpn,
    Youtube,
    YoutubeShorts,
    Spotify,
    Settings,
}

impl AppId {
    pub const ALL: [AppId; 13] = [
        Self::Terminal,
        Self::FileManager,
        Self::Notes,
        Self::Calendar,
        Self::Browser,
        Self::Weather,
        Self::Calculator,
        Self::Games,
        Self::Vpn,
        Self::Youtube,
        Self::YoutubeShorts,
        Self::Spotify,
        Self::Settings,
    ];

    /// Stable token used in storage keys and DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::FileManager => "file_manager",
            Self::Notes => "notes",
            Self::Calendar => "calendar",
            Self::Browser => "browser",
            Self::Weather => "weather",
            Self::Calculator => "calculator",
            Self::Games => "games",
            Self::Vpn => "vpn",
            Self::Youtube => "youtube",
            Self::YoutubeShorts => "youtube_shorts",
            Self::Spotify => "spotify",
            Self::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`.
    pub fn offset_from(self, origin: PointerPosition) -> PointerPosition {
        PointerPosition {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    pub fn position(self) -> PointerPosition {
        PointerPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_X,
            y: DEFAULT_WINDOW_Y,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One of the eight hot-zones on a window border that start a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Horizontal component of the edge, if any.
    pub fn horizontal(self) -> Option<AxisSide> {
        match self {
            Self::East | Self::NorthEast | Self::SouthEast => Some(AxisSide::Trailing),
            Self::West | Self::NorthWest | Self::SouthWest => Some(AxisSide::Leading),
            Self::North | Self::South => None,
        }
    }

    /// Vertical component of the edge, if any.
    pub fn vertical(self) -> Option<AxisSide> {
        match self {
            Self::South | Self::SouthEast | Self::SouthWest => Some(AxisSide::Trailing),
            Self::North | Self::NorthEast | Self::NorthWest => Some(AxisSide::Leading),
            Self::East | Self::West => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }

    pub fn cursor(self) -> &'static str {
        match self {
            Self::North | Self::South => "ns-resize",
            Self::East | Self::West => "ew-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
        }
    }

    /// Inline style placing the handle along its edge of the window frame.
    ///
    /// Side handles span the whole edge [`RESIZE_EDGE_THICKNESS`] px deep; corner handles are
    /// [`RESIZE_CORNER_SIZE`] px squares drawn over the side strips.
    pub fn handle_style(self) -> String {
        let placement = match self {
            Self::North => format!("top:0;left:0;right:0;height:{RESIZE_EDGE_THICKNESS}px;"),
            Self::South => format!("bottom:0;left:0;right:0;height:{RESIZE_EDGE_THICKNESS}px;"),
            Self::East => format!("top:0;bottom:0;right:0;width:{RESIZE_EDGE_THICKNESS}px;"),
            Self::West => format!("top:0;bottom:0;left:0;width:{RESIZE_EDGE_THICKNESS}px;"),
            Self::NorthEast | Self::NorthWest | Self::SouthEast | Self::SouthWest => {
                let vertical = if self.vertical() == Some(AxisSide::Leading) {
                    "top"
                } else {
                    "bottom"
                };
                let horizontal = if self.horizontal() == Some(AxisSide::Leading) {
                    "left"
                } else {
                    "right"
                };
                format!(
                    "{vertical}:0;{horizontal}:0;width:{RESIZE_CORNER_SIZE}px;height:{RESIZE_CORNER_SIZE}px;z-index:1;"
                )
            }
        };
        format!(
            "position:absolute;{placement}cursor:{};touch-action:none;",
            self.cursor()
        )
    }
}

/// Which end of an axis a resize edge grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Left or top: the origin moves with the pointer.
    Leading,
    /// Right or bottom: only the extent changes.
    Trailing,
}

/// Construction contract for a window instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub initial_position: PointerPosition,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            initial_position: PointerPosition::new(DEFAULT_WINDOW_X, DEFAULT_WINDOW_Y),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            min_width: DEFAULT_MIN_WINDOW_WIDTH,
            min_height: DEFAULT_MIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconGridConfig {
    pub columns: usize,
    pub pitch: i32,
    pub origin_x: i32,
    pub origin_y: i32,
}

impl Default for IconGridConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            pitch: 100,
            origin_x: 20,
            origin_y: 40,
        }
    }
}

/// Shell-wide tunables. Every field falls back to its default when missing from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub dock_reserved_height: i32,
    pub icon_grid: IconGridConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dock_reserved_height: DEFAULT_DOCK_RESERVED_HEIGHT,
            icon_grid: IconGridConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconPosition {
    pub id: String,
    pub x: i32,
    pub y: i32,
}

/// Whose global pointer listeners an effect refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerListenerOwner {
    Window(WindowId),
    DesktopIcons,
}

/// Everything restored from storage at boot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopSnapshot {
    pub config: ShellConfig,
    pub open_apps: Vec<AppId>,
    pub icons: Vec<FileRecord>,
    pub icon_positions: Vec<IconPosition>,
}

/// Authoritative shell state: the window arena ordered bottom-to-top, the icon layer, and config.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
    pub icons: DesktopIconLayer,
    pub config: ShellConfig,
    /// Last file registry read at boot, shown by the file manager window.
    pub file_registry: Vec<FileRecord>,
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn is_app_open(&self, app_id: AppId) -> bool {
        self.window_for_app(app_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_ids_serialize_as_storage_keys() {
        for app_id in AppId::ALL {
            assert_eq!(
                serde_json::to_string(&app_id).expect("serialize"),
                format!("\"{}\"", app_id.key())
            );
        }
    }

    #[test]
    fn empty_shell_config_decodes_to_defaults() {
        let config: ShellConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.dock_reserved_height, 50);
        assert_eq!(config.icon_grid.columns, 5);
    }

    #[test]
    fn corner_edges_combine_both_axes() {
        assert_eq!(ResizeEdge::NorthWest.horizontal(), Some(AxisSide::Leading));
        assert_eq!(ResizeEdge::NorthWest.vertical(), Some(AxisSide::Leading));
        assert_eq!(ResizeEdge::SouthEast.horizontal(), Some(AxisSide::Trailing));
        assert_eq!(ResizeEdge::South.horizontal(), None);
        assert_eq!(ResizeEdge::East.vertical(), None);
        assert_eq!(ResizeEdge::NorthEast.cursor(), "nesw-resize");
    }

    #[test]
    fn resize_handles_are_absolutely_placed_on_their_edge() {
        assert_eq!(
            ResizeEdge::West.handle_style(),
            "position:absolute;top:0;bottom:0;left:0;width:1px;cursor:ew-resize;touch-action:none;"
        );
        assert_eq!(
            ResizeEdge::SouthEast.handle_style(),
            "position:absolute;bottom:0;right:0;width:4px;height:4px;z-index:1;\
             cursor:nwse-resize;touch-action:none;"
        );
        for edge in ResizeEdge::ALL {
            let style = edge.handle_style();
            assert!(style.starts_with("position:absolute;"), "{style}");
            assert!(style.contains(edge.cursor()), "{style}");
        }
    }
}
