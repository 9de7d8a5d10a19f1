//! Desktop icon layer: positioned file shortcuts with their own pointer-drag loop.
//!
//! The layer keeps two parallel collections that are persisted separately: the ordered icon set
//! (copies of registry records) and one [`IconPosition`] per icon. At most one icon drags at a time.

use thiserror::Error;

use crate::model::{FileKind, FileRecord, IconGridConfig, IconPosition, PointerPosition};

/// Registry name of the generated welcome document seeded onto a fresh desktop.
pub const WELCOME_FILE_NAME: &str = "Welcome.txt";
/// Labels longer than this many characters are truncated.
pub const ICON_LABEL_MAX_CHARS: usize = 12;
const ICON_LABEL_KEEP_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDragSession {
    pub icon_id: String,
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IconLayerError {
    #[error("desktop icon `{0}` not found")]
    UnknownIcon(String),
    #[error("desktop icon `{0}` is already being dragged")]
    DragInProgress(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesktopIconLayer {
    pub icons: Vec<FileRecord>,
    pub positions: Vec<IconPosition>,
    pub dragging: Option<IconDragSession>,
}

/// Top-left corner of the `index`-th grid slot, filling rows left to right.
pub fn grid_slot(index: usize, grid: &IconGridConfig) -> (i32, i32) {
    let columns = grid.columns.max(1);
    let row = (index / columns) as i32;
    let col = (index % columns) as i32;
    (
        grid.origin_x + col * grid.pitch,
        grid.origin_y + row * grid.pitch,
    )
}

/// Display label for an icon tile.
pub fn icon_label(name: &str) -> String {
    if name.chars().count() > ICON_LABEL_MAX_CHARS {
        let head: String = name.chars().take(ICON_LABEL_KEEP_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

/// CSS modifier selecting the glyph and tint for a file kind.
pub fn file_kind_class(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Folder => "desktop-icon-folder",
        FileKind::Image => "desktop-icon-image",
        FileKind::Video => "desktop-icon-video",
        FileKind::Audio => "desktop-icon-audio",
        FileKind::Document => "desktop-icon-document",
        FileKind::Other => "desktop-icon-file",
    }
}

impl DesktopIconLayer {
    /// Rebuilds a layer from persisted collections, restoring the one-position-per-icon invariant.
    ///
    /// Duplicate icons keep their first occurrence, positions for unknown or repeated ids are
    /// dropped, and icons without a stored position get the next grid slot.
    pub fn from_persisted(
        icons: Vec<FileRecord>,
        positions: Vec<IconPosition>,
        grid: &IconGridConfig,
    ) -> Self {
        let mut layer = Self::default();
        for icon in icons {
            if layer.find(&icon.id).is_none() {
                layer.icons.push(icon);
            }
        }
        for position in positions {
            let known = layer.find(&position.id).is_some();
            if known && layer.position_of(&position.id).is_none() {
                layer.positions.push(position);
            }
        }
        let missing: Vec<String> = layer
            .icons
            .iter()
            .filter(|icon| layer.position_of(&icon.id).is_none())
            .map(|icon| icon.id.clone())
            .collect();
        for id in missing {
            layer.push_grid_position(id, grid);
        }
        layer
    }

    pub fn find(&self, icon_id: &str) -> Option<&FileRecord> {
        self.icons.iter().find(|icon| icon.id == icon_id)
    }

    pub fn position_of(&self, icon_id: &str) -> Option<&IconPosition> {
        self.positions.iter().find(|pos| pos.id == icon_id)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    fn push_grid_position(&mut self, id: String, grid: &IconGridConfig) {
        let (x, y) = grid_slot(self.positions.len(), grid);
        self.positions.push(IconPosition { id, x, y });
    }

    /// Inline style placing `icon_id` at its stored position within the icon layer.
    pub fn icon_style(&self, icon_id: &str) -> String {
        let (x, y) = self
            .position_of(icon_id)
            .map(|pos| (pos.x, pos.y))
            .unwrap_or_default();
        let dragging = self
            .dragging
            .as_ref()
            .is_some_and(|session| session.icon_id == icon_id);
        let cursor = if dragging { "grabbing" } else { "pointer" };
        format!("position:absolute;left:{x}px;top:{y}px;cursor:{cursor};touch-action:none;")
    }

    /// Adds `file` at the next grid slot. Returns `false` if an icon with that id already exists.
    pub fn add_icon(&mut self, file: FileRecord, grid: &IconGridConfig) -> bool {
        if self.find(&file.id).is_some() {
            return false;
        }
        let id = file.id.clone();
        self.icons.push(file);
        self.push_grid_position(id, grid);
        true
    }

    /// Removes an icon together with its position, ending its drag if it was the dragged one.
    pub fn remove_icon(&mut self, icon_id: &str) -> bool {
        let before = self.icons.len();
        self.icons.retain(|icon| icon.id != icon_id);
        self.positions.retain(|pos| pos.id != icon_id);
        if self
            .dragging
            .as_ref()
            .is_some_and(|session| session.icon_id == icon_id)
        {
            self.dragging = None;
        }
        self.icons.len() != before
    }

    /// Seeds a fresh desktop with the welcome document and the first image in `registry`.
    ///
    /// Skipped entirely once the desktop holds any icon. Returns `true` when anything was added.
    pub fn seed_from_registry(&mut self, registry: &[FileRecord], grid: &IconGridConfig) -> bool {
        if !self.icons.is_empty() {
            return false;
        }

        let welcome = registry.iter().find(|f| f.name == WELCOME_FILE_NAME);
        let first_image = registry.iter().find(|f| f.kind == FileKind::Image);

        let mut added = false;
        for file in [welcome, first_image].into_iter().flatten() {
            added |= self.add_icon(file.clone(), grid);
        }
        added
    }

    /// Starts dragging `icon_id`, remembering where on the tile it was grabbed.
    pub fn begin_drag(
        &mut self,
        icon_id: &str,
        pointer: PointerPosition,
    ) -> Result<(), IconLayerError> {
        if let Some(session) = &self.dragging {
            return Err(IconLayerError::DragInProgress(session.icon_id.clone()));
        }
        let position = self
            .position_of(icon_id)
            .ok_or_else(|| IconLayerError::UnknownIcon(icon_id.to_string()))?;
        let grab_offset = pointer.offset_from(PointerPosition::new(position.x, position.y));

        self.dragging = Some(IconDragSession {
            icon_id: icon_id.to_string(),
            grab_offset,
        });
        Ok(())
    }

    /// Moves only the dragged icon. Returns `true` when its position changed.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let Some(session) = &self.dragging else {
            return false;
        };
        let x = pointer.x - session.grab_offset.x;
        let y = pointer.y - session.grab_offset.y;

        let Some(position) = self
            .positions
            .iter_mut()
            .find(|pos| pos.id == session.icon_id)
        else {
            return false;
        };
        let changed = position.x != x || position.y != y;
        position.x = x;
        position.y = y;
        changed
    }

    /// Ends any drag. Returns `true` if one was active.
    pub fn pointer_up(&mut self) -> bool {
        self.dragging.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file(id: &str, name: &str, kind: FileKind) -> FileRecord {
        FileRecord::new(id, name, kind)
    }

    fn layer_with(ids: &[&str]) -> DesktopIconLayer {
        let grid = IconGridConfig::default();
        let mut layer = DesktopIconLayer::default();
        for id in ids {
            layer.add_icon(file(id, id, FileKind::Document), &grid);
        }
        layer
    }

    #[test]
    fn sixth_icon_wraps_to_second_row() {
        let layer = layer_with(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(
            layer.position_of("e"),
            Some(&IconPosition {
                id: "e".into(),
                x: 420,
                y: 40
            })
        );
        assert_eq!(
            layer.position_of("f"),
            Some(&IconPosition {
                id: "f".into(),
                x: 20,
                y: 140
            })
        );
    }

    #[test]
    fn adding_existing_id_is_a_noop() {
        let grid = IconGridConfig::default();
        let mut layer = layer_with(&["a"]);
        assert!(!layer.add_icon(file("a", "renamed", FileKind::Image), &grid));
        assert_eq!(layer.icons.len(), 1);
        assert_eq!(layer.positions.len(), 1);
        assert_eq!(layer.icons[0].name, "a");
    }

    #[test]
    fn drag_moves_only_the_grabbed_icon() {
        let mut layer = layer_with(&["a", "b"]);
        let b_before = layer.position_of("b").cloned();

        layer.begin_drag("a", PointerPosition::new(30, 55)).unwrap();
        assert!(layer.pointer_move(PointerPosition::new(-400, 900)));
        assert!(layer.pointer_up());

        assert_eq!(
            layer.position_of("a"),
            Some(&IconPosition {
                id: "a".into(),
                x: -410,
                y: 885
            })
        );
        assert_eq!(layer.position_of("b").cloned(), b_before);
        assert!(!layer.pointer_move(PointerPosition::new(0, 0)));
    }

    #[test]
    fn begin_drag_rejects_unknown_and_concurrent_drags() {
        let mut layer = layer_with(&["a", "b"]);
        assert_eq!(
            layer.begin_drag("zzz", PointerPosition::default()),
            Err(IconLayerError::UnknownIcon("zzz".into()))
        );
        layer.begin_drag("a", PointerPosition::default()).unwrap();
        assert_eq!(
            layer.begin_drag("b", PointerPosition::default()),
            Err(IconLayerError::DragInProgress("a".into()))
        );
    }

    #[test]
    fn seeding_adds_welcome_then_first_image_once() {
        let grid = IconGridConfig::default();
        let registry = vec![
            file("1", "song.mp3", FileKind::Audio),
            file("2", "beach.png", FileKind::Image),
            file("3", WELCOME_FILE_NAME, FileKind::Document),
            file("4", "hills.jpg", FileKind::Image),
        ];
        let mut layer = DesktopIconLayer::default();

        assert!(layer.seed_from_registry(&registry, &grid));
        let ids: Vec<&str> = layer.icons.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);

        assert!(!layer.seed_from_registry(&registry, &grid));
        assert_eq!(layer.icons.len(), 2);
    }

    #[test]
    fn seeding_empty_registry_adds_nothing() {
        let mut layer = DesktopIconLayer::default();
        assert!(!layer.seed_from_registry(&[], &IconGridConfig::default()));
        assert!(layer.icons.is_empty());
    }

    #[test]
    fn removing_icon_drops_position_and_active_drag() {
        let mut layer = layer_with(&["a", "b"]);
        layer.begin_drag("a", PointerPosition::default()).unwrap();
        assert!(layer.remove_icon("a"));
        assert!(layer.position_of("a").is_none());
        assert!(!layer.is_dragging());
        assert!(!layer.remove_icon("a"));
    }

    #[test]
    fn persisted_layers_are_normalized() {
        let grid = IconGridConfig::default();
        let layer = DesktopIconLayer::from_persisted(
            vec![
                file("a", "a", FileKind::Other),
                file("b", "b", FileKind::Other),
                file("a", "dup", FileKind::Other),
            ],
            vec![
                IconPosition {
                    id: "a".into(),
                    x: 7,
                    y: 8,
                },
                IconPosition {
                    id: "ghost".into(),
                    x: 1,
                    y: 1,
                },
                IconPosition {
                    id: "a".into(),
                    x: 99,
                    y: 99,
                },
            ],
            &grid,
        );

        assert_eq!(layer.icons.len(), 2);
        assert_eq!(
            layer.positions,
            vec![
                IconPosition {
                    id: "a".into(),
                    x: 7,
                    y: 8
                },
                IconPosition {
                    id: "b".into(),
                    x: 120,
                    y: 40
                },
            ]
        );
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(icon_label("short.txt"), "short.txt");
        assert_eq!(icon_label("exactly12chr"), "exactly12chr");
        assert_eq!(icon_label("Welcome_to_the_desktop.txt"), "Welcome_to...");
    }

    #[test]
    fn icon_style_places_tile_absolutely_and_marks_the_dragged_one() {
        let mut layer = layer_with(&["a", "b"]);
        assert_eq!(
            layer.icon_style("b"),
            "position:absolute;left:120px;top:40px;cursor:pointer;touch-action:none;"
        );

        layer.begin_drag("b", PointerPosition::new(125, 45)).unwrap();
        assert!(layer.icon_style("b").contains("cursor:grabbing;"));
        assert!(layer.icon_style("a").contains("cursor:pointer;"));
    }
}
