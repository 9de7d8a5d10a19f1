//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    apps,
    desktop_icons::{DesktopIconLayer, IconLayerError},
    model::{
        AppId, DesktopSnapshot, DesktopState, FileRecord, PointerListenerOwner, PointerPosition,
        ResizeEdge, Viewport, WindowId,
    },
    window_instance::{InteractionError, WindowRecord},
    window_manager::{normalize_window_stack, raise_window},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open the window for an app. No-op (besides raising it) when it is already open.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Dock activation: close the app's window if open, otherwise open it.
    ToggleApp {
        /// App associated with the dock entry.
        app_id: AppId,
    },
    /// Close a window by id (title-bar close button).
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise and focus a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Pointer-down on a title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Pointer-down on one of the eight resize handles.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Document-level pointer move routed to the window that owns the listener.
    PointerMove {
        /// Window owning the active interaction.
        window_id: WindowId,
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer up routed to the window that owns the listener.
    PointerUp {
        /// Window owning the active interaction.
        window_id: WindowId,
    },
    /// Enter or leave fullscreen.
    ToggleFullscreen {
        /// Window to toggle.
        window_id: WindowId,
        /// Viewport at the time of the toggle.
        viewport: Viewport,
    },
    /// Browser viewport changed; every window re-fits independently.
    ViewportResized {
        /// New viewport.
        viewport: Viewport,
    },
    /// Shutdown broadcast: close every window.
    Shutdown,
    /// Restore persisted state at boot.
    HydrateDesktop {
        /// Snapshot loaded from storage.
        snapshot: DesktopSnapshot,
    },
    /// First-run seeding of the desktop icon set from the file registry.
    SeedDesktopIcons {
        /// Current file registry contents.
        registry: Vec<FileRecord>,
    },
    /// Place a registry item on the desktop.
    AddDesktopIcon {
        /// Record to copy onto the desktop.
        file: FileRecord,
    },
    /// Remove an icon and its position.
    RemoveDesktopIcon {
        /// Icon to remove.
        icon_id: String,
    },
    /// Pointer-down on a desktop icon.
    BeginIconDrag {
        /// Icon being dragged.
        icon_id: String,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Document-level pointer move during an icon drag.
    IconPointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Document-level pointer up during an icon drag.
    IconPointerUp,
    /// Double activation of a desktop icon.
    OpenDesktopIcon {
        /// Icon to open.
        icon_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Persist the open/closed flag for an app.
    PersistAppOpenFlag {
        /// App whose flag changed.
        app_id: AppId,
        /// New flag value.
        open: bool,
    },
    /// Persist both the desktop icon set and the icon position list.
    PersistDesktopIcons,
    /// Attach document-level pointer move/up listeners for an owner.
    AcquirePointerListeners(PointerListenerOwner),
    /// Detach the owner's document-level pointer listeners.
    ReleasePointerListeners(PointerListenerOwner),
    /// Hand a desktop item to the application layer.
    OpenDesktopItem(FileRecord),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that cannot apply to the current state.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The window already has a drag or resize in flight.
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    /// The desktop icon layer rejected the request.
    #[error(transparent)]
    Icons(#[from] IconLayerError),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a missing window, and the
/// wrapped interaction or icon-layer error when a drag cannot start.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            if open_app(state, app_id) {
                effects.push(RuntimeEffect::PersistAppOpenFlag {
                    app_id,
                    open: true,
                });
            }
        }
        DesktopAction::ToggleApp { app_id } => match state.window_for_app(app_id) {
            Some(window) => {
                let window_id = window.id;
                close_window(state, window_id, &mut effects)?;
            }
            None => {
                open_app(state, app_id);
                effects.push(RuntimeEffect::PersistAppOpenFlag {
                    app_id,
                    open: true,
                });
            }
        },
        DesktopAction::CloseWindow { window_id } => {
            close_window(state, window_id, &mut effects)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window(state, window_id)?;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            focus_window(state, window_id)?;
            find_window_mut(state, window_id)?.begin_drag(pointer)?;
            effects.push(RuntimeEffect::AcquirePointerListeners(
                PointerListenerOwner::Window(window_id),
            ));
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            focus_window(state, window_id)?;
            find_window_mut(state, window_id)?.begin_resize(edge, pointer)?;
            effects.push(RuntimeEffect::AcquirePointerListeners(
                PointerListenerOwner::Window(window_id),
            ));
        }
        DesktopAction::PointerMove { window_id, pointer } => {
            find_window_mut(state, window_id)?.pointer_move(pointer);
        }
        DesktopAction::PointerUp { window_id } => {
            if find_window_mut(state, window_id)?.pointer_up() {
                effects.push(RuntimeEffect::ReleasePointerListeners(
                    PointerListenerOwner::Window(window_id),
                ));
            }
        }
        DesktopAction::ToggleFullscreen {
            window_id,
            viewport,
        } => {
            let dock_reserved_height = state.config.dock_reserved_height;
            find_window_mut(state, window_id)?.toggle_fullscreen(viewport, dock_reserved_height);
        }
        DesktopAction::ViewportResized { viewport } => {
            for window in &mut state.windows {
                window.fit_to_viewport(viewport);
            }
        }
        DesktopAction::Shutdown => {
            let open: Vec<WindowId> = state.windows.iter().map(|w| w.id).collect();
            for window_id in open {
                close_window(state, window_id, &mut effects)?;
            }
        }
        DesktopAction::HydrateDesktop { snapshot } => {
            let DesktopSnapshot {
                config,
                open_apps,
                icons,
                icon_positions,
            } = snapshot;
            state.config = config;

            for window in state.windows.iter().filter(|w| w.is_interacting()) {
                effects.push(RuntimeEffect::ReleasePointerListeners(
                    PointerListenerOwner::Window(window.id),
                ));
            }
            if state.icons.is_dragging() {
                effects.push(RuntimeEffect::ReleasePointerListeners(
                    PointerListenerOwner::DesktopIcons,
                ));
            }

            let persisted = (icons.clone(), icon_positions.clone());
            state.icons = DesktopIconLayer::from_persisted(icons, icon_positions, &config.icon_grid);
            if (state.icons.icons.clone(), state.icons.positions.clone()) != persisted {
                effects.push(RuntimeEffect::PersistDesktopIcons);
            }

            state.windows.clear();
            for app_id in open_apps {
                open_app(state, app_id);
            }
        }
        DesktopAction::SeedDesktopIcons { registry } => {
            let grid = state.config.icon_grid;
            if state.icons.seed_from_registry(&registry, &grid) {
                effects.push(RuntimeEffect::PersistDesktopIcons);
            }
            state.file_registry = registry;
        }
        DesktopAction::AddDesktopIcon { file } => {
            let grid = state.config.icon_grid;
            if state.icons.add_icon(file, &grid) {
                effects.push(RuntimeEffect::PersistDesktopIcons);
            }
        }
        DesktopAction::RemoveDesktopIcon { icon_id } => {
            let was_dragging = state
                .icons
                .dragging
                .as_ref()
                .is_some_and(|session| session.icon_id == icon_id);
            if state.icons.remove_icon(&icon_id) {
                if was_dragging {
                    effects.push(RuntimeEffect::ReleasePointerListeners(
                        PointerListenerOwner::DesktopIcons,
                    ));
                }
                effects.push(RuntimeEffect::PersistDesktopIcons);
            }
        }
        DesktopAction::BeginIconDrag { icon_id, pointer } => {
            state.icons.begin_drag(&icon_id, pointer)?;
            effects.push(RuntimeEffect::AcquirePointerListeners(
                PointerListenerOwner::DesktopIcons,
            ));
        }
        DesktopAction::IconPointerMove { pointer } => {
            if state.icons.pointer_move(pointer) {
                effects.push(RuntimeEffect::PersistDesktopIcons);
            }
        }
        DesktopAction::IconPointerUp => {
            if state.icons.pointer_up() {
                effects.push(RuntimeEffect::ReleasePointerListeners(
                    PointerListenerOwner::DesktopIcons,
                ));
            }
        }
        DesktopAction::OpenDesktopIcon { icon_id } => {
            let file = state
                .icons
                .find(&icon_id)
                .cloned()
                .ok_or(IconLayerError::UnknownIcon(icon_id))?;
            effects.push(RuntimeEffect::OpenDesktopItem(file));
        }
    }

    Ok(effects)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    state.next_window_id += 1;
    WindowId(state.next_window_id)
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

fn focus_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    if raise_window(&mut state.windows, window_id) {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound)
    }
}

/// Opens (or raises) the single window for `app_id`. Returns `true` when a window was created.
fn open_app(state: &mut DesktopState, app_id: AppId) -> bool {
    if let Some(existing) = state.window_for_app(app_id) {
        let window_id = existing.id;
        raise_window(&mut state.windows, window_id);
        return false;
    }
    let window_id = next_window_id(state);
    let config = apps::window_config(app_id);
    state
        .windows
        .push(WindowRecord::open(window_id, app_id, &config));
    normalize_window_stack(&mut state.windows);
    true
}

fn close_window(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    let index = state
        .windows
        .iter()
        .position(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)?;
    let window = state.windows.remove(index);
    if window.is_interacting() {
        effects.push(RuntimeEffect::ReleasePointerListeners(
            PointerListenerOwner::Window(window_id),
        ));
    }
    normalize_window_stack(&mut state.windows);
    effects.push(RuntimeEffect::PersistAppOpenFlag {
        app_id: window.app_id,
        open: false,
    });
    Ok(())
}
