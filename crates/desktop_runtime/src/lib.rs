pub mod apps;
pub mod components;
pub mod desktop_icons;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod window_instance;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use desktop_icons::{DesktopIconLayer, IconLayerError};
pub use model::*;
pub use persistence::{load_desktop_snapshot, persist_app_open_flag, persist_desktop_icons};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_instance::{InteractionError, WindowInteraction, WindowRecord};
