//! Desktop runtime persistence adapters for boot hydration and icon/app-flag writes.
//!
//! Every read is lenient: a value that fails to load or decode is logged and treated as absent so
//! a corrupted entry never blocks boot.

use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    apps,
    desktop_icons::{DesktopIconLayer, WELCOME_FILE_NAME},
    model::{AppId, DesktopSnapshot, FileKind, FileRecord, IconPosition, ShellConfig},
};

/// File registry owned by the file manager. Read only from the shell.
pub const FILE_REGISTRY_KEY: &str = "desktop.files.v1";
pub const DESKTOP_ICONS_KEY: &str = "desktop.icons.v1";
pub const DESKTOP_ICON_POSITIONS_KEY: &str = "desktop.icon_positions.v1";
pub const SHELL_CONFIG_KEY: &str = "desktop.shell_config.v1";
const APP_OPEN_KEY_PREFIX: &str = "desktop.app_open.";

pub fn app_open_key(app_id: AppId) -> String {
    format!("{APP_OPEN_KEY_PREFIX}{}", app_id.key())
}

async fn load_lenient<S, T>(store: &S, key: &str) -> Option<T>
where
    S: PrefsStore + ?Sized,
    T: DeserializeOwned,
{
    match load_pref_with::<S, T>(store, key).await {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("ignoring persisted `{key}`: {err}");
            None
        }
    }
}

/// Loads the shell config override, falling back to defaults.
pub async fn load_shell_config<S: PrefsStore + ?Sized>(store: &S) -> ShellConfig {
    load_lenient(store, SHELL_CONFIG_KEY)
        .await
        .unwrap_or_default()
}

/// Loads the file registry. Missing or malformed registries read as empty.
pub async fn load_file_registry<S: PrefsStore + ?Sized>(store: &S) -> Vec<FileRecord> {
    load_lenient(store, FILE_REGISTRY_KEY)
        .await
        .unwrap_or_default()
}

/// Registry written on first boot: four folders, the welcome document, and one sample image.
pub fn default_file_registry() -> Vec<FileRecord> {
    let mut registry: Vec<FileRecord> = ["Documents", "Photos", "Videos", "Music"]
        .into_iter()
        .enumerate()
        .map(|(idx, name)| FileRecord::new((idx + 1).to_string(), name, FileKind::Folder))
        .collect();

    let mut welcome = FileRecord::new("5", WELCOME_FILE_NAME, FileKind::Document);
    welcome.extra.insert(
        "content".to_string(),
        Value::from("Welcome! Drag icons around the desktop or add more from the File Manager."),
    );
    registry.push(welcome);

    let mut image = FileRecord::new("6", "sample_image.jpg", FileKind::Image);
    image.extra.insert(
        "preview".to_string(),
        Value::from("linear-gradient(135deg, #60a5fa, #a78bfa)"),
    );
    registry.push(image);

    registry
}

/// Loads the file registry, writing [`default_file_registry`] when none has been stored yet.
///
/// A stored but malformed registry is left untouched and reads as empty.
pub async fn load_or_init_file_registry<S: PrefsStore + ?Sized>(store: &S) -> Vec<FileRecord> {
    match load_pref_with::<S, Vec<FileRecord>>(store, FILE_REGISTRY_KEY).await {
        Ok(Some(registry)) => registry,
        Ok(None) => {
            let registry = default_file_registry();
            if let Err(err) = save_pref_with(store, FILE_REGISTRY_KEY, &registry).await {
                leptos::logging::warn!("file registry init failed: {err}");
            }
            registry
        }
        Err(err) => {
            leptos::logging::warn!("ignoring persisted `{FILE_REGISTRY_KEY}`: {err}");
            Vec::new()
        }
    }
}

/// Resolves which apps should be open: the stored flag, or the registry default when none exists.
pub async fn load_open_apps<S: PrefsStore + ?Sized>(store: &S) -> Vec<AppId> {
    let mut open = Vec::new();
    for entry in apps::app_registry() {
        let flag = load_lenient::<S, bool>(store, &app_open_key(entry.app_id)).await;
        if flag.unwrap_or(entry.open_by_default) {
            open.push(entry.app_id);
        }
    }
    open
}

/// Loads everything the shell hydrates from at boot.
pub async fn load_desktop_snapshot<S: PrefsStore + ?Sized>(store: &S) -> DesktopSnapshot {
    let config = load_shell_config(store).await;
    let open_apps = load_open_apps(store).await;
    let icons: Vec<FileRecord> = load_lenient(store, DESKTOP_ICONS_KEY)
        .await
        .unwrap_or_default();
    let icon_positions: Vec<IconPosition> = load_lenient(store, DESKTOP_ICON_POSITIONS_KEY)
        .await
        .unwrap_or_default();

    DesktopSnapshot {
        config,
        open_apps,
        icons,
        icon_positions,
    }
}

pub async fn persist_app_open_flag<S: PrefsStore + ?Sized>(
    store: &S,
    app_id: AppId,
    open: bool,
) -> Result<(), PrefsError> {
    save_pref_with(store, &app_open_key(app_id), &open).await
}

/// Writes the icon set and the position list as two separate keys.
pub async fn persist_desktop_icons<S: PrefsStore + ?Sized>(
    store: &S,
    layer: &DesktopIconLayer,
) -> Result<(), PrefsError> {
    save_pref_with(store, DESKTOP_ICONS_KEY, &layer.icons).await?;
    save_pref_with(store, DESKTOP_ICON_POSITIONS_KEY, &layer.positions).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::IconGridConfig;

    #[test]
    fn empty_store_boots_with_terminal_only() {
        let store = MemoryPrefsStore::default();
        let snapshot = block_on(load_desktop_snapshot(&store));
        assert_eq!(snapshot.open_apps, vec![AppId::Terminal]);
        assert_eq!(snapshot.config, ShellConfig::default());
        assert!(snapshot.icons.is_empty());
    }

    #[test]
    fn stored_flags_override_defaults() {
        let store = MemoryPrefsStore::default();
        block_on(persist_app_open_flag(&store, AppId::Terminal, false)).unwrap();
        block_on(persist_app_open_flag(&store, AppId::Spotify, true)).unwrap();

        assert_eq!(store.raw("desktop.app_open.terminal").as_deref(), Some("false"));
        assert_eq!(block_on(load_open_apps(&store)), vec![AppId::Spotify]);
    }

    #[test]
    fn malformed_values_read_as_absent() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(DESKTOP_ICONS_KEY, "{not json");
        store.insert_raw(&app_open_key(AppId::Terminal), "\"yes\"");
        store.insert_raw(SHELL_CONFIG_KEY, "\"tall\"");

        let snapshot = block_on(load_desktop_snapshot(&store));
        assert!(snapshot.icons.is_empty());
        assert_eq!(snapshot.open_apps, vec![AppId::Terminal]);
        assert_eq!(snapshot.config, ShellConfig::default());
    }

    #[test]
    fn partial_shell_config_keeps_other_defaults() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(SHELL_CONFIG_KEY, r#"{"dock_reserved_height":72}"#);

        let config = block_on(load_shell_config(&store));
        assert_eq!(config.dock_reserved_height, 72);
        assert_eq!(config.icon_grid, IconGridConfig::default());
    }

    #[test]
    fn icon_layer_round_trips_through_both_keys() {
        let store = MemoryPrefsStore::default();
        let grid = IconGridConfig::default();
        let mut layer = DesktopIconLayer::default();
        layer.add_icon(FileRecord::new("7", "beach.png", FileKind::Image), &grid);

        block_on(persist_desktop_icons(&store, &layer)).unwrap();
        assert_eq!(
            store.raw(DESKTOP_ICON_POSITIONS_KEY).as_deref(),
            Some(r#"[{"id":"7","x":20,"y":40}]"#)
        );

        let snapshot = block_on(load_desktop_snapshot(&store));
        assert_eq!(snapshot.icons, layer.icons);
        assert_eq!(snapshot.icon_positions, layer.positions);
    }

    #[test]
    fn registry_loads_unknown_item_types() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(
            FILE_REGISTRY_KEY,
            r#"[{"id":"1","name":"Welcome.txt","type":"document","content":"hi"},{"id":"2","name":"x.bin","type":"archive"}]"#,
        );

        let registry = block_on(load_file_registry(&store));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry[1].kind, FileKind::Other);
    }

    #[test]
    fn missing_registry_is_initialized_with_defaults() {
        let store = MemoryPrefsStore::default();

        let registry = block_on(load_or_init_file_registry(&store));
        assert_eq!(registry, default_file_registry());
        assert_eq!(block_on(load_file_registry(&store)), registry);

        let names: Vec<&str> = registry.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Documents", "Photos", "Videos", "Music", WELCOME_FILE_NAME, "sample_image.jpg"]
        );
    }

    #[test]
    fn existing_or_malformed_registry_is_not_overwritten() {
        let store = MemoryPrefsStore::default();
        store.insert_raw(FILE_REGISTRY_KEY, "[]");
        assert!(block_on(load_or_init_file_registry(&store)).is_empty());
        assert_eq!(store.raw(FILE_REGISTRY_KEY).as_deref(), Some("[]"));

        store.insert_raw(FILE_REGISTRY_KEY, "{broken");
        assert!(block_on(load_or_init_file_registry(&store)).is_empty());
        assert_eq!(store.raw(FILE_REGISTRY_KEY).as_deref(), Some("{broken"));
    }

    #[test]
    fn default_registry_seeds_welcome_and_sample_image() {
        let grid = IconGridConfig::default();
        let mut layer = DesktopIconLayer::default();

        assert!(layer.seed_from_registry(&default_file_registry(), &grid));
        let seeded: Vec<(&str, &str)> = layer
            .icons
            .iter()
            .map(|f| (f.id.as_str(), f.name.as_str()))
            .collect();
        assert_eq!(seeded, vec![("5", WELCOME_FILE_NAME), ("6", "sample_image.jpg")]);
    }
}
