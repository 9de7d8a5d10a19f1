use leptos::*;

use crate::{
    model::{AppId, PointerPosition, WindowConfig},
    window_instance::WindowRecord,
};

mod placeholders;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub dock_label: &'static str,
    pub window_title: &'static str,
    pub initial_position: (i32, i32),
    pub size: (i32, i32),
    /// Open state used when no flag has ever been persisted for the app.
    pub open_by_default: bool,
    pub summary: &'static str,
}

const APP_REGISTRY: [AppDescriptor; 13] = [
    AppDescriptor {
        app_id: AppId::Terminal,
        dock_label: "Terminal",
        window_title: "Terminal",
        initial_position: (100, 100),
        size: (600, 500),
        open_by_default: true,
        summary: "Command line for the desktop session.",
    },
    AppDescriptor {
        app_id: AppId::FileManager,
        dock_label: "Files",
        window_title: "File Manager",
        initial_position: (100, 80),
        size: (800, 600),
        open_by_default: false,
        summary: "Browse the file registry and send items to the desktop.",
    },
    AppDescriptor {
        app_id: AppId::Notes,
        dock_label: "Notes",
        window_title: "Notes",
        initial_position: (300, 150),
        size: (700, 500),
        open_by_default: false,
        summary: "Plain text notes.",
    },
    AppDescriptor {
        app_id: AppId::Calendar,
        dock_label: "Calendar",
        window_title: "Calendar",
        initial_position: (250, 100),
        size: (800, 600),
        open_by_default: false,
        summary: "Month view and events.",
    },
    AppDescriptor {
        app_id: AppId::Browser,
        dock_label: "Browser",
        window_title: "Web Browser",
        initial_position: (250, 80),
        size: (900, 700),
        open_by_default: false,
        summary: "Tabbed web browsing.",
    },
    AppDescriptor {
        app_id: AppId::Weather,
        dock_label: "Weather",
        window_title: "Weather",
        initial_position: (400, 100),
        size: (400, 500),
        open_by_default: false,
        summary: "Current conditions and forecast.",
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        dock_label: "Calculator",
        window_title: "Calculator",
        initial_position: (600, 200),
        size: (300, 400),
        open_by_default: false,
        summary: "Basic arithmetic.",
    },
    AppDescriptor {
        app_id: AppId::Games,
        dock_label: "Games",
        window_title: "Games",
        initial_position: (150, 50),
        size: (900, 700),
        open_by_default: false,
        summary: "Casual game collection.",
    },
    AppDescriptor {
        app_id: AppId::Vpn,
        dock_label: "VPN",
        window_title: "VPN",
        initial_position: (200, 70),
        size: (900, 600),
        open_by_default: false,
        summary: "Connection status and server list.",
    },
    AppDescriptor {
        app_id: AppId::Youtube,
        dock_label: "YouTube",
        window_title: "YouTube",
        initial_position: (150, 150),
        size: (800, 600),
        open_by_default: false,
        summary: "Video player.",
    },
    AppDescriptor {
        app_id: AppId::YoutubeShorts,
        dock_label: "Shorts",
        window_title: "YouTube Shorts",
        initial_position: (300, 50),
        size: (400, 700),
        open_by_default: false,
        summary: "Vertical short-form video feed.",
    },
    AppDescriptor {
        app_id: AppId::Spotify,
        dock_label: "Spotify",
        window_title: "Spotify",
        initial_position: (200, 120),
        size: (750, 600),
        open_by_default: false,
        summary: "Music player.",
    },
    AppDescriptor {
        app_id: AppId::Settings,
        dock_label: "Settings",
        window_title: "Settings",
        initial_position: (150, 150),
        size: (700, 500),
        open_by_default: false,
        summary: "Desktop preferences.",
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

/// Window construction values for `app_id`; minimums stay at the shell defaults.
pub fn window_config(app_id: AppId) -> WindowConfig {
    let Some(entry) = app_descriptor(app_id) else {
        return WindowConfig::default();
    };
    let (x, y) = entry.initial_position;
    let (width, height) = entry.size;
    WindowConfig {
        title: entry.window_title.to_string(),
        initial_position: PointerPosition::new(x, y),
        width,
        height,
        ..WindowConfig::default()
    }
}

pub fn render_window_contents(window: &WindowRecord) -> View {
    match window.app_id {
        AppId::Terminal => placeholders::mount_terminal_placeholder(),
        AppId::FileManager => placeholders::mount_file_manager(),
        app_id => match app_descriptor(app_id) {
            Some(entry) => placeholders::mount_app_placeholder(entry),
            None => view! { <div class="app-shell">"Unknown app"</div> }.into_view(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_app_has_exactly_one_descriptor() {
        for app_id in AppId::ALL {
            let count = app_registry()
                .iter()
                .filter(|entry| entry.app_id == app_id)
                .count();
            assert_eq!(count, 1, "{app_id:?}");
        }
    }

    #[test]
    fn window_config_uses_per_app_geometry_with_default_minimums() {
        let config = window_config(AppId::Calculator);
        assert_eq!(config.title, "Calculator");
        assert_eq!(config.initial_position, PointerPosition::new(600, 200));
        assert_eq!((config.width, config.height), (300, 400));
        assert_eq!((config.min_width, config.min_height), (300, 200));
    }

    #[test]
    fn only_terminal_opens_by_default() {
        let defaults: Vec<AppId> = app_registry()
            .iter()
            .filter(|entry| entry.open_by_default)
            .map(|entry| entry.app_id)
            .collect();
        assert_eq!(defaults, vec![AppId::Terminal]);
    }
}
