use super::*;
use crate::apps;

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="desktop-dock" aria-label="Dock">
            {apps::app_registry()
                .iter()
                .map(|entry| {
                    let app_id = entry.app_id;
                    let is_open = Signal::derive(move || state.get().is_app_open(app_id));
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_open.get() { "dock-item open" } else { "dock-item" }
                            }
                            aria-pressed=move || is_open.get().to_string()
                            title=entry.dock_label
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleApp { app_id })
                            }
                        >
                            <span class="dock-item-label">{entry.dock_label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
