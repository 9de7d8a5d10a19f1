//! Placeholder app bodies mounted inside shell windows.

use leptos::*;

use super::AppDescriptor;
use crate::{desktop_icons::file_kind_class, reducer::DesktopAction, use_desktop_runtime};

pub(super) fn mount_app_placeholder(entry: &'static AppDescriptor) -> View {
    view! {
        <div class="app-shell app-placeholder">
            <p><strong>{entry.window_title}</strong></p>
            <p>{entry.summary}</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_terminal_placeholder() -> View {
    view! { <TerminalPlaceholderApp /> }.into_view()
}

pub(super) fn mount_file_manager() -> View {
    view! { <FileManagerApp /> }.into_view()
}

#[component]
fn FileManagerApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let registry = Signal::derive(move || state.with(|s| s.file_registry.clone()));

    view! {
        <div class="app-shell app-file-manager">
            <Show
                when=move || !registry.with(Vec::is_empty)
                fallback=|| view! { <p class="app-empty">"No files in the registry."</p> }
            >
                <ul class="file-list">
                    <For each=move || registry.get() key=|file| file.id.clone() let:file>
                        {
                            let icon_id = file.id.clone();
                            let on_desktop = Signal::derive({
                                let icon_id = icon_id.clone();
                                move || state.with(|s| s.icons.find(&icon_id).is_some())
                            });
                            let action_file = file.clone();
                            view! {
                                <li class=format!("file-entry {}", file_kind_class(file.kind))>
                                    <span class="file-name">{file.name.clone()}</span>
                                    <button
                                        type="button"
                                        class="app-action"
                                        on:click=move |_| {
                                            let action = if on_desktop.get_untracked() {
                                                DesktopAction::RemoveDesktopIcon {
                                                    icon_id: icon_id.clone(),
                                                }
                                            } else {
                                                DesktopAction::AddDesktopIcon {
                                                    file: action_file.clone(),
                                                }
                                            };
                                            runtime.dispatch_action(action);
                                        }
                                    >
                                        {move || {
                                            if on_desktop.get() {
                                                "Remove from desktop"
                                            } else {
                                                "Add to desktop"
                                            }
                                        }}
                                    </button>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn TerminalPlaceholderApp() -> impl IntoView {
    view! {
        <div class="app-shell app-terminal-shell">
            <pre class="app-terminal-output">"guest@desktop:~$ "</pre>
            <div class="app-toolbar" role="group" aria-label="Session controls">
                <button
                    type="button"
                    class="app-action"
                    on:click=move |_| platform_host_web::broadcast_shutdown()
                >
                    "Shut down"
                </button>
            </div>
        </div>
    }
}
