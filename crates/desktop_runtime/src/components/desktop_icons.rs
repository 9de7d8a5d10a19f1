use super::*;
use crate::desktop_icons::{file_kind_class, icon_label};

#[component]
pub(super) fn DesktopIconLayerView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div class="desktop-icon-layer" style="position:fixed;inset:0;">
            <For
                each=move || state.get().icons.icons
                key=|icon| icon.id.clone()
                let:icon
            >
                {{
                    let icon_id = icon.id.clone();
                    let drag_id = icon.id.clone();
                    let open_id = icon.id.clone();
                    let style =
                        Signal::derive(move || state.with(|s| s.icons.icon_style(&icon_id)));
                    view! {
                        <div
                            class=format!("desktop-icon {}", file_kind_class(icon.kind))
                            style=move || style.get()
                            title=icon.name.clone()
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                if !is_primary_pointer(&ev) {
                                    return;
                                }
                                stop_pointer_event(&ev);
                                runtime.dispatch_action(DesktopAction::BeginIconDrag {
                                    icon_id: drag_id.clone(),
                                    pointer: pointer_from_pointer_event(&ev),
                                });
                            }
                            on:dblclick=move |_| {
                                runtime.dispatch_action(DesktopAction::OpenDesktopIcon {
                                    icon_id: open_id.clone(),
                                });
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true"></span>
                            <span class="desktop-icon-label">{icon_label(&icon.name)}</span>
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
