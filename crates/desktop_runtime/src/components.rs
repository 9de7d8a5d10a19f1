//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod taskbar;
mod window;

use leptos::*;
use platform_host_web::SHUTDOWN_EVENT_NAME;

use self::{desktop_icons::DesktopIconLayerView, taskbar::Dock, window::DesktopWindow};

use crate::{model::PointerPosition, reducer::DesktopAction};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

/// Only the primary button (or primary touch/pen contact) starts an interaction.
fn is_primary_pointer(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Renders the full desktop shell UI and wires shell-wide browser listeners.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.host.get_value().viewport(),
        });
    });
    let shutdown_listener = window_event_listener_untyped(SHUTDOWN_EVENT_NAME, move |_| {
        runtime.dispatch_action(DesktopAction::Shutdown);
    });
    on_cleanup(move || {
        resize_listener.remove();
        shutdown_listener.remove();
        runtime.host.get_value().release_all_pointer_listeners();
    });

    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <DesktopIconLayerView />
            <div class="desktop-window-layer">
                <For
                    each=move || state.get().windows
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>
            <Dock />
        </div>
    }
}
