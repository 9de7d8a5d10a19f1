use super::*;
use crate::{
    apps,
    model::{ResizeEdge, WindowId},
};

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || runtime.state.get().window(window_id).cloned());

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = window.get_untracked().is_some_and(|w| !w.is_focused);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    let toggle_fullscreen = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleFullscreen {
            window_id,
            viewport: runtime.host.get_value().viewport(),
        })
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let style = win.css_style();
                let focused_class = if win.is_focused { " focused" } else { "" };
                let fullscreen_class = if win.fullscreen { " fullscreen" } else { "" };
                let title = if win.fullscreen {
                    format!("{} (Fullscreen)", win.title)
                } else {
                    win.title.clone()
                };

                view! {
                    <section
                        class=format!("desktop-window{focused_class}{fullscreen_class}")
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=title.clone()
                    >
                        <header class="titlebar" on:pointerdown=begin_move>
                            <span class="titlebar-title">{title}</span>
                            <div class="titlebar-controls">
                                <button
                                    type="button"
                                    aria-label=if win.fullscreen {
                                        "Exit fullscreen"
                                    } else {
                                        "Enter fullscreen"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.stop_propagation();
                                    }
                                    on:click=toggle_fullscreen
                                >
                                    {if win.fullscreen { "\u{2750}" } else { "\u{25a1}" }}
                                </button>
                                <button
                                    type="button"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.stop_propagation();
                                    }
                                    on:click=close
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            {apps::render_window_contents(&win)}
                        </div>
                        {ResizeEdge::ALL
                            .into_iter()
                            .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                            .collect_view()}
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", edge.css_class());
    let style = edge.handle_style();

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_pointer(&ev) {
            return;
        }
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            style=style
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
