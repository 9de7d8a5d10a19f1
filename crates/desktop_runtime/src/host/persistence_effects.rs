use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{
    host::DesktopHostContext, model::AppId, persistence, runtime_context::DesktopRuntimeContext,
};

pub(super) fn persist_app_open_flag(host: DesktopHostContext, app_id: AppId, open: bool) {
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = persistence::persist_app_open_flag(store.as_ref(), app_id, open).await {
            logging::warn!("persist open flag for `{}` failed: {err}", app_id.key());
        }
    });
}

pub(super) fn persist_desktop_icons(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    let layer = runtime.state.get_untracked().icons;
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = persistence::persist_desktop_icons(store.as_ref(), &layer).await {
            logging::warn!("persist desktop icons failed: {err}");
        }
    });
}
