use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::PrefsStore;

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            logging::log!("desktop boot via {}", host.host_strategy_name());
            let store = host.prefs_store();
            hydrate_from_store(store.as_ref(), |action| dispatch.call(action)).await;
            dispatch.call(DesktopAction::ViewportResized {
                viewport: host.viewport(),
            });
        });
    });
}

/// Loads persisted desktop state and the file registry, dispatching hydrate then seed.
async fn hydrate_from_store<S, F>(store: &S, mut dispatch: F)
where
    S: PrefsStore + ?Sized,
    F: FnMut(DesktopAction),
{
    let snapshot = persistence::load_desktop_snapshot(store).await;
    logging::log!(
        "desktop hydrate: {} open app(s), {} icon(s)",
        snapshot.open_apps.len(),
        snapshot.icons.len()
    );
    dispatch(DesktopAction::HydrateDesktop { snapshot });

    let registry = persistence::load_or_init_file_registry(store).await;
    dispatch(DesktopAction::SeedDesktopIcons { registry });
}
