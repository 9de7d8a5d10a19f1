//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; everything that touches storage, DOM listeners, or the page
//! viewport goes through [`DesktopHostContext`].

mod boot;
mod persistence_effects;
mod pointer_listeners;

use std::{cell::RefCell, rc::Rc};

use leptos::{logging, Callback};
use platform_host::PrefsStore;
use platform_host_web::{current_viewport, host_strategy_name, prefs_store};

pub use pointer_listeners::{PointerListenerGuard, PointerListenerRegistry};

use crate::{
    model::{AppId, PointerListenerOwner, Viewport},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    listeners: Rc<RefCell<PointerListenerRegistry>>,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::with_prefs_store(Rc::new(prefs_store()))
    }
}

impl DesktopHostContext {
    /// Builds a host around an explicit preference store.
    pub fn with_prefs_store(prefs: Rc<dyn PrefsStore>) -> Self {
        Self {
            prefs,
            listeners: Rc::new(RefCell::new(PointerListenerRegistry::default())),
            host_strategy_name: host_strategy_name(),
        }
    }

    /// Returns the configured preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Current page viewport.
    pub fn viewport(&self) -> Viewport {
        current_viewport()
    }

    /// Installs boot hydration for the desktop provider: persisted state, then first-run seeding.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistAppOpenFlag { app_id, open } => {
                persistence_effects::persist_app_open_flag(self.clone(), app_id, open)
            }
            RuntimeEffect::PersistDesktopIcons => {
                persistence_effects::persist_desktop_icons(self.clone(), runtime)
            }
            RuntimeEffect::AcquirePointerListeners(owner) => {
                self.acquire_pointer_listeners(runtime, owner)
            }
            RuntimeEffect::ReleasePointerListeners(owner) => {
                self.listeners.borrow_mut().release(owner);
            }
            RuntimeEffect::OpenDesktopItem(file) => {
                logging::log!("open desktop item `{}` ({})", file.name, file.id);
                runtime.dispatch_action(DesktopAction::OpenApp {
                    app_id: AppId::FileManager,
                });
            }
        }
    }

    fn acquire_pointer_listeners(
        &self,
        runtime: DesktopRuntimeContext,
        owner: PointerListenerOwner,
    ) {
        let guard = match owner {
            PointerListenerOwner::Window(window_id) => PointerListenerGuard::attach(
                move |pointer| {
                    runtime.dispatch_action(DesktopAction::PointerMove { window_id, pointer })
                },
                move || runtime.dispatch_action(DesktopAction::PointerUp { window_id }),
            ),
            PointerListenerOwner::DesktopIcons => PointerListenerGuard::attach(
                move |pointer| runtime.dispatch_action(DesktopAction::IconPointerMove { pointer }),
                move || runtime.dispatch_action(DesktopAction::IconPointerUp),
            ),
        };
        self.listeners.borrow_mut().acquire(owner, guard);
    }

    /// Detaches every live pointer listener. Called on shell teardown.
    pub fn release_all_pointer_listeners(&self) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.is_empty() {
            logging::log!("releasing {} pointer listener set(s)", listeners.len());
        }
        listeners.release_all();
    }
}
