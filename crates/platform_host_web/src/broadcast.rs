//! Process-wide shutdown broadcast.
//!
//! Any component (the terminal app, a debugging console) can ask every open window to close by
//! dispatching [`SHUTDOWN_EVENT_NAME`] on `window`. The desktop shell is the only listener.

/// DOM event name carried by the shutdown broadcast.
pub const SHUTDOWN_EVENT_NAME: &str = "desktop:shutdown";

/// Dispatches the shutdown broadcast on `window`. Does nothing off-browser.
pub fn broadcast_shutdown() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::CustomEvent::new(SHUTDOWN_EVENT_NAME) {
            Ok(event) => {
                if let Err(err) = window.dispatch_event(&event) {
                    web_sys::console::warn_1(&err);
                }
            }
            Err(err) => web_sys::console::warn_1(&err),
        }
    }
}
