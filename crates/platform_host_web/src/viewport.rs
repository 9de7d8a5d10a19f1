//! Page viewport queries.

use platform_host::Viewport;

/// Returns `window.innerWidth` x `window.innerHeight`, or the fallback viewport off-browser.
pub fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                value.ok().and_then(|value| value.as_f64()).map(|v| v as i32)
            };
            let fallback = Viewport::default();
            return Viewport::new(
                read(window.inner_width()).unwrap_or(fallback.width),
                read(window.inner_height()).unwrap_or(fallback.height),
            );
        }
    }

    Viewport::default()
}
