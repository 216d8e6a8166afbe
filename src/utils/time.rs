//! Wall-clock access shared by wasm and native builds.

/// Current time in milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser; the native fallback keeps callers
/// (and their tests) runnable off-wasm.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
