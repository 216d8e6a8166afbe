//! Console logging helpers.
//!
//! Thin wrappers over `web_sys::console` so code that is also compiled
//! natively (for unit tests) can log without touching the JS runtime.

/// Log a recoverable condition.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warn: {message}");
}

/// Log a failure that was absorbed rather than propagated.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("error: {message}");
}
