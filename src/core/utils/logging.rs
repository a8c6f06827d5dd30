//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys`.
//! Natively they are dropped: JS imports must never be called off-wasm.
//!
//! Usage:
//! ```rust
//! use particula_rope::console_log;
//!
//! let segments = 10;
//! console_log!("rope ready with {} segments", segments);
//! ```

#[cfg(target_arch = "wasm32")]
pub fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_msg: &str) {}

/// `format!`-style wrapper around `console.log`
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::utils::logging::log(&format!($($arg)*))
    };
}

/// `format!`-style wrapper around `console.warn`
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::utils::logging::warn(&format!($($arg)*))
    };
}
