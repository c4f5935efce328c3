//! Console Logging Macros
//!
//! In WASM: forwards to `console.log` / `console.warn`
//! On native targets (tests, tooling): compiled to nothing
//!
//! Usage:
//! ```rust
//! use stardust_engine::console_log;
//!
//! let count = 120;
//! console_log!("spawned {} particles", count);
//! ```

/// Log a formatted message to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}

/// Log a formatted warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = ::std::format_args!($($arg)*);
        }
    }};
}
