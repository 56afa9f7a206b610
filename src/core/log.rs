//! Console logging macros
//!
//! In the browser: `web_sys::console` (shows up in devtools)
//! Natively (tests, benches): stderr, so no JS import is ever called off-wasm
//!
//! Usage:
//! ```rust
//! use orbit_bounce_engine::{log_info, log_warn};
//!
//! log_info!("spawned {} bodies", 5);
//! log_warn!("texture {} failed to load", "earth_tx.jpg");
//! ```

/// Informational line (`console.log` on wasm)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("[info] {}", msg);
        }
    }};
}

/// Recoverable problem (`console.warn` on wasm)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&msg.into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("[warn] {}", msg);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_log_macros_accept_format_args() {
        log_info!("frame {} dt {:.3}", 1, 0.5);
        log_warn!("body {} unknown", 42);
    }
}
