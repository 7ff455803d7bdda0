/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out
/// in production (release) builds by default. Errors and warnings should use
/// `leptos::logging::error!` and `leptos::logging::warn!` directly so that
/// operators always see them.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Output goes to the browser console on wasm and to stdout elsewhere.
///
/// # Examples
///
/// ```rust
/// use corridor_graph::logging::log;
///
/// let trains = 12;
/// log!("Applied snapshot with {} trains", trains);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!("{}", format!($($arg),+));
        }
    };
}

pub use log;
