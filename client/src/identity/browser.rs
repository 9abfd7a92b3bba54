//! Thin `web-sys` glue for page location, history, and console logging.
//!
//! Off-browser (SSR, native tests) there is no location: reads return `None`
//! and navigation is a no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::fmt::Debug;

/// Full URL of the current page.
pub fn current_href() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Scheme, host and port of the current page.
pub fn origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Navigate the whole page to `url`.
pub fn redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            report_failure("navigation failed", window.location().set_href(url));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Rewrite the address bar without reloading.
pub fn replace_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            report_failure(
                "address bar update failed",
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)),
            );
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::warn!("{message}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Warn about a failed browser call. Returns `true` when `result` is `Ok`.
pub fn report_failure<T, E: Debug>(context: &str, result: Result<T, E>) -> bool {
    match failure_message(context, &result) {
        Some(message) => {
            warn(&message);
            false
        }
        None => true,
    }
}

fn failure_message<T, E: Debug>(context: &str, result: &Result<T, E>) -> Option<String> {
    result.as_ref().err().map(|e| format!("{context}: {e:?}"))
}
