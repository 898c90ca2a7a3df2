// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    /// The page origin, e.g. `https://eurodol.example.com`.
    pub fn current_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    /// The browser's preferred language tag, e.g. `fr-FR`.
    pub fn browser_language() -> Option<String> {
        web_sys::window()?.navigator().language()
    }

    pub async fn navigate_to(url: &str) -> bool {
        web_sys::window()
            .map(|win| win.location().set_href(url).is_ok())
            .unwrap_or(false)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus::prelude::*;

    // not known outside the browser; the client falls back to the configured endpoint.
    pub fn current_origin() -> Option<String> {
        None
    }

    pub fn browser_language() -> Option<String> {
        None
    }

    /// Navigates the hosting webview, if any. False when no renderer
    /// could run the script.
    pub async fn navigate_to(url: &str) -> bool {
        document::eval(&format!("window.location.href = {:?};", url))
            .await
            .is_ok()
    }
}
