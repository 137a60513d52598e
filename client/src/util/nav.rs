//! Full-page navigation helpers.
//!
//! Auth outcomes leave the current page with a real navigation (not a router
//! push) so the next page boots from freshly stored session data.

#[cfg(feature = "hydrate")]
use crate::util::clock;

/// Navigate the browser to `path` after `delay_ms`. No-op outside the browser.
pub fn redirect_after(path: &'static str, delay_ms: u32) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        clock::sleep_ms(delay_ms).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("navigation to {path} failed: {e:?}");
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, delay_ms);
    }
}
