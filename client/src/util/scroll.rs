//! Smooth scrolling to in-page sections.
//!
//! Looks the target up by element id and calls `scrollIntoView` with smooth
//! behavior. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! A missing section is not an error: the call silently does nothing. SSR
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll the section with element id `anchor` into view.
///
/// Returns `true` when the element was found and scrolled to.
pub fn scroll_to_section(anchor: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(el) = doc.get_element_by_id(anchor) else {
            log::debug!("scroll target #{anchor} not found");
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = anchor;
        false
    }
}
