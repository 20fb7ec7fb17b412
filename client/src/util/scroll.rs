//! Chat viewport auto-scroll helpers.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// How far above the bottom still counts as "at the bottom", in CSS pixels.
pub const SCROLL_BOTTOM_SLACK_PX: f64 = 50.0;

#[must_use]
pub fn is_at_bottom(scroll_height: f64, scroll_top: f64, client_height: f64) -> bool {
    scroll_height - scroll_top <= client_height + SCROLL_BOTTOM_SLACK_PX
}

/// Read the element's scroll metrics and apply [`is_at_bottom`].
#[cfg(feature = "hydrate")]
pub fn element_at_bottom(el: &web_sys::Element) -> bool {
    is_at_bottom(f64::from(el.scroll_height()), f64::from(el.scroll_top()), f64::from(el.client_height()))
}

#[cfg(feature = "hydrate")]
pub fn scroll_to_bottom(el: &web_sys::Element) {
    el.set_scroll_top(el.scroll_height());
}
