//! Geometry glue between DOM elements and the core interaction math.

use casalab_core::effects::TrackedBounds;
use web_sys::Element;

/// Current viewport width in CSS pixels, 0.0 if unavailable.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

/// Bounding box of `el` as core-level bounds.
pub fn bounds_of(el: &Element) -> TrackedBounds {
    let rect = el.get_bounding_client_rect();
    TrackedBounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
