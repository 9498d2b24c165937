//! Minimal IntersectionObserver binding with scoped cleanup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A live observation. The widget that created it must call
/// [`VisibilityWatch::disconnect`] on cleanup so no callback fires
/// against a disposed component.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityWatch {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

/// Observe `el` at `threshold`, invoking `on_change` with the
/// intersecting flag on every boundary crossing.
///
/// Returns `None` if the platform rejects the observer; callers treat
/// that as "never revealed by scroll" rather than an error.
pub fn watch(
    el: &Element,
    threshold: f64,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<VisibilityWatch> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
            on_change(entry.is_intersecting());
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .inspect_err(|_| leptos::logging::debug_warn!("intersection observer unavailable"))
        .ok()?;
    observer.observe(el);

    Some(VisibilityWatch {
        observer,
        _callback: callback,
    })
}
