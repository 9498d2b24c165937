//! Spotlight reveal: a dark panel unmasked around the tracked pointer.

use leptos::prelude::*;

use casalab_core::effects::{Spotlight, MOBILE_BREAKPOINT};

use crate::dom;

/// Mouse moves and the first active touch both feed the same
/// container-relative focus point; the mask starts at the container
/// origin until the first move.
#[component]
pub fn SpotlightEffect() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let (spot, set_spot) = signal(Spotlight::default());

    let track = move |client_x: f64, client_y: f64| {
        let Some(el) = container_ref.get() else {
            return;
        };
        let bounds = dom::bounds_of(&el);
        set_spot.update(|s| s.moved(client_x, client_y, &bounds));
    };

    let hint = if dom::viewport_width() < MOBILE_BREAKPOINT {
        "Touch & Drag to reveal"
    } else {
        "Move cursor to reveal"
    };

    view! {
        <div
            class="spotlight"
            node_ref=container_ref
            on:mousemove=move |ev| track(ev.client_x() as f64, ev.client_y() as f64)
            on:touchmove=move |ev: leptos::ev::TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    track(touch.client_x() as f64, touch.client_y() as f64);
                }
            }
        >
            <div class="spotlight-copy">
                <span class="font-cinzel spotlight-word">"DISCOVER"</span>
                <span class="font-cormorant spotlight-quote">"\"The beauty in the dark.\""</span>
            </div>
            <div class="spotlight-mask" style=move || spot.get().mask_css()></div>
            <div class="spotlight-hint">{hint}</div>
        </div>
    }
}
