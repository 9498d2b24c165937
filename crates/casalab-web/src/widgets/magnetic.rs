//! Magnetic button: pulls toward the cursor on desktop, presses on touch.

use leptos::prelude::*;

use casalab_core::effects::Magnetism;

use crate::dom;

/// Button that translates toward the pointer by the damped center offset.
///
/// Below the mobile breakpoint the pull is disabled and touch start/end
/// drive the pressed look instead. Handlers bail out when the element is
/// not mounted.
#[component]
pub fn MagneticButton(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let btn_ref = NodeRef::<leptos::html::Button>::new();
    let (state, set_state) = signal(Magnetism::default());

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        let Some(btn) = btn_ref.get() else {
            return;
        };
        let bounds = dom::bounds_of(&btn);
        set_state.update(|m| {
            m.pointer_moved(
                dom::viewport_width(),
                ev.client_x() as f64,
                ev.client_y() as f64,
                &bounds,
            );
        });
    };

    view! {
        <button
            node_ref=btn_ref
            class=format!("magnetic-button {class}")
            class=("is-pressed", move || state.get().pressed)
            style=move || state.get().transform()
            on:mousemove=on_mouse_move
            on:mouseleave=move |_| set_state.update(|m| m.pointer_left())
            on:touchstart=move |_| set_state.update(|m| m.touch_started())
            on:touchend=move |_| set_state.update(|m| m.touch_ended())
        >
            {children()}
        </button>
    }
}
