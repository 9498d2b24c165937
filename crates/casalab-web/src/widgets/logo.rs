//! The Casa Bonita brand seal.
//!
//! Arch, keystone, olive branch and wave as stroke paths. With `animate`
//! the paths draw themselves in via the `path-draw` keyframes; hovering
//! an animated seal snaps the strokes solid.

use leptos::prelude::*;

#[component]
pub fn Logo(
    #[prop(optional)] class: &'static str,
    #[prop(default = true)] use_gradient: bool,
    #[prop(optional)] animate: bool,
) -> impl IntoView {
    let stroke = if use_gradient {
        "url(#goldGradient)"
    } else {
        "currentColor"
    };
    let classes = if animate {
        format!("logo logo-animate {class}")
    } else {
        format!("logo {class}")
    };

    view! {
        <svg
            viewBox="0 0 100 100"
            class=classes
            fill="none"
            stroke=stroke
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <defs>
                <linearGradient id="goldGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#D4AF37"/>
                    <stop offset="50%" stop-color="#C5A059"/>
                    <stop offset="100%" stop-color="#B08D55"/>
                </linearGradient>
            </defs>

            // The arch
            <path d="M20 90 V 50 A 30 30 0 0 1 80 50 V 90" stroke-width="2" class="path-draw delay-100"/>
            <path d="M15 90 H 85" stroke-width="2.5" class="path-draw delay-200"/>
            <path d="M25 90 V 50 A 25 25 0 0 1 75 50 V 90" stroke-width="0.75" opacity="0.8" class="path-draw delay-300"/>

            // Keystone
            <path d="M46 20 H 54 L 52 26 H 48 Z" fill=stroke stroke="none" class="fade-in delay-500"/>

            // Olive branch
            <path d="M45 85 Q 35 80 40 50" class="path-draw delay-400"/>
            <path d="M40 60 Q 32 58 35 48" class="path-draw delay-500"/>
            <path d="M42 55 Q 46 52 44 42" class="path-draw delay-600"/>
            <path d="M38 70 Q 32 68 34 62" class="path-draw delay-700"/>

            // The wave
            <path d="M52 85 Q 60 78 70 85" class="path-draw delay-800"/>
            <path d="M57 75 Q 65 68 75 75" class="path-draw delay-900"/>
            <path d="M62 65 Q 67 60 72 65" class="path-draw delay-1000"/>
        </svg>
    }
}
