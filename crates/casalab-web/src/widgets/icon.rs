//! Inline stroke icons.
//!
//! The small lucide-style glyph set the page actually uses, cut as
//! 24x24 stroke paths so they inherit `currentColor` from the context.

use leptos::prelude::*;

/// Inner SVG markup for a named glyph. Unknown names render empty.
fn glyph_markup(name: &str) -> &'static str {
    match name {
        "anchor" => {
            r##"<circle cx="12" cy="5" r="3"/><line x1="12" y1="22" x2="12" y2="8"/><path d="M5 12H2a10 10 0 0 0 20 0h-3"/>"##
        }
        "layout" => {
            r##"<rect x="3" y="3" width="18" height="18" rx="2"/><line x1="3" y1="9" x2="21" y2="9"/><line x1="9" y1="21" x2="9" y2="9"/>"##
        }
        "type" => {
            r##"<polyline points="4 7 4 4 20 4 20 7"/><line x1="9" y1="20" x2="15" y2="20"/><line x1="12" y1="4" x2="12" y2="20"/>"##
        }
        "palette" => {
            r##"<path d="M12 22a10 10 0 1 1 10-10c0 2.2-1.8 4-4 4h-2.5a2.5 2.5 0 0 0-1.9 4.1c.4.5.4 1.2 0 1.6-.4.2-1 .3-1.6.3z"/><circle cx="7.5" cy="11.5" r="1"/><circle cx="11" cy="7.5" r="1"/><circle cx="15.5" cy="9.5" r="1"/>"##
        }
        "wind" => {
            r##"<path d="M9.6 4.6A2 2 0 1 1 11 8H2"/><path d="M12.6 19.4A2 2 0 1 0 14 16H2"/><path d="M17.5 8a2.5 2.5 0 1 1 2 4H2"/>"##
        }
        "globe" => {
            r##"<circle cx="12" cy="12" r="10"/><line x1="2" y1="12" x2="22" y2="12"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"##
        }
        "sparkles" => {
            r##"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3z"/>"##
        }
        "menu" => {
            r##"<line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="20" y2="18"/>"##
        }
        "x" => {
            r##"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"##
        }
        "eye" => {
            r##"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z"/><circle cx="12" cy="12" r="3"/>"##
        }
        "copy" => {
            r##"<rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>"##
        }
        "check" => r##"<polyline points="20 6 9 17 4 12"/>"##,
        "share" => {
            r##"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><line x1="8.6" y1="13.5" x2="15.4" y2="17.5"/><line x1="8.6" y1="10.5" x2="15.4" y2="6.5"/>"##
        }
        "mouse-pointer" => r##"<path d="m3 3 7.07 16.97 2.51-7.39 7.39-2.51L3 3z"/>"##,
        "smartphone" => {
            r##"<rect x="5" y="2" width="14" height="20" rx="2"/><line x1="12" y1="18" x2="12.01" y2="18"/>"##
        }
        "mic" => {
            r##"<path d="M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z"/><path d="M19 10v2a7 7 0 0 1-14 0v-2"/><line x1="12" y1="19" x2="12" y2="22"/>"##
        }
        "hexagon" => {
            r##"<path d="M21 16.05V7.95a2 2 0 0 0-1-1.73l-7-4.05a2 2 0 0 0-2 0l-7 4.05a2 2 0 0 0-1 1.73v8.1a2 2 0 0 0 1 1.73l7 4.05a2 2 0 0 0 2 0l7-4.05a2 2 0 0 0 1-1.73z"/>"##
        }
        _ => "",
    }
}

#[component]
pub fn Icon(name: &'static str, #[prop(default = 16)] size: u32) -> impl IntoView {
    view! {
        <svg
            class="icon"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            inner_html=glyph_markup(name)
        ></svg>
    }
}
