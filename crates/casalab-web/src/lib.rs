//! Browser entry point for the Casa Bonita brand laboratory.

pub mod app;
mod clipboard;
mod dom;
mod screen;
mod visibility;
mod widgets;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Tripwire for authoring defects; the page renders either way.
    if let Err(err) = casalab_core::content::validate() {
        leptos::logging::error!("content catalog defect: {err}");
    }

    mount_to_body(app::App);
}
