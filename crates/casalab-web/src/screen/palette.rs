//! Color Palette: swatches with click-to-copy hex codes.

use leptos::prelude::*;

use casalab_core::palette::PALETTE;
use casalab_core::state::CopyFeedback;

use crate::clipboard;
use crate::widgets::icon::Icon;

#[component]
pub fn PalettePage(feedback: RwSignal<CopyFeedback>) -> impl IntoView {
    let pending = clipboard::pending_expiry();
    on_cleanup(move || clipboard::cancel_pending(pending));

    view! {
        <div class="page page-palette">
            <header class="section-header">
                <span class="kicker">"Color System"</span>
                <h2 class="font-cinzel section-title">"Earth, Sea & Stone"</h2>
            </header>

            <div class="palette-list">
                {PALETTE
                    .iter()
                    .enumerate()
                    .map(|(index, color)| {
                        view! {
                            <div class="palette-row">
                                <div
                                    class="swatch"
                                    style=format!("background: {};", color.swatch_background())
                                    on:click=move |_| {
                                        clipboard::copy_text(
                                            feedback,
                                            pending,
                                            color.hex.to_string(),
                                        )
                                    }
                                >
                                    // the gold lead swatch gets the shimmer pass
                                    {(index == 0)
                                        .then(|| view! { <div class="swatch-shine"></div> })}
                                    <div class="swatch-chip">
                                        <Icon name="copy" size=12/>
                                        <span>
                                            {move || {
                                                if feedback.with(|f| f.is_confirmed(color.hex)) {
                                                    "COPIED"
                                                } else {
                                                    color.hex
                                                }
                                            }}
                                        </span>
                                    </div>
                                </div>

                                <div class="palette-meta">
                                    <h3 class="font-cinzel palette-name">{color.name}</h3>
                                    <p class="palette-usage">{color.usage}</p>
                                    <div class="palette-codes">
                                        <div>
                                            <span class="code-label">"HEX"</span>
                                            <code>{color.hex}</code>
                                        </div>
                                        <div>
                                            <span class="code-label">"CMYK"</span>
                                            <code>{color.cmyk}</code>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
