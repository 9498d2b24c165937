//! Identity System: the animated brand seal and its applications.

use leptos::prelude::*;

use casalab_core::palette;
use casalab_core::state::CopyFeedback;

use crate::clipboard;
use crate::widgets::icon::Icon;
use crate::widgets::logo::Logo;

#[component]
pub fn LogosPage(presenting: Signal<bool>, feedback: RwSignal<CopyFeedback>) -> impl IntoView {
    let pending = clipboard::pending_expiry();
    on_cleanup(move || clipboard::cancel_pending(pending));

    // Design tokens handed out as JSON; the same confirmation surface as
    // the palette swatches.
    let tokens = StoredValue::new(palette::tokens_json());
    let copy_tokens = move |_| clipboard::copy_text(feedback, pending, tokens.get_value());
    let tokens_copied = move || feedback.with(|f| tokens.with_value(|t| f.is_confirmed(t)));

    view! {
        <div class="page page-logos">
            <header class="section-header section-header-split">
                <div>
                    <span class="kicker">"Visual Identity"</span>
                    <h2 class="font-cinzel section-title">"The Brand Seal"</h2>
                </div>
                <Show when=move || !presenting.get()>
                    <div class="download-assets">
                        <p class="download-label">"Download Assets"</p>
                        <button class="download-button" on:click=copy_tokens>
                            {move || {
                                if tokens_copied() {
                                    view! { <Icon name="check" size=12/> }
                                } else {
                                    view! { <Icon name="share" size=12/> }
                                }
                            }}
                        </button>
                    </div>
                </Show>
            </header>

            <div class="seal-hero">
                <span class="seal-hero-hint">"Hover to Animate"</span>
                <div class="seal-hero-lockup">
                    <Logo class="seal-large" animate=true/>
                    <h1 class="font-cinzel seal-wordmark">"CASA BONITA"</h1>
                    <div class="seal-origin">
                        <div class="gold-tick"></div>
                        <p class="font-montserrat seal-place">"Mallorca"</p>
                        <div class="gold-tick"></div>
                    </div>
                </div>
            </div>

            <div class="seal-application">
                <div class="application-card">
                    <span class="application-hint">"Favicon / Social"</span>
                    <div class="application-disc">
                        <Logo class="seal-medium"/>
                    </div>
                </div>
            </div>
        </div>
    }
}
