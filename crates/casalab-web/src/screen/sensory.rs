//! Sensory Identity: scent, sound and touch cards.

use leptos::prelude::*;

use casalab_core::content::SENSORY_CARDS;

use crate::widgets::icon::Icon;

#[component]
pub fn SensoryPage() -> impl IntoView {
    view! {
        <div class="page page-sensory">
            <header class="section-header">
                <span class="kicker">"Sensory Architecture"</span>
                <h2 class="font-cinzel section-title">"Beyond the Visual"</h2>
            </header>

            <div class="sensory-grid">
                {SENSORY_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div
                                class="sensory-card"
                                style=format!("border-top-color: {};", card.accent_hex)
                            >
                                <div
                                    class="sensory-glyph"
                                    style=format!("color: {};", card.accent_hex)
                                >
                                    <Icon name=card.icon size=20/>
                                </div>
                                <h3 class="font-cinzel sensory-title">{card.title}</h3>
                                <span class="sensory-tagline">{card.tagline}</span>
                                <p class="font-montserrat sensory-body">{card.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
