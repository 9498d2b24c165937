//! Typography: the three-family system and the live contextual tester.

use leptos::prelude::*;

use casalab_core::content::{BODY_SPECIMEN_TEXT, TYPE_SPECIMENS};

#[component]
pub fn TypographyPage(
    demo_text: ReadSignal<String>,
    set_demo_text: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="page page-typography">
            <header class="section-header">
                <span class="kicker">"Typography"</span>
                <h2 class="font-cinzel section-title">"The \"Triple Threat\""</h2>
            </header>

            <div class="type-board">
                {TYPE_SPECIMENS
                    .iter()
                    .map(|s| {
                        view! {
                            <div class="type-row">
                                <span class="type-role">{s.role}</span>
                                {if s.css_class == "font-montserrat" {
                                    view! {
                                        <p class="type-sample-body font-montserrat">
                                            {BODY_SPECIMEN_TEXT}
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <h2 class=format!(
                                            "type-sample {}",
                                            s.css_class,
                                        )>{s.family}</h2>
                                    }
                                        .into_any()
                                }}
                                <span class="type-remit">{s.remit}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="type-tester">
                <h4 class="kicker-dark">"Contextual Example"</h4>
                <h2 class="font-cinzel tester-display">{move || demo_text.get()}</h2>
                <p class="font-cormorant tester-quote">"\"Where heritage meets silence.\""</p>
                <input
                    type="text"
                    class="font-cinzel tester-input"
                    prop:value=move || demo_text.get()
                    on:input=move |ev| set_demo_text.set(event_target_value(&ev))
                    placeholder="Type to test..."
                />
            </div>
        </div>
    }
}
