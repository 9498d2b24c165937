//! Pill switcher for the trilingual sections.

use leptos::prelude::*;

use casalab_core::Language;

#[component]
pub fn LanguageSwitch(
    lang: ReadSignal<Language>,
    set_lang: WriteSignal<Language>,
) -> impl IntoView {
    view! {
        <div class="lang-switch">
            {Language::ALL
                .iter()
                .map(|&l| {
                    view! {
                        <button
                            class="lang-pill"
                            class=("lang-pill-active", move || lang.get() == l)
                            on:click=move |_| set_lang.set(l)
                        >
                            {l.key()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
