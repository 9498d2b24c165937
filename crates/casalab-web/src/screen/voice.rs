//! Tone of Voice: the trilingual campaign sample.

use leptos::prelude::*;

use casalab_core::content::voice;
use casalab_core::Language;

use crate::widgets::icon::Icon;
use crate::widgets::lang_switch::LanguageSwitch;

#[component]
pub fn VoicePage(lang: ReadSignal<Language>, set_lang: WriteSignal<Language>) -> impl IntoView {
    view! {
        <div class="page page-voice">
            <header class="section-header">
                <span class="kicker">"Tone of Voice"</span>
                <h2 class="font-cinzel section-title">"The Trilingual Shift"</h2>
            </header>

            <LanguageSwitch lang=lang set_lang=set_lang/>

            <div class="voice-card">
                <div class="voice-watermark">
                    <Icon name="globe" size=64/>
                </div>
                <h3 class="font-cinzel voice-headline">
                    {move || format!("\"{}\"", voice(lang.get()).headline)}
                </h3>
                <p class="font-cormorant voice-body">{move || voice(lang.get()).body}</p>
                <button class="voice-cta">{move || voice(lang.get()).cta}</button>
            </div>
        </div>
    }
}
