//! Brand Essence: strategic foundation, manifesto, guest/owner promises.

use leptos::prelude::*;

use casalab_core::content::essence;
use casalab_core::Language;

use crate::widgets::lang_switch::LanguageSwitch;
use crate::widgets::logo::Logo;

#[component]
pub fn EssencePage(
    lang: ReadSignal<Language>,
    set_lang: WriteSignal<Language>,
) -> impl IntoView {
    view! {
        <div class="page page-essence">
            <LanguageSwitch lang=lang set_lang=set_lang/>

            <header class="essence-header">
                <span class="kicker">"Strategic Foundation"</span>
                <h2 class="font-cinzel essence-headline">
                    {move || essence(lang.get()).headline}
                    <span class="font-cormorant gold-text-gradient essence-subhead">
                        {move || essence(lang.get()).subhead}
                    </span>
                </h2>
                <div class="gold-rule"></div>
            </header>

            <div class="manifesto-card">
                <div class="manifesto-topline"></div>
                <h3 class="manifesto-title">{move || essence(lang.get()).manifesto_title}</h3>
                <p class="font-cormorant manifesto-quote">{move || essence(lang.get()).manifesto}</p>
                <div class="manifesto-seal">
                    <Logo class="seal-small"/>
                </div>
            </div>

            <div class="essence-split">
                <div class="essence-column essence-guests">
                    <h3 class="font-cinzel">{move || essence(lang.get()).guest_title}</h3>
                    <p class="font-cormorant essence-word">"\"Sanctuary.\""</p>
                    <p class="font-montserrat essence-body">{move || essence(lang.get()).guest_body}</p>
                </div>
                <div class="essence-column essence-owners">
                    <h3 class="font-cinzel">{move || essence(lang.get()).owner_title}</h3>
                    <p class="font-cormorant essence-word">"\"Stewardship.\""</p>
                    <p class="font-montserrat essence-body">{move || essence(lang.get()).owner_body}</p>
                </div>
            </div>
        </div>
    }
}
