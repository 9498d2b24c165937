//! Digital Experience: the five-chapter interactive tour.

use leptos::prelude::*;

use casalab_core::content::{EffectChapter, EFFECT_CHAPTERS};

use crate::widgets::icon::Icon;
use crate::widgets::magnetic::MagneticButton;
use crate::widgets::scroll_reveal::ScrollReveal;
use crate::widgets::spotlight::SpotlightEffect;

fn chapter_intro(ch: &'static EffectChapter) -> impl IntoView {
    view! {
        <div class="chapter-intro">
            <span class="chapter-kicker">{format!("{}. {}", ch.number, ch.kicker)}</span>
            <h3 class="font-cinzel chapter-title">{ch.title}</h3>
            <p class="font-montserrat chapter-body">{ch.body}</p>
        </div>
    }
}

#[component]
pub fn DigitalPage() -> impl IntoView {
    view! {
        <div class="page page-digital">
            <header class="section-header digital-header">
                <span class="kicker">"Digital Atmosphere"</span>
                <h2 class="font-cinzel digital-title">
                    "The Interactive" <br/>
                    <span class="font-cormorant digital-title-accent">"Symphony"</span>
                </h2>
                <p class="font-montserrat digital-lede">
                    "In the ultra-premium segment, web design is about \"Feel\". We have \
                     developed specific physics for both Desktop (Mouse) and Mobile (Touch) \
                     to ensure the luxury translates to the palm of your hand."
                </p>
            </header>

            // 01 — cinematic blur-in entrance
            <section class="chapter">
                {chapter_intro(&EFFECT_CHAPTERS[0])}
                <div class="chapter-demo entrance-demo">
                    <div class="entrance-backdrop"></div>
                    <h2 class="font-cormorant entrance-quote blur-in">
                        "\"Silence is the" <br/> "ultimate luxury.\""
                    </h2>
                </div>
            </section>

            // 02 — magnetic physics / liquid press
            <section class="chapter chapter-flipped">
                {chapter_intro(&EFFECT_CHAPTERS[1])}
                <div class="chapter-demo physics-demo">
                    <MagneticButton class="inquire-button">
                        "Inquire Now"
                    </MagneticButton>
                </div>
            </section>

            // 03 — parallax depth (hover-driven layers)
            <section class="chapter">
                {chapter_intro(&EFFECT_CHAPTERS[2])}
                <div class="chapter-demo parallax-demo">
                    <div class="parallax-ground"></div>
                    <div class="parallax-scrim"></div>
                    <div class="parallax-float">
                        <span class="font-cinzel">"FINCA SOL"</span>
                    </div>
                </div>
            </section>

            // 04 — scroll-triggered pacing
            <section class="chapter chapter-flipped">
                {chapter_intro(&EFFECT_CHAPTERS[3])}
                <div class="chapter-demo">
                    <ScrollReveal/>
                </div>
            </section>

            // 05 — interactive spotlight
            <section class="chapter">
                <div class="chapter-intro">
                    <span class="chapter-kicker">
                        {format!("{}. {}", EFFECT_CHAPTERS[4].number, EFFECT_CHAPTERS[4].kicker)}
                    </span>
                    <h3 class="font-cinzel chapter-title">{EFFECT_CHAPTERS[4].title}</h3>
                    <p class="font-montserrat chapter-body">{EFFECT_CHAPTERS[4].body}</p>
                    <div class="touch-badge">
                        <Icon name="smartphone" size=16/>
                        <span>"Touch Enabled"</span>
                    </div>
                </div>
                <div class="chapter-demo">
                    <SpotlightEffect/>
                </div>
            </section>
        </div>
    }
}
