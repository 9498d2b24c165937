//! Root component: navigation chrome and the tab router.

use leptos::prelude::*;

use casalab_core::content::DEFAULT_DEMO_TEXT;
use casalab_core::state::{CopyFeedback, NavState};
use casalab_core::{Language, Tab};

use crate::screen::digital::DigitalPage;
use crate::screen::essence::EssencePage;
use crate::screen::logos::LogosPage;
use crate::screen::palette::PalettePage;
use crate::screen::sensory::SensoryPage;
use crate::screen::typography::TypographyPage;
use crate::screen::voice::VoicePage;
use crate::widgets::icon::Icon;
use crate::widgets::logo::Logo;

#[component]
pub fn App() -> impl IntoView {
    let (nav, set_nav) = signal(NavState::default());
    let (lang, set_lang) = signal(Language::default());
    let (demo_text, set_demo_text) = signal(DEFAULT_DEMO_TEXT.to_string());
    let feedback = RwSignal::new(CopyFeedback::default());

    let presenting = Signal::derive(move || nav.get().presentation);

    view! {
        <div class="lab-shell">
            <button
                class="presentation-toggle"
                on:click=move |_| set_nav.update(|n| n.toggle_presentation())
            >
                {move || {
                    if presenting.get() {
                        view! { <Icon name="x" size=14/> }
                    } else {
                        view! { <Icon name="eye" size=14/> }
                    }
                }}
                <span>{move || if presenting.get() { "Edit Mode" } else { "Client View" }}</span>
            </button>

            <Show when=move || !nav.get().sidebar_hidden()>
                <Sidebar nav=nav set_nav=set_nav/>
            </Show>

            <div class="stage" class=("stage-full", move || nav.get().sidebar_hidden())>
                <div class="mobile-header">
                    <Logo class="seal-tiny"/>
                    <button
                        class="menu-button"
                        on:click=move |_| set_nav.update(|n| n.open_menu())
                    >
                        <Icon name="menu" size=24/>
                    </button>
                </div>

                <main class="stage-content" class=("stage-presenting", move || presenting.get())>
                    {move || match nav.get().active_tab {
                        Tab::Essence => {
                            view! { <EssencePage lang=lang set_lang=set_lang/> }.into_any()
                        }
                        Tab::Logos => {
                            view! { <LogosPage presenting=presenting feedback=feedback/> }
                                .into_any()
                        }
                        Tab::Typography => {
                            view! {
                                <TypographyPage
                                    demo_text=demo_text
                                    set_demo_text=set_demo_text
                                />
                            }
                                .into_any()
                        }
                        Tab::Palette => view! { <PalettePage feedback=feedback/> }.into_any(),
                        Tab::Sensory => view! { <SensoryPage/> }.into_any(),
                        Tab::Voice => {
                            view! { <VoicePage lang=lang set_lang=set_lang/> }.into_any()
                        }
                        Tab::Digital => view! { <DigitalPage/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}

/// Fixed sidebar; on mobile it doubles as the slide-in overlay.
#[component]
fn Sidebar(nav: ReadSignal<NavState>, set_nav: WriteSignal<NavState>) -> impl IntoView {
    view! {
        <aside class="sidebar" class=("sidebar-open", move || nav.get().menu_open)>
            <div class="sidebar-brand">
                <Logo class="seal-small"/>
                <h1 class="font-cinzel brand-wordmark">"CASA" <br/> "BONITA"</h1>
                <span class="brand-descriptor">"Brand Laboratory"</span>
                <button
                    class="sidebar-close"
                    on:click=move |_| set_nav.update(|n| n.close_menu())
                >
                    <Icon name="x" size=24/>
                </button>
            </div>

            <nav class="sidebar-nav">
                {Tab::ALL
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class="nav-item"
                                class=("nav-item-active", move || nav.get().active_tab == tab)
                                on:click=move |_| set_nav.update(|n| n.select_tab(tab))
                            >
                                <Icon name=tab.icon() size=14/>
                                <span class="font-montserrat">{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
