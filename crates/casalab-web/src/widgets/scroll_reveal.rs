//! Scroll-triggered reveal: the golden thread and staggered copy.

use leptos::prelude::*;

use casalab_core::effects::{RevealLatch, REVEAL_THRESHOLD};

use crate::visibility;

/// Once 30% of the stage scrolls into view the latch flips and the CSS
/// transitions play; scrolling back out never replays the entrance. The
/// observer is disconnected (and its closure dropped) on cleanup.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    let stage_ref = NodeRef::<leptos::html::Div>::new();
    let (latch, set_latch) = signal(RevealLatch::default());
    let watch = StoredValue::new_local(None::<visibility::VisibilityWatch>);

    Effect::new(move |_| {
        let Some(el) = stage_ref.get() else {
            return;
        };
        if watch.with_value(Option::is_some) {
            return;
        }
        let observation = visibility::watch(&el, REVEAL_THRESHOLD, move |intersecting| {
            // a notification already queued when the widget unmounts must
            // not touch the disposed signal
            set_latch.try_update(|l| l.observe(intersecting));
        });
        watch.set_value(observation);
    });

    on_cleanup(move || {
        watch.update_value(|slot| {
            if let Some(observation) = slot.take() {
                observation.disconnect();
            }
        });
    });

    view! {
        <div
            class="reveal-stage"
            class=("is-revealed", move || latch.get().is_revealed())
            node_ref=stage_ref
        >
            <div class="reveal-texture"></div>
            <div class="reveal-inner">
                <div class="golden-thread"></div>
                <div class="reveal-clip">
                    <h3 class="font-cinzel reveal-line">"The Narrative Arrives"</h3>
                </div>
                <div class="reveal-clip">
                    <p class="font-cormorant reveal-line reveal-line-late">
                        "\"We don't just show content;" <br/> "we choreograph its arrival.\""
                    </p>
                </div>
                <div class="reveal-caption">
                    <span>"Scroll Trigger Active"</span>
                </div>
            </div>
        </div>
    }
}
