//! Write-only access to the system clipboard.
//!
//! The only fallible operation on the page. A rejected write (permission
//! denied, insecure context) leaves the confirmation label unset and is
//! otherwise swallowed — the guide stays fully usable without clipboard
//! access.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use casalab_core::state::{CopyFeedback, COPY_FEEDBACK_MS};

/// Slot for the pending expiry timer of a screen's copy actions.
///
/// Local storage: the handle is a browser-side resource and never leaves
/// the main thread.
pub type PendingExpiry = StoredValue<Option<TimeoutHandle>, LocalStorage>;

/// Create the timer slot for a screen. The screen cancels it on cleanup
/// via [`cancel_pending`].
pub fn pending_expiry() -> PendingExpiry {
    StoredValue::new_local(None)
}

/// Cancel the armed expiry timer, if any.
///
/// `try_` because the write promise can resolve after the owning screen
/// unmounted and disposed the slot.
pub fn cancel_pending(pending: PendingExpiry) {
    pending.try_update_value(|slot| {
        if let Some(handle) = slot.take() {
            handle.clear();
        }
    });
}

/// Copy `text` to the clipboard; on success show the confirmation and arm
/// the 2-second expiry. Re-copying within the window restarts it.
pub fn copy_text(feedback: RwSignal<CopyFeedback>, pending: PendingExpiry, text: String) {
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        if JsFuture::from(promise).await.is_err() {
            leptos::logging::debug_warn!("clipboard write rejected");
            return;
        }

        let mut token = 0;
        feedback.update(|f| token = f.confirm(&text));

        // A fresh copy supersedes the previous timer outright.
        cancel_pending(pending);
        let armed = set_timeout_with_handle(
            move || feedback.update(|f| f.expire(token)),
            Duration::from_millis(COPY_FEEDBACK_MS as u64),
        );
        if let Ok(handle) = armed {
            pending.try_update_value(|slot| *slot = Some(handle));
        }
    });
}
