//! Toast showing the current notice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `RwSignal<NoticeState>` context provided by `App`. Success
//! notices close themselves after a few seconds; errors stay until
//! dismissed.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4000;

#[component]
pub fn Alert() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(notice) = notices.with(|n| n.current.clone()) else {
            return;
        };
        if notice.kind != NoticeKind::Success {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notices.update(|n| n.dismiss(notice.id));
        });
    });

    move || {
        notices.with(|n| n.current.clone()).map(|notice| {
            let id = notice.id;
            let error = notice.kind == NoticeKind::Error;
            view! {
                <div class="alert" class:alert--error=error class:alert--success=!error role="alert">
                    <span class="alert__message">{notice.message}</span>
                    <button
                        class="alert__close"
                        aria-label="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(id))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
