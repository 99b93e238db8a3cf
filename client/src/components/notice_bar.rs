//! Banner for the current transient notice.
//!
//! In the browser each notice auto-dismisses after `NOTICE_TTL_MS` unless a
//! newer notice replaced it first.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(seq) = notices.with(|n| n.current.as_ref().map(|c| c.seq)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::notice::NOTICE_TTL_MS)).await;
            notices.update(|n| n.dismiss_if_current(seq));
        });
    });

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(NoticeState::dismiss)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
