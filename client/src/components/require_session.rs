//! Wrapper that renders protected content only for a session with a token.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{GuardDecision, guard_decision, install_session_redirect};

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_session_redirect(session, use_navigate());

    let decision = move || guard_decision(&session.get());

    view! {
        <Show
            when=move || decision() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="guard-notice">
                        {move || match decision() {
                            GuardDecision::Pending => "Loading...",
                            _ => "You need to log in",
                        }}
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
