//! Top navigation with session-aware account actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::notice::NoticeState;
use crate::state::session::Session;
use crate::util::guard::LOGIN_PATH;
use crate::util::storage::BrowserStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    // Navigation happens in an effect so click handlers only touch signals.
    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        session.set(Session::clear(&BrowserStore));
        notices.update(|n| n.push_success("Logged out"));
        logged_out.set(true);
    };

    view! {
        <header class="nav">
            <span class="nav__brand">
                <A href="/">
                    <strong>"Courseboard"</strong>
                </A>
            </span>
            <nav class="nav__links">
                <A href="/">"Home"</A>
                <A href="/list">"Courses"</A>
                <A href="/add">"Add course"</A>
            </nav>
            <div class="nav__account">
                <Show
                    when=move || session.with(Session::is_authenticated)
                    fallback=|| {
                        view! {
                            <A href="/login">"Login"</A>
                            <A href="/register">"Register"</A>
                        }
                    }
                >
                    <span class="nav__greeting">
                        "Hi, "
                        {move || session.with(|s| s.display_name().unwrap_or("there").to_owned())}
                    </span>
                    <button class="btn nav__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
