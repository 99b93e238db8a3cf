//! Login and registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/login` and `/register`. Validation runs on every keystroke via
//! `AuthForm`; the request is only sent once `AuthForm::submission` passes.
//! A successful login establishes the session context and moves to the list.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth_form::{AuthField, AuthForm, AuthMode};
#[cfg(feature = "hydrate")]
use crate::state::auth_form::AuthSubmission;
use crate::state::notice::NoticeState;
use crate::state::session::Session;

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(AuthForm::new(mode));
    let busy = RwSignal::new(false);
    let redirect_to = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(path) = redirect_to.get() {
            redirect_to.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        form.update(AuthForm::touch_all);
        let Ok(submission) = form.with_untracked(AuthForm::submission) else {
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match submission {
                AuthSubmission::Login(request) => match crate::net::api::login(&request).await {
                    Ok(resp) => {
                        session.set(Session::establish(
                            &crate::util::storage::BrowserStore,
                            resp.access_token,
                            resp.user,
                        ));
                        notices.update(|n| n.push_success("Logged in"));
                        redirect_to.set(Some(success_path(AuthMode::Login)));
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        notices.update(|n| n.push_error(e.user_message()));
                    }
                },
                AuthSubmission::Register(request) => match crate::net::api::register(&request).await {
                    Ok(()) => {
                        notices.update(|n| n.push_success("Account created, please log in"));
                        redirect_to.set(Some(success_path(AuthMode::Register)));
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        notices.update(|n| n.push_error(e.user_message()));
                    }
                },
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, session, notices);
        }
    };

    let fields = form.with_untracked(AuthForm::fields);

    view! {
        <section class="auth-page">
            <h1>{mode.title()}</h1>
            <form class="auth-form" on:submit=on_submit>
                {fields
                    .iter()
                    .map(|&field| {
                        view! {
                            <label class="auth-form__field">
                                <span>{field_label(field)}</span>
                                <input
                                    type=input_type(field)
                                    class=move || input_class(form.with(|f| f.visible_error(field).is_some()))
                                    prop:value=move || form.with(|f| f.value(field).to_owned())
                                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                                />
                                <Show when=move || form.with(|f| f.visible_error(field).is_some())>
                                    <p class="auth-form__error">
                                        {move || form.with(|f| f.visible_error(field).unwrap_or_default())}
                                    </p>
                                </Show>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {mode.submit_label()}
                </button>
            </form>
            <p class="auth-page__switch">
                {alternate_prompt(mode)}
                " "
                <A href=alternate_path(mode)>{alternate_link_label(mode)}</A>
            </p>
        </section>
    }
}

fn field_label(field: AuthField) -> &'static str {
    match field {
        AuthField::Username => "Username",
        AuthField::Email => "Email",
        AuthField::Password => "Password",
        AuthField::ConfirmPassword => "Confirm password",
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid { "auth-form__input auth-form__input--invalid" } else { "auth-form__input" }
}

fn input_type(field: AuthField) -> &'static str {
    match field {
        AuthField::Username => "text",
        AuthField::Email => "email",
        AuthField::Password | AuthField::ConfirmPassword => "password",
    }
}

/// Where the page navigates after a successful submit.
#[cfg(any(test, feature = "hydrate"))]
fn success_path(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "/list",
        AuthMode::Register => "/login",
    }
}

fn alternate_path(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "/register",
        AuthMode::Register => "/login",
    }
}

fn alternate_prompt(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "No account yet?",
        AuthMode::Register => "Already registered?",
    }
}

fn alternate_link_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Register",
        AuthMode::Register => "Login",
    }
}
