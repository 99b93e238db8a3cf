//! Route guard for pages that need a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes share one redirect rule: once the session has been read
//! from storage and no token is present, replace the history entry with
//! `/login`. Token validity is never checked, only presence.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Storage not read yet (SSR or before hydration).
    Pending,
    Allow,
    RedirectToLogin,
}

pub fn guard_decision(session: &Session) -> GuardDecision {
    if !session.loaded {
        GuardDecision::Pending
    } else if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Redirect to `/login` whenever the loaded session has no token.
pub fn install_session_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&session.get()) == GuardDecision::RedirectToLogin {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
