use super::*;
use crate::net::types::User;

#[test]
fn unloaded_session_is_pending() {
    assert_eq!(guard_decision(&Session::default()), GuardDecision::Pending);
}

#[test]
fn loaded_session_without_token_redirects() {
    let session = Session { loaded: true, ..Session::default() };
    assert_eq!(guard_decision(&session), GuardDecision::RedirectToLogin);
}

#[test]
fn user_record_without_token_still_redirects() {
    let session = Session {
        token: None,
        user: Some(User { email: "a@b.co".to_owned(), username: "abc".to_owned() }),
        loaded: true,
    };
    assert_eq!(guard_decision(&session), GuardDecision::RedirectToLogin);
}

#[test]
fn any_token_is_allowed() {
    let session = Session { token: Some("forged".to_owned()), user: None, loaded: true };
    assert_eq!(guard_decision(&session), GuardDecision::Allow);
}
