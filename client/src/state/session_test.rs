use super::*;
use crate::util::storage::MemoryStore;

fn alice() -> User {
    User { email: "alice@example.com".to_owned(), username: "alice".to_owned() }
}

#[test]
fn default_session_is_unloaded_and_anonymous() {
    let session = Session::default();
    assert!(!session.loaded);
    assert!(!session.is_authenticated());
    assert_eq!(session.display_name(), None);
}

#[test]
fn load_from_empty_store_is_anonymous() {
    let store = MemoryStore::new();
    let session = Session::load(&store);
    assert!(session.loaded);
    assert!(!session.is_authenticated());
}

#[test]
fn establish_persists_both_keys() {
    let store = MemoryStore::new();
    let session = Session::establish(&store, "tok-1".to_owned(), alice());
    assert!(session.is_authenticated());
    assert_eq!(store.read(TOKEN_KEY).as_deref(), Some("tok-1"));
    let raw_user = store.read(USER_KEY).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw_user).unwrap(), alice());
}

#[test]
fn load_restores_established_session() {
    let store = MemoryStore::new();
    let established = Session::establish(&store, "tok-1".to_owned(), alice());
    assert_eq!(Session::load(&store), established);
    assert_eq!(Session::load(&store).display_name(), Some("alice"));
}

#[test]
fn load_ignores_malformed_user_record() {
    let store = MemoryStore::new();
    store.write(TOKEN_KEY, "tok-1");
    store.write(USER_KEY, "{not json");
    let session = Session::load(&store);
    assert!(session.is_authenticated());
    assert!(session.user.is_none());
}

#[test]
fn empty_token_is_not_authenticated() {
    let store = MemoryStore::new();
    store.write(TOKEN_KEY, "");
    assert!(!Session::load(&store).is_authenticated());
}

#[test]
fn clear_removes_persisted_keys() {
    let store = MemoryStore::new();
    Session::establish(&store, "tok-1".to_owned(), alice());
    let cleared = Session::clear(&store);
    assert!(cleared.loaded);
    assert!(!cleared.is_authenticated());
    assert!(store.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_load_sees_no_session() {
    let store = crate::util::storage::BrowserStore;
    store.write(TOKEN_KEY, "tok-1");
    let session = Session::load(&store);
    assert!(session.loaded);
    assert!(!session.is_authenticated());
}
