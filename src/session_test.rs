use std::rc::Rc;

use super::*;

fn memory_session() -> Session {
    Session::new(Rc::new(MemoryStore::default()))
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn fresh_session_has_no_token() {
    let session = memory_session();
    assert_eq!(session.token(), None);
}

#[test]
fn remember_persists_the_token() {
    let session = memory_session();
    session.remember("abc");
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn remember_overwrites_an_earlier_token() {
    let session = memory_session();
    session.remember("first");
    session.remember("second");
    assert_eq!(session.token().as_deref(), Some("second"));
}

// =============================================================
// Authorization header
// =============================================================

#[test]
fn auth_header_is_empty_without_a_token() {
    let session = memory_session();
    assert_eq!(session.auth_header(), "");
}

#[test]
fn auth_header_echoes_the_stored_token() {
    let session = memory_session();
    session.remember("abc");
    assert_eq!(session.auth_header(), "abc");
}

// =============================================================
// Handle semantics
// =============================================================

#[test]
fn cloned_sessions_share_one_store() {
    let session = memory_session();
    let clone = session.clone();
    session.remember("abc");
    assert_eq!(clone.token().as_deref(), Some("abc"));
}
