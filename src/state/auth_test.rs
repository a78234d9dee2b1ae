use super::*;

fn user() -> User {
    User { id: "u1".to_owned(), name: "Ann".to_owned(), email: Some("ann@x.com".to_owned()) }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_user_is_authenticated() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(state.is_authenticated());
}

// =============================================================
// Register form gate
// =============================================================

#[test]
fn register_form_hidden_while_loading() {
    assert!(!AuthState::pending().shows_register_form());
}

#[test]
fn register_form_hidden_while_loading_even_with_user() {
    let state = AuthState { user: Some(user()), loading: true };
    assert!(!state.shows_register_form());
}

#[test]
fn register_form_hidden_when_authenticated() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(!state.shows_register_form());
}

#[test]
fn register_form_shown_when_loaded_and_anonymous() {
    let state = AuthState { user: None, loading: false };
    assert!(state.shows_register_form());
}
