//! Registration flow orchestration, independent of rendering.
//!
//! ARCHITECTURE
//! ============
//! The page supplies four collaborators (registrar, notifier, navigator,
//! register-state store) and a session to check on mount. Keeping them behind
//! small traits lets the whole submit path run in unit tests with recording
//! doubles instead of a browser.
//!
//! FLOW
//! ====
//! submit: in-flight guard -> schema validation -> registrar call ->
//! success toast + `/login`, or error toast and stay.

#[cfg(test)]
#[path = "register_flow_test.rs"]
mod register_flow_test;

use leptos::prelude::*;

use crate::net::api::RegisterError;
use crate::net::types::RegisterData;
use crate::state::auth::AuthState;
use crate::state::notifications::{NotificationKind, NotificationState};
use crate::state::register::RegisterState;
use crate::util::register_schema::{RegisterInput, validate_registration};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_SUCCESS_MESSAGE: &str = "User created successfully";

/// Read-only view of the current auth session.
pub trait SessionStore {
    fn is_authenticated(&self) -> bool;
}

impl SessionStore for AuthState {
    fn is_authenticated(&self) -> bool {
        AuthState::is_authenticated(self)
    }
}

impl SessionStore for RwSignal<AuthState> {
    fn is_authenticated(&self) -> bool {
        self.with_untracked(AuthState::is_authenticated)
    }
}

/// Imperative client-side route change.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn redirect(&self, path: &str) {
        self(path);
    }
}

/// Toast sink.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

impl Notifier for RwSignal<NotificationState> {
    fn notify_success(&self, message: &str) {
        self.update(|n| {
            n.push(NotificationKind::Success, message);
        });
    }

    fn notify_error(&self, message: &str) {
        self.update(|n| {
            n.push(NotificationKind::Error, message);
        });
    }
}

/// Remote registration call.
#[allow(async_fn_in_trait)]
pub trait Registrar {
    async fn register(&self, data: &RegisterData) -> Result<(), RegisterError>;
}

/// Mutable access to the register form state.
///
/// Returns `None` when the backing storage is gone (e.g. a disposed signal
/// after the page unmounted).
pub trait RegisterStore {
    fn with_state<T>(&self, f: impl FnOnce(&mut RegisterState) -> T) -> Option<T>;
}

impl RegisterStore for RwSignal<RegisterState> {
    fn with_state<T>(&self, f: impl FnOnce(&mut RegisterState) -> T) -> Option<T> {
        self.try_update(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    ShowForm,
    Redirected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submission is still in flight.
    Ignored,
    /// Validation failed; errors were stored and nothing was sent.
    Invalid,
    Registered,
    Rejected(RegisterError),
}

#[derive(Clone)]
pub struct RegistrationFlow<R, N, V, S> {
    registrar: R,
    notifier: N,
    navigator: V,
    store: S,
}

impl<R, N, V, S> RegistrationFlow<R, N, V, S>
where
    R: Registrar,
    N: Notifier,
    V: Navigator,
    S: RegisterStore,
{
    pub fn new(registrar: R, notifier: N, navigator: V, store: S) -> Self {
        Self { registrar, notifier, navigator, store }
    }

    /// Send signed-in users home instead of showing the form.
    pub fn on_mount(&self, session: &impl SessionStore) -> MountOutcome {
        if session.is_authenticated() {
            self.navigator.redirect(HOME_PATH);
            return MountOutcome::Redirected;
        }
        MountOutcome::ShowForm
    }

    /// Run `on_mount` once the session has finished loading.
    ///
    /// Returns `false` (and does nothing) while auth is still loading, so the
    /// caller knows to check again.
    pub fn check_loaded_session(&self, session: &AuthState) -> bool {
        if session.loading {
            return false;
        }
        self.on_mount(session);
        true
    }

    pub async fn submit(&self, input: RegisterInput) -> SubmitOutcome {
        if self.store.with_state(|s| s.submitting).unwrap_or(true) {
            return SubmitOutcome::Ignored;
        }

        let data = match validate_registration(&input) {
            Ok(data) => data,
            Err(errors) => {
                self.store.with_state(|s| s.reject(errors));
                return SubmitOutcome::Invalid;
            }
        };

        if self.store.with_state(RegisterState::begin_submit) != Some(true) {
            return SubmitOutcome::Ignored;
        }

        let result = self.registrar.register(&data).await;
        self.store.with_state(RegisterState::finish_submit);

        match result {
            Ok(()) => {
                leptos::logging::log!("registration accepted");
                self.notifier.notify_success(REGISTER_SUCCESS_MESSAGE);
                self.navigator.redirect(LOGIN_PATH);
                SubmitOutcome::Registered
            }
            Err(err) => {
                leptos::logging::warn!("registration rejected: {err:?}");
                self.notifier.notify_error(&err.notification_text());
                SubmitOutcome::Rejected(err)
            }
        }
    }
}
