//! REST API helpers for communicating with the auth server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Registration failures are folded into `RegisterError` so the page can turn
//! any rejection into a single notification string without inspecting the
//! raw response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use super::types::{RegisterData, User};

/// A rejected registration call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// Bad-request style rejection carrying one message per violated rule.
    #[error("{}", .messages.join(", "))]
    Structured { messages: Vec<String> },
    /// Any other failure with a single message.
    #[error("{message}")]
    Plain { message: String },
}

impl RegisterError {
    pub fn plain(message: impl Into<String>) -> Self {
        Self::Plain { message: message.into() }
    }

    /// Text shown to the user in the error toast.
    #[must_use]
    pub fn notification_text(&self) -> String {
        self.to_string()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn current_user_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/auth/me")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(api_base: &str) -> String {
    format!("{api_base}/api/auth/register")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("registration failed: {status}")
}

/// Classify a non-2xx registration response body.
#[cfg(any(test, feature = "hydrate"))]
fn register_error_from_response(status: u16, body: &str) -> RegisterError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Structured { error, .. }) => {
            let messages: Vec<String> = error
                .into_iter()
                .map(|e| e.message.trim().to_owned())
                .filter(|m| !m.is_empty())
                .collect();
            if messages.is_empty() {
                RegisterError::plain(register_failed_message(status))
            } else {
                RegisterError::Structured { messages }
            }
        }
        Ok(ErrorBody::Plain { error }) if !error.trim().is_empty() => RegisterError::Plain { message: error },
        _ => RegisterError::plain(register_failed_message(status)),
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(api_base: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&current_user_endpoint(api_base))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_base;
        None
    }
}

/// Register a new account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns `RegisterError::Structured` when the server lists individual
/// violations, and `RegisterError::Plain` for every other failure including
/// transport errors.
pub async fn register(api_base: &str, data: &RegisterData) -> Result<(), RegisterError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint(api_base))
            .json(data)
            .map_err(|e| RegisterError::plain(e.to_string()))?
            .send()
            .await
            .map_err(|e| RegisterError::plain(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(register_error_from_response(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_base, data);
        Err(RegisterError::plain("not available on server"))
    }
}
