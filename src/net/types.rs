//! Wire DTOs for the registration client/server boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON (`confirmPassword` stays camelCase on
//! the wire) so request bodies serialize without hand-written mapping.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, when the server exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// Registration payload sent to `POST /api/auth/register`.
///
/// The `validate` rules are the client-side registration schema. Rules on a
/// field are checked (and reported) in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[validate(custom(function = "contains_digit"))]
    pub password: String,

    #[validate(length(min = 1, message = "Please confirm your password"))]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

fn contains_digit(password: &str) -> Result<(), ValidationError> {
    if password.chars().any(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut error = ValidationError::new("digit");
    error.message = Some(Cow::Borrowed("Password must contain at least one number"));
    Err(error)
}

/// One entry of a structured (bad request) error response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Error body returned by the registration endpoint on a non-2xx status.
///
/// Either `{"code": 400, "error": [{"message": ..}, ..]}` or
/// `{"error": "<text>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Structured {
        #[serde(default)]
        code: Option<u16>,
        error: Vec<ErrorDetail>,
    },
    Plain {
        error: String,
    },
}
