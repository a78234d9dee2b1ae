//! Registration form schema.
//!
//! DESIGN
//! ======
//! `validate_registration` is the single gate between raw form strings and the
//! typed `RegisterData` payload. The rules themselves are `validator`
//! attributes on `RegisterData`; this module trims the raw strings, runs them,
//! and regroups `ValidationErrors` into per-field ordered message lists so the
//! page can render them inline next to each input.

#[cfg(test)]
#[path = "register_schema_test.rs"]
mod register_schema_test;

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::net::types::RegisterData;

/// Fields collected by the registration form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::ConfirmPassword];

    /// Form/wire key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Map a `validator` field name (Rust or wire spelling) to a form field.
    fn from_schema_key(key: &str) -> Option<Self> {
        match key {
            "confirm_password" => Some(Self::ConfirmPassword),
            other => Self::from_key(other),
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML `type` attribute for the field's input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Name => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }
}

/// Raw, unvalidated form values. Built fresh for every submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterInput {
    /// Build input from `(key, value)` pairs as a browser form would submit
    /// them. Unknown keys are ignored; later duplicates win.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut input = Self::default();
        for (key, value) in pairs {
            if let Some(field) = RegisterField::from_key(key) {
                *input.field_mut(field) = value.to_owned();
            }
        }
        input
    }

    #[must_use]
    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Per-field validation messages. Fields without messages are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    by_field: BTreeMap<RegisterField, Vec<String>>,
}

impl FieldErrors {
    pub fn push(&mut self, field: RegisterField, message: impl Into<String>) {
        self.by_field.entry(field).or_default().push(message.into());
    }

    /// Messages for `field` in the order the rules produced them.
    #[must_use]
    pub fn messages(&self, field: RegisterField) -> &[String] {
        self.by_field.get(&field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn has(&self, field: RegisterField) -> bool {
        !self.messages(field).is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of fields that carry at least one message.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.by_field.len()
    }
}

/// Validate raw form input into a typed registration payload.
///
/// Name and email are trimmed before the rules run; passwords are checked
/// verbatim.
///
/// # Errors
///
/// Returns every failed rule grouped by field when any rule fails.
pub fn validate_registration(input: &RegisterInput) -> Result<RegisterData, FieldErrors> {
    let data = RegisterData {
        name: input.name.trim().to_owned(),
        email: input.email.trim().to_owned(),
        password: input.password.clone(),
        confirm_password: input.confirm_password.clone(),
    };
    match data.validate() {
        Ok(()) => Ok(data),
        Err(errors) => Err(FieldErrors::from(&errors)),
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = Self::default();
        for (key, list) in errors.field_errors() {
            let Some(field) = RegisterField::from_schema_key(&key) else {
                continue;
            };
            for error in list {
                out.push(field, error_message(error));
            }
        }
        out
    }
}

fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_deref()
        .map_or_else(|| error.code.to_string(), str::to_owned)
}
