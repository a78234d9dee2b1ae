//! Register form state: the current field errors and the in-flight flag.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::util::register_schema::{FieldErrors, RegisterField};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterState {
    /// Errors from the most recent submission attempt only.
    pub errors: FieldErrors,
    /// `true` while a registration request is awaiting a response.
    pub submitting: bool,
}

impl RegisterState {
    /// Replace the error set with the result of a failed validation.
    pub fn reject(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Clear errors and enter the submitting state.
    ///
    /// Returns `false` (and changes nothing) if a request is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.errors = FieldErrors::default();
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub fn field_class(&self, field: RegisterField) -> &'static str {
        if self.errors.has(field) { "form-input error" } else { "form-input" }
    }
}
