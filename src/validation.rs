//! Regular-expression validation of user-supplied field values.
//!
//! Every validated field is described by a [`FieldPattern`]: a compiled pattern plus the
//! user-facing requirement reported when a value does not match. Validation is pure and
//! the compiled patterns are shared process-wide, so helpers here are safe to call from
//! any thread.

use std::sync::OnceLock;

use regex::Regex;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required and can not be empty")]
    Missing { field: &'static str },
    #[error("{field} is invalid: {requirement}")]
    Invalid {
        field: &'static str,
        requirement: &'static str,
    },
}

pub(crate) struct FieldPattern {
    field: &'static str,
    requirement: &'static str,
    pattern: &'static str,
    regex: OnceLock<Regex>,
}

impl FieldPattern {
    const fn new(field: &'static str, requirement: &'static str, pattern: &'static str) -> Self {
        Self {
            field,
            requirement,
            pattern,
            regex: OnceLock::new(),
        }
    }

    /// Returns the value unchanged when it matches the pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is empty ([`ValidationError::Missing`]).
    /// - The value does not match the pattern ([`ValidationError::Invalid`]).
    pub(crate) fn validated(&self, value: &str) -> Result<String, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Missing { field: self.field });
        }
        if !self.regex().is_match(value) {
            return Err(ValidationError::Invalid {
                field: self.field,
                requirement: self.requirement,
            });
        }
        Ok(value.to_owned())
    }

    fn regex(&self) -> &Regex {
        self.regex
            .get_or_init(|| Regex::new(self.pattern).expect("field pattern compiles"))
    }
}

pub(crate) static HOLDER_NAME: FieldPattern = FieldPattern::new(
    "holder name",
    "must contain at least two English words separated by a single whitespace, \
     with only the first letter of each word uppercase",
    r"^([A-Z][a-z]* )+[A-Z][a-z]*$",
);

pub(crate) static CONTACT_PHONE: FieldPattern = FieldPattern::new(
    "contact phone",
    r#"must be in the form "+X (XXX) XXX-XXXX""#,
    r"^\+\d \(\d{3}\) \d{3}-\d{4}$",
);

pub(crate) static HOME_ADDRESS: FieldPattern = FieldPattern::new(
    "home address",
    r#"must be in the form "house-number street-name st.""#,
    r"^\d+ [A-Z][a-z]* st\.$",
);

pub(crate) static EMAIL: FieldPattern = FieldPattern::new(
    "email",
    "must be a well-formed email address",
    r"^([a-zA-Z0-9_\-\.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{2,4}|[0-9]{1,3})$",
);

pub(crate) static ACCOUNT_NUMBER: FieldPattern = FieldPattern::new(
    "account number",
    "must contain only digits and uppercase latin letters",
    r"^[0-9A-Z]+$",
);
