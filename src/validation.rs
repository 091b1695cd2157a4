//! Field-shape validation for request bodies
//!
//! This is the schema layer: it runs on freshly deserialized input before
//! any business logic and reports every violation it finds, not just the
//! first. Business rules (product existence, item quantities, price
//! agreement) live in [`crate::purchase`].

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Result type for single-field validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_EMAIL_LOCAL_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;

/// A single field violation.
///
/// `field` names a top-level body field, e.g. `customer_email`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    #[error("{field} is not a valid email address: {reason}")]
    InvalidEmail { field: String, reason: String },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidEmail { field, .. } => field,
        }
    }
}

/// Every violation found in one request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error half of a validator result.
    pub fn check(&mut self, result: ValidationResult<()>) {
        if let Err(e) = result {
            self.0.push(e);
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Renders the `detail` array of a 422 response.
    pub fn to_detail(&self) -> Vec<FieldDetail> {
        self.0
            .iter()
            .map(|e| FieldDetail::body(e.field(), e.to_string()))
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// One entry of a 422 `detail` array.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldDetail {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldDetail {
    /// Builds an entry located at `field` in the request body, rendered as
    /// `["body", field]`.
    pub fn body(field: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![json!("body"), json!(field)],
            msg: msg.into(),
            kind: "value_error",
        }
    }

    /// Builds an entry for a request that could not be read at all.
    pub fn request(location: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![json!(location)],
            msg: msg.into(),
            kind: "request_error",
        }
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Checks that `value` has between `min` and `max` characters, inclusive.
///
/// Lengths count `char`s, so "Asere Ñ" is 7, not 8.
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Checks that a claimed amount is a finite number above zero.
pub fn validate_positive_amount(field: &str, amount: f64) -> ValidationResult<()> {
    if !(amount.is_finite() && amount > 0.0) {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Checks that `email` looks like a deliverable address.
///
/// ## Rules
/// - No whitespace, exactly one `@`
/// - Local part non-empty, at most 64 characters
/// - Domain has at least two labels; each label is non-empty, made of
///   alphanumerics or `-`, and does not start or end with `-`
///
/// ```
/// use sandwich_asere::validation::validate_email;
///
/// assert!(validate_email("email", "cliente@sandwichasere.com").is_ok());
/// assert!(validate_email("email", "not-an-email").is_err());
/// ```
pub fn validate_email(field: &str, email: &str) -> ValidationResult<()> {
    let invalid = |reason: &str| ValidationError::InvalidEmail {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if email.is_empty() {
        return Err(invalid("value is empty"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(invalid("address is too long"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid("missing @-sign")),
    };
    if domain.contains('@') {
        return Err(invalid("contains more than one @-sign"));
    }
    if local.is_empty() {
        return Err(invalid("nothing before the @-sign"));
    }
    if local.chars().count() > MAX_EMAIL_LOCAL_LEN {
        return Err(invalid("part before the @-sign is too long"));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(invalid("misplaced period before the @-sign"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid("domain must contain a period"));
    }
    for label in labels {
        if label.is_empty() {
            return Err(invalid("domain has an empty label"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid("domain label starts or ends with a hyphen"));
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(invalid("domain contains invalid characters"));
        }
    }

    Ok(())
}
