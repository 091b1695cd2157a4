//! Contact Domain Models

use crate::validation::{validate_email, validate_length, ValidationErrors};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 1000;

/// A message sent through the contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub name: String,

    pub email: String,

    pub message: String,

    /// Assigned by the server on receipt; any client value is overwritten
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl ContactMessage {
    /// Checks field shapes, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validate_length("name", &self.name, NAME_MIN, NAME_MAX));
        errors.check(validate_email("email", &self.email));
        errors.check(validate_length(
            "message",
            &self.message,
            MESSAGE_MIN,
            MESSAGE_MAX,
        ));
        errors.into_result()
    }
}

/// Fixed acknowledgement returned for every accepted message
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for ContactResponse {
    fn default() -> Self {
        Self {
            status: "success",
            message: "Mensaje enviado correctamente",
        }
    }
}
