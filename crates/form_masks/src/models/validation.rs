//! Client-side checks run before a form is submitted.

use serde::Serialize;
use thiserror::Error;

use super::cpf::validate_cpf;
use super::phone::Phone;
use super::regex_patterns::EMAIL_PATTERN;

pub const REQUIRED_MESSAGE: &str = "Campo obrigatório";
pub const INVALID_CPF_MESSAGE: &str = "CPF inválido";
pub const INVALID_EMAIL_MESSAGE: &str = "E-mail inválido";
pub const INVALID_PHONE_MESSAGE: &str = "Telefone inválido";

pub fn validate_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input.trim())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Inline errors to show next to each field, in the order they were found
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{} invalid field(s)", .errors.len())]
#[serde(transparent)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; a field keeps only its first one
    pub fn push(&mut self, field: &str, message: &str) {
        if self.for_field(field).is_none() {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Record [`REQUIRED_MESSAGE`] when the trimmed value is empty
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, REQUIRED_MESSAGE);
        }
    }
}

/// Chains field checks and collects every failure.
///
/// Format checks skip empty values; pair them with `required` for mandatory
/// fields.
///
/// ```
/// use form_masks::models::validation::Validator;
///
/// let result = Validator::new()
///     .required("nome", "Maria")
///     .required("cpf", "529.982.247-25")
///     .cpf("cpf", "529.982.247-25")
///     .email("email", "")
///     .finish();
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FormErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, field: &str, value: &str) -> Self {
        self.errors.require(field, value);
        self
    }

    pub fn cpf(self, field: &str, value: &str) -> Self {
        self.check(field, value, validate_cpf, INVALID_CPF_MESSAGE)
    }

    pub fn email(self, field: &str, value: &str) -> Self {
        self.check(field, value, validate_email, INVALID_EMAIL_MESSAGE)
    }

    pub fn phone(self, field: &str, value: &str) -> Self {
        self.check(field, value, |v| Phone::parse(v).is_ok(), INVALID_PHONE_MESSAGE)
    }

    fn check<F>(mut self, field: &str, value: &str, is_valid: F, message: &str) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if !value.trim().is_empty() && !is_valid(value) {
            self.errors.push(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
