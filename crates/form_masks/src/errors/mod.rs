use thiserror::Error;

/// Reason a CPF number was refused by [`crate::models::cpf::Cpf::parse`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpfRejection {
    #[error("expected 11 digits, got {0}")]
    WrongLength(usize),

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("check digits do not match")]
    ChecksumMismatch,
}

/// Centralized error type for form_masks
#[derive(Error, Debug)]
pub enum FormError {
    #[error("JSON (de)serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid CPF: {0}")]
    InvalidCpf(#[from] CpfRejection),

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}

/// Alias for fallible operations in form_masks
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormError::from(CpfRejection::WrongLength(9));
        assert_eq!(err.to_string(), "Invalid CPF: expected 11 digits, got 9");

        let err = FormError::InvalidPhone("unknown area code 20".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: unknown area code 20");
    }

    #[test]
    fn test_serde_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormError = json_err.into();
        assert!(matches!(err, FormError::SerdeJson(_)));
    }
}
