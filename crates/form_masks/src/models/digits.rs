use std::fmt;

use super::regex_patterns::NON_DIGIT_PATTERN;

/// Longest raw value any mask keeps (CPF and mobile numbers both have 11)
pub const MAX_DIGITS: usize = 11;

/// Punctuation-free value of a masked input.
///
/// Only ASCII digits, never more than [`MAX_DIGITS`] of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawDigits(String);

impl RawDigits {
    /// Strip everything but digits and keep at most [`MAX_DIGITS`]
    pub fn extract(input: &str) -> Self {
        let mut digits = strip_non_digits(input);
        // ASCII only, so byte truncation never splits a char
        digits.truncate(MAX_DIGITS);
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Numeric value of each digit, in order
    pub fn values(&self) -> Vec<u8> {
        digit_values(&self.0)
    }
}

impl AsRef<str> for RawDigits {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RawDigits> for String {
    fn from(raw: RawDigits) -> Self {
        raw.0
    }
}

/// Remove every non-digit without truncating
pub fn strip_non_digits(input: &str) -> String {
    NON_DIGIT_PATTERN.replace_all(input, "").into_owned()
}

/// Numeric values of the ASCII digits in `digits`; other characters are skipped
pub fn digit_values(digits: &str) -> Vec<u8> {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}
