use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::FormResult;

/// Output of every mask: the string to display and the digits to store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Masked {
    /// Punctuated display value
    pub masked: String,
    /// Digits only, what the form submits
    pub raw: String,
}

impl Masked {
    pub fn new<M: Into<String>, R: Into<String>>(masked: M, raw: R) -> Self {
        Self {
            masked: masked.into(),
            raw: raw.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json_str: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

impl fmt::Display for Masked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked)
    }
}
