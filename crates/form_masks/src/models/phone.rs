//! Brazilian phone number mask.
//!
//! Landlines have an 8-digit local part, mobiles a 9-digit one starting
//! with 9. Both are preceded by a two-digit area code (DDD).

use log::trace;
use serde::Serialize;
use std::fmt;

use super::digits::{RawDigits, strip_non_digits};
use super::masked::Masked;
use super::states::StateInfo;
use crate::errors::{FormError, FormResult};

/// Digits in a landline number including the area code
pub const LANDLINE_LENGTH: usize = 10;
/// Digits in a mobile number including the area code
pub const MOBILE_LENGTH: usize = 11;

/// Format any input as `(00) 0000-0000`, or `(00) 00000-0000` once 11 digits
/// are present. Separators only appear when a digit follows them.
pub fn mask_phone(input: &str) -> Masked {
    let raw = RawDigits::extract(input);
    let d = raw.as_str();
    let len = d.len();
    let prefix_len = if len > LANDLINE_LENGTH { 5 } else { 4 };

    let mut masked = String::with_capacity(16);
    if len > 0 {
        masked.push('(');
        masked.push_str(&d[..len.min(2)]);
    }
    if len > 2 {
        masked.push_str(") ");
        masked.push_str(&d[2..len.min(2 + prefix_len)]);
    }
    if len > 2 + prefix_len {
        masked.push('-');
        masked.push_str(&d[2 + prefix_len..]);
    }

    trace!("Phone mask applied to {} digit(s)", len);
    Masked::new(masked, raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    Landline,
    Mobile,
}

impl PhoneKind {
    /// Kind of a complete number given as raw digits
    pub fn classify(raw: &str) -> Option<Self> {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.len() {
            MOBILE_LENGTH if raw.as_bytes()[2] == b'9' => Some(Self::Mobile),
            LANDLINE_LENGTH => Some(Self::Landline),
            _ => None,
        }
    }
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landline => write!(f, "landline"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

/// Area codes in use, with the state each one belongs to
pub const AREA_CODES: &[(u8, &str)] = &[
    (11, "SP"), (12, "SP"), (13, "SP"), (14, "SP"), (15, "SP"), (16, "SP"), (17, "SP"), (18, "SP"), (19, "SP"),
    (21, "RJ"), (22, "RJ"), (24, "RJ"),
    (27, "ES"), (28, "ES"),
    (31, "MG"), (32, "MG"), (33, "MG"), (34, "MG"), (35, "MG"), (37, "MG"), (38, "MG"),
    (41, "PR"), (42, "PR"), (43, "PR"), (44, "PR"), (45, "PR"), (46, "PR"),
    (47, "SC"), (48, "SC"), (49, "SC"),
    (51, "RS"), (53, "RS"), (54, "RS"), (55, "RS"),
    (61, "DF"),
    (62, "GO"), (64, "GO"),
    (63, "TO"),
    (65, "MT"), (66, "MT"),
    (67, "MS"),
    (68, "AC"),
    (69, "RO"),
    (71, "BA"), (73, "BA"), (74, "BA"), (75, "BA"), (77, "BA"),
    (79, "SE"),
    (81, "PE"), (87, "PE"),
    (82, "AL"),
    (83, "PB"),
    (84, "RN"),
    (85, "CE"), (88, "CE"),
    (86, "PI"), (89, "PI"),
    (91, "PA"), (93, "PA"), (94, "PA"),
    (92, "AM"), (97, "AM"),
    (95, "RR"),
    (96, "AP"),
    (98, "MA"), (99, "MA"),
];

/// Two-digit DDD known to be in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AreaCode(u8);

impl AreaCode {
    pub fn new(code: u8) -> Option<Self> {
        AREA_CODES
            .iter()
            .any(|(ddd, _)| *ddd == code)
            .then_some(Self(code))
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    /// UF the area code belongs to
    pub fn state(&self) -> &'static str {
        AREA_CODES
            .iter()
            .find(|(ddd, _)| *ddd == self.0)
            .map(|(_, uf)| *uf)
            .unwrap_or_default()
    }

    pub fn state_info(&self) -> Option<&'static StateInfo> {
        StateInfo::by_uf(self.state())
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Area code at the start of `input`, punctuation ignored
pub fn area_code(input: &str) -> Option<AreaCode> {
    let raw = RawDigits::extract(input);
    let ddd = raw.as_str().get(..2)?.parse::<u8>().ok()?;
    AreaCode::new(ddd)
}

/// A complete phone number with a known area code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone {
    digits: String,
    kind: PhoneKind,
    area_code: AreaCode,
}

impl Phone {
    pub fn parse(input: &str) -> FormResult<Self> {
        let digits = strip_non_digits(input);
        let kind = PhoneKind::classify(&digits).ok_or_else(|| {
            FormError::InvalidPhone(match digits.len() {
                MOBILE_LENGTH => "11-digit numbers must start with 9 after the area code".to_string(),
                n => format!("expected 10 or 11 digits, got {}", n),
            })
        })?;
        let area_code = area_code(&digits)
            .ok_or_else(|| FormError::InvalidPhone(format!("unknown area code {}", &digits[..2])))?;

        Ok(Self {
            digits,
            kind,
            area_code,
        })
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }

    pub fn area_code(&self) -> AreaCode {
        self.area_code
    }

    pub fn formatted(&self) -> String {
        mask_phone(&self.digits).masked
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
