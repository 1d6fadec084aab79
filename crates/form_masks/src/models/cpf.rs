//! CPF display mask and check-digit validation.
//!
//! A CPF has nine base digits followed by two check digits. The ninth base
//! digit names the fiscal region that issued the number.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::digits::{RawDigits, digit_values, strip_non_digits};
use super::masked::Masked;
use super::states::StateInfo;
use crate::errors::{CpfRejection, FormError, FormResult};

/// Number of digits in a complete CPF
pub const CPF_LENGTH: usize = 11;

/// Format any input as `000.000.000-00`, partially when fewer digits are typed
pub fn mask_cpf(input: &str) -> Masked {
    let raw = RawDigits::extract(input);
    let d = raw.as_str();

    let masked = match d.len() {
        n if n > 9 => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        n if n > 6 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        n if n > 3 => format!("{}.{}", &d[..3], &d[3..]),
        _ => d.to_string(),
    };

    trace!("CPF mask applied to {} digit(s)", d.len());
    Masked::new(masked, raw)
}

/// True when `input` holds exactly 11 digits forming a legal CPF.
///
/// Punctuation is ignored. Numbers made of one repeated digit pass the
/// checksum but are never issued, so they are refused too.
pub fn validate_cpf(input: &str) -> bool {
    match rejection(&digit_values(&strip_non_digits(input))) {
        Some(reason) => {
            debug!("CPF rejected: {}", reason);
            false
        }
        None => true,
    }
}

/// Compute both check digits for the nine base digits
pub fn check_digits(base: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(base);
    let mut extended = [0u8; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    (first, check_digit(&extended))
}

/// Weighted mod-11 digit over `digits`; weights run from `len + 1` down to 2
fn check_digit(digits: &[u8]) -> u8 {
    let top_weight = digits.len() as u32 + 1;
    let soma: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &digit)| u32::from(digit) * (top_weight - i as u32))
        .sum();

    let resto = (soma * 10) % 11;
    // resto == 11 is unreachable
    if resto == 10 || resto == 11 {
        0
    } else {
        resto as u8
    }
}

fn rejection(digits: &[u8]) -> Option<CpfRejection> {
    if digits.len() != CPF_LENGTH {
        return Some(CpfRejection::WrongLength(digits.len()));
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return Some(CpfRejection::RepeatedDigits);
    }
    if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
        return Some(CpfRejection::ChecksumMismatch);
    }
    None
}

/// Receita Federal fiscal region, identified by the ninth CPF digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiscalRegion {
    /// Region number, 1 to 10
    pub number: u8,
    /// UF codes served by the region
    pub states: &'static [&'static str],
}

/// Indexed by the ninth digit; digit 0 is the 10th region
pub static FISCAL_REGIONS: [FiscalRegion; 10] = [
    FiscalRegion { number: 10, states: &["RS"] },
    FiscalRegion { number: 1, states: &["DF", "GO", "MS", "MT", "TO"] },
    FiscalRegion { number: 2, states: &["AC", "AM", "AP", "PA", "RO", "RR"] },
    FiscalRegion { number: 3, states: &["CE", "MA", "PI"] },
    FiscalRegion { number: 4, states: &["AL", "PB", "PE", "RN"] },
    FiscalRegion { number: 5, states: &["BA", "SE"] },
    FiscalRegion { number: 6, states: &["MG"] },
    FiscalRegion { number: 7, states: &["ES", "RJ"] },
    FiscalRegion { number: 8, states: &["SP"] },
    FiscalRegion { number: 9, states: &["PR", "SC"] },
];

impl FiscalRegion {
    pub fn from_digit(digit: u8) -> Option<&'static FiscalRegion> {
        FISCAL_REGIONS.get(usize::from(digit))
    }

    pub fn state_infos(&self) -> Vec<&'static StateInfo> {
        self.states.iter().filter_map(|uf| StateInfo::by_uf(uf)).collect()
    }

    pub fn covers(&self, uf: &str) -> bool {
        self.states.iter().any(|s| s.eq_ignore_ascii_case(uf))
    }
}

impl fmt::Display for FiscalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ª Região Fiscal ({})", self.number, self.states.join(", "))
    }
}

/// A CPF that passed [`validate_cpf`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    pub fn parse(input: &str) -> FormResult<Self> {
        let digits = strip_non_digits(input);
        if let Some(reason) = rejection(&digit_values(&digits)) {
            debug!("CPF rejected: {}", reason);
            return Err(FormError::InvalidCpf(reason));
        }
        Ok(Self(digits))
    }

    /// The 11 digits without punctuation
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// `000.000.000-00`
    pub fn formatted(&self) -> String {
        mask_cpf(&self.0).masked
    }

    pub fn fiscal_region(&self) -> &'static FiscalRegion {
        let ninth = self.0.as_bytes()[8] - b'0';
        &FISCAL_REGIONS[usize::from(ninth)]
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
