pub mod cpf;
pub mod digits;
pub mod field;
pub mod masked;
pub mod pagination;
pub mod phone;
pub mod regex_patterns;
pub mod settings;
pub mod states;
pub mod validation;

#[cfg(test)]
mod integration_tests;

pub use cpf::{CPF_LENGTH, Cpf, FISCAL_REGIONS, FiscalRegion, check_digits, mask_cpf, validate_cpf};
pub use digits::{MAX_DIGITS, RawDigits, strip_non_digits};
pub use field::{CpfField, CpfMask, Mask, MaskedField, PhoneField, PhoneMask};
pub use masked::Masked;
pub use pagination::{Page, filter_items, paginate, paginate_with};
pub use phone::{AREA_CODES, AreaCode, Phone, PhoneKind, area_code, mask_phone};
pub use settings::{SETTINGS, Settings};
pub use states::{STATES, StateInfo};
pub use validation::{FieldError, FormErrors, Validator, validate_email};
