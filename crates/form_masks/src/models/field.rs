//! Display state for a single masked input.
//!
//! The field only keeps what the user sees. `on_change` hands the digits
//! back so the enclosing form stays the single owner of the submitted value.

use super::cpf::mask_cpf;
use super::masked::Masked;
use super::phone::mask_phone;

/// A display mask over free-form input
pub trait Mask {
    fn apply(&self, input: &str) -> Masked;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpfMask;

impl Mask for CpfMask {
    fn apply(&self, input: &str) -> Masked {
        mask_cpf(input)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneMask;

impl Mask for PhoneMask {
    fn apply(&self, input: &str) -> Masked {
        mask_phone(input)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedField<M> {
    mask: M,
    masked: String,
}

pub type CpfField = MaskedField<CpfMask>;
pub type PhoneField = MaskedField<PhoneMask>;

impl<M: Mask> MaskedField<M> {
    pub fn new(mask: M) -> Self {
        Self {
            mask,
            masked: String::new(),
        }
    }

    /// Start from a value already stored by the form, e.g. when editing a record
    pub fn with_value(mask: M, raw: &str) -> Self {
        let mut field = Self::new(mask);
        field.on_change(raw);
        field
    }

    /// Update the display string and return the raw digits for the form
    pub fn on_change(&mut self, input: &str) -> String {
        let Masked { masked, raw } = self.mask.apply(input);
        self.masked = masked;
        raw
    }

    pub fn masked(&self) -> &str {
        &self.masked
    }

    pub fn reset(&mut self) {
        self.masked.clear();
    }
}
