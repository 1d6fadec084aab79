use lazy_static::lazy_static;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;

/// Constants
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;
pub const PAGE_SIZE_ENV: &str = "FORM_MASKS_PAGE_SIZE";
pub const MAX_PAGE_SIZE_ENV: &str = "FORM_MASKS_MAX_PAGE_SIZE";

/// Tunables for the list helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Page size used when a caller asks for size 0
    pub page_size: usize,
    /// Upper bound for any requested page size
    pub max_page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

lazy_static! {
    /// Process-wide settings, read from the environment on first use
    pub static ref SETTINGS: Settings = Settings::from_env();
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup; unset or unusable values fall back
    /// to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_page_size = positive(&lookup, MAX_PAGE_SIZE_ENV).unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        let page_size = positive(&lookup, PAGE_SIZE_ENV)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(max_page_size);

        Self {
            page_size,
            max_page_size,
        }
    }

    /// Size to actually use for a request of `requested` items per page
    pub fn effective_page_size(&self, requested: usize) -> usize {
        if requested == 0 {
            self.page_size
        } else {
            requested.min(self.max_page_size)
        }
    }
}

fn positive<F>(lookup: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            warn!("Ignoring {}={:?}: expected a positive integer", key, value);
            None
        }
    }
}
