//! Shared test helpers for integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo;

/// Helper to get a masks command
pub fn masks() -> Command {
    Command::new(cargo::cargo_bin!("masks"))
}

pub const VALID_CPF: &str = "52998224725";
pub const INVALID_CPF: &str = "12345678900";
