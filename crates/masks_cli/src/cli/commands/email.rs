//! `masks email` command

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use form_masks::validate_email;

use crate::cli::GlobalOpts;
use crate::cli::input::{collect_inputs, print_json};

#[derive(Subcommand, Debug)]
pub enum EmailCommands {
    /// Check e-mail addresses; exits with status 1 if any is invalid
    Validate(ValidateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Addresses to check (read from stdin when omitted)
    pub inputs: Vec<String>,
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    input: &'a str,
    valid: bool,
}

pub fn run(cmd: EmailCommands, global: &GlobalOpts) -> Result<bool> {
    match cmd {
        EmailCommands::Validate(args) => {
            let mut all_valid = true;
            for input in collect_inputs(args.inputs)? {
                let valid = validate_email(&input);
                all_valid &= valid;
                if global.json {
                    print_json(&ValidationOutput {
                        input: &input,
                        valid,
                    })?;
                } else {
                    println!("{}\t{}", input, if valid { "valid" } else { "invalid" });
                }
            }
            Ok(all_valid)
        }
    }
}
