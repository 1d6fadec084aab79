//! `masks cpf` command - mask, validate and locate CPF numbers

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use form_masks::{Cpf, FiscalRegion, mask_cpf, validate_cpf};

use crate::cli::GlobalOpts;
use crate::cli::input::{collect_inputs, print_json};

#[derive(Subcommand, Debug)]
pub enum CpfCommands {
    /// Format input as 000.000.000-00
    Mask(InputArgs),

    /// Check CPF check digits; exits with status 1 if any input is invalid
    Validate(InputArgs),

    /// Show the fiscal region that issued a CPF
    Region(RegionArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Values to process (read from stdin when omitted)
    pub inputs: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct RegionArgs {
    /// CPF, with or without punctuation
    pub cpf: String,
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    input: &'a str,
    valid: bool,
}

#[derive(Serialize)]
struct RegionOutput<'a> {
    cpf: String,
    region: &'a FiscalRegion,
}

/// Run the cpf command, returning false when some input failed validation
pub fn run(cmd: CpfCommands, global: &GlobalOpts) -> Result<bool> {
    match cmd {
        CpfCommands::Mask(args) => run_mask(args, global),
        CpfCommands::Validate(args) => run_validate(args, global),
        CpfCommands::Region(args) => run_region(args, global),
    }
}

fn run_mask(args: InputArgs, global: &GlobalOpts) -> Result<bool> {
    for input in collect_inputs(args.inputs)? {
        let masked = mask_cpf(&input);
        if global.json {
            println!("{}", masked.to_json()?);
        } else {
            println!("{}", masked.masked);
        }
    }
    Ok(true)
}

fn run_validate(args: InputArgs, global: &GlobalOpts) -> Result<bool> {
    let mut all_valid = true;
    for input in collect_inputs(args.inputs)? {
        let valid = validate_cpf(&input);
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

fn run_region(args: RegionArgs, global: &GlobalOpts) -> Result<bool> {
    let cpf = Cpf::parse(&args.cpf)?;
    let region = cpf.fiscal_region();

    if global.json {
        print_json(&RegionOutput {
            cpf: cpf.formatted(),
            region,
        })?;
    } else {
        println!("{}\t{}", cpf, region);
    }
    Ok(true)
}
