//! `masks phone` command - mask and inspect phone numbers

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use form_masks::{Phone, PhoneKind, mask_phone};

use crate::cli::GlobalOpts;
use crate::cli::input::{collect_inputs, print_json};

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Format input as (00) 0000-0000 or (00) 00000-0000
    Mask(MaskArgs),

    /// Show kind, area code and state of a complete number
    Info(InfoArgs),
}

#[derive(clap::Args, Debug)]
pub struct MaskArgs {
    /// Values to process (read from stdin when omitted)
    pub inputs: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Phone number, with or without punctuation
    pub phone: String,
}

#[derive(Serialize)]
struct InfoOutput {
    phone: String,
    kind: PhoneKind,
    ddd: String,
    uf: &'static str,
}

pub fn run(cmd: PhoneCommands, global: &GlobalOpts) -> Result<bool> {
    match cmd {
        PhoneCommands::Mask(args) => run_mask(args, global),
        PhoneCommands::Info(args) => run_info(args, global),
    }
}

fn run_mask(args: MaskArgs, global: &GlobalOpts) -> Result<bool> {
    for input in collect_inputs(args.inputs)? {
        let masked = mask_phone(&input);
        if global.json {
            println!("{}", masked.to_json()?);
        } else {
            println!("{}", masked.masked);
        }
    }
    Ok(true)
}

fn run_info(args: InfoArgs, global: &GlobalOpts) -> Result<bool> {
    let phone = Phone::parse(&args.phone)?;
    let ddd = phone.area_code();

    if global.json {
        print_json(&InfoOutput {
            phone: phone.formatted(),
            kind: phone.kind(),
            ddd: ddd.to_string(),
            uf: ddd.state(),
        })?;
    } else {
        println!("{}\t{}\tDDD {} ({})", phone, phone.kind(), ddd, ddd.state());
    }
    Ok(true)
}
