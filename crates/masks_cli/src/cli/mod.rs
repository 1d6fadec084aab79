//! CLI module - argument parsing and command dispatch

pub mod commands;
pub mod input;

use clap::{Parser, Subcommand};

use commands::cpf::CpfCommands;
use commands::email::EmailCommands;
use commands::phone::PhoneCommands;

/// Mask and validate CPF numbers, phone numbers and e-mail addresses
#[derive(Parser, Debug)]
#[command(name = "masks", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Print one JSON object per input instead of plain text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// CPF masking, validation and fiscal region lookup
    #[command(subcommand)]
    Cpf(CpfCommands),

    /// Phone number masking and lookup
    #[command(subcommand)]
    Phone(PhoneCommands),

    /// E-mail validation
    #[command(subcommand)]
    Email(EmailCommands),
}
