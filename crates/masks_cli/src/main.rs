use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    let all_valid = match cli.command {
        Commands::Cpf(cmd) => cli::commands::cpf::run(cmd, &cli.global)?,
        Commands::Phone(cmd) => cli::commands::phone::run(cmd, &cli.global)?,
        Commands::Email(cmd) => cli::commands::email::run(cmd, &cli.global)?,
    };

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
