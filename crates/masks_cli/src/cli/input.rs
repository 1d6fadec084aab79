use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead};

/// Inputs given on the command line, or every stdin line when there are none
pub fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    log::debug!("Read {} input line(s) from stdin", lines.len());
    Ok(lines)
}

/// Print `value` as compact JSON on its own line
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
