//! User input utilities for interactive command-line prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    prompt_confirmation_from(prompt, &mut io::stdin().lock())
}

/// Like [`prompt_confirmation`], reading answers from `reader`.
///
/// End of input counts as 'no'.
pub fn prompt_confirmation_from(prompt: &str, reader: &mut impl BufRead) -> Result<bool> {
    loop {
        print!("{prompt} (y/N): ");
        io::stdout().flush().context("Failed to flush prompt")?;
        let input = read_trimmed_line(reader)?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok(input.trim().to_string())
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
