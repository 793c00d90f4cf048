use anyhow::Result;
use std::io::{self, Write};

pub(crate) fn execute(prompt: &str) -> Result<bool> {
    print!("{} (y/N): ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let choice = input.trim().to_lowercase();
    Ok(choice == "y" || choice == "yes")
}
