//! Interactive phone number validator.
//!
//! Prompts for a phone number of the form `123-123-1234` or `123-1234` and
//! re-prompts until one is entered.

use anyhow::Result;
use format_validators::domain::PhoneNumber;
use format_validators::prompt::Prompter;
use tracing::info;
use tracing_subscriber::EnvFilter;

const FIRST_PROMPT: &str = "Enter a phone number of the form 123-123-1234 or 123-1234: ";
const RETRY_PROMPT: &str = "Re-enter a phone number of the form 123-123-1234 or 123-1234: ";

fn main() -> Result<()> {
    // Logging goes to stderr; stdout carries the prompts and results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let phone = prompter.read_until_valid(FIRST_PROMPT, RETRY_PROMPT, |s| PhoneNumber::new(s))?;
    info!(phone = %phone, area_code = phone.has_area_code(), "phone number accepted");

    prompter.say(&format!("{} is a valid phone number.", phone))?;
    prompter.say(" *** PROGRAM TERMINATED SUCCESSFULLY *** ")?;

    Ok(())
}
