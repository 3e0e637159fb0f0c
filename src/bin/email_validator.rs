//! Interactive email address validator.
//!
//! Prompts for an email address and re-prompts until one passes the
//! simplified structural rule-set.

use anyhow::Result;
use format_validators::domain::EmailAddress;
use format_validators::prompt::Prompter;
use tracing::info;
use tracing_subscriber::EnvFilter;

const FIRST_PROMPT: &str = "Enter the email address to be validated: ";
const RETRY_PROMPT: &str = "Re-enter the email address to be validated: ";

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

    let email = prompter.read_until_valid(FIRST_PROMPT, RETRY_PROMPT, |s| EmailAddress::new(s))?;
    info!(email = %email, "email address accepted");

    prompter.say(&format!("{} is a valid email address.", email))?;
    // No trailing space here, unlike the phone validator's banner
    prompter.say(" *** PROGRAM TERMINATED SUCCESSFULLY ***")?;

    Ok(())
}
