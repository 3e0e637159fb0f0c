//! The read-validate-reprompt loop.
//!
//! Prompts are written without a trailing newline and the stream is flushed
//! before each blocking read, so the cursor sits on the prompt line the way
//! an interactive user expects. The loop is generic over its reader and
//! writer so tests can drive it with in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while running the prompt loop.
///
/// Rule failures are not represented here; they are printed and retried.
/// These are the conditions that actually end the loop without a value.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The input stream closed before a valid value was entered.
    #[error("input ended before a valid value was entered")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Couples an input and an output stream into an interactive prompt.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompt repeatedly until `validate` accepts the entered line.
    ///
    /// `first_prompt` is shown on the first attempt and `retry_prompt` on
    /// every attempt after a rejection. Each line is trimmed of leading and
    /// trailing whitespace before validation. A rejected line prints one
    /// `[Error]` line with the rule's message and loops; the accepted value
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InputClosed`] if the input stream ends before
    /// a valid value is entered, or [`PromptError::Io`] if reading or
    /// writing fails.
    pub fn read_until_valid<T, E>(
        &mut self,
        first_prompt: &str,
        retry_prompt: &str,
        mut validate: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, PromptError>
    where
        E: fmt::Display,
    {
        let mut first_attempt = true;

        loop {
            let prompt = if first_attempt {
                first_prompt
            } else {
                retry_prompt
            };
            write!(self.writer, "{}", prompt)?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }

            let candidate = line.trim();
            match validate(candidate) {
                Ok(value) => {
                    debug!(candidate, "input accepted");
                    return Ok(value);
                }
                Err(reason) => {
                    debug!(candidate, %reason, "input rejected");
                    writeln!(self.writer, "[Error] {}", reason)?;
                }
            }

            first_attempt = false;
        }
    }

    /// Write a line to the output stream.
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}
