//! Interactive format validators for phone numbers and email addresses.
//!
//! This library backs two small interactive programs (`phone-validator` and
//! `email-validator`) that prompt for a value on standard input and re-prompt
//! until it passes a fixed set of syntactic rules.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects (`PhoneNumber`, `EmailAddress`)
//!   validated at construction time, with one typed error per rule
//! - **prompt**: The read-validate-reprompt loop, generic over its input and
//!   output streams so it can be tested with in-memory buffers

pub mod domain;
pub mod prompt;

pub use domain::{EmailAddress, EmailFormatError, PhoneFormat, PhoneFormatError, PhoneNumber};
pub use prompt::{PromptError, Prompter};
