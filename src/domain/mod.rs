//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for validated phone numbers and
//! email addresses. These value objects run the full rule pipeline at
//! construction time, so holding one is proof that the underlying string
//! passed every rule.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::{EmailFormatError, PhoneFormatError};
pub use phone::{PhoneFormat, PhoneNumber};
