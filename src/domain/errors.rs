//! Domain validation errors.
//!
//! One variant per validation rule. The `Display` text of each variant is the
//! exact message shown to the user, so the prompt loop can print errors
//! verbatim without a separate message table.

use thiserror::Error;

/// Errors reported by the phone number rule pipeline.
///
/// Variants appear in pipeline order; validation stops at the first failure,
/// so only one of these is ever produced per attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneFormatError {
    /// A character other than a digit or dash was found.
    #[error("Phone number can only contain digits and dashes.")]
    NonDigitCharacter,

    /// Area-code form (two or more dashes) with a digit count other than 10.
    #[error("Phone number must contain 10 digits (with area code).")]
    WrongDigitCountWithAreaCode,

    /// Local form (fewer than two dashes) with a digit count other than 7.
    #[error("Phone number must contain 7 digits (without area code).")]
    WrongDigitCountWithoutAreaCode,

    /// Area-code form where the dashes are not at indices 3 and 7.
    #[error("Phone number is incorrectly formatted. Check that dashes are in the right place.")]
    MisplacedDashes,

    /// Local form without exactly one dash.
    #[error("Phone number must contain one or two dashes.")]
    WrongDashCount,

    /// Local form where the single dash is not at index 3.
    #[error("Phone number is incorrectly formatted. Check that the dash is in the right place.")]
    MisplacedDash,
}

/// Errors reported by the email address rule pipeline.
///
/// Variants appear in pipeline order; the first failing rule wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailFormatError {
    /// A whitespace character was found anywhere in the address.
    #[error("Email address cannot contain spaces.")]
    ContainsWhitespace,

    /// The address does not contain exactly one '@'.
    #[error("Email address must contain exactly one '@' symbol.")]
    WrongAtSignCount,

    /// The address contains no '.' at all.
    #[error("Email address must contain at least one '.' symbol.")]
    MissingDot,

    /// The '@' is the first or last character.
    #[error("'@' cannot appear at the start or the end of the email address.")]
    AtSignAtEdge,

    /// A '.' is the first or last character.
    #[error("'.' cannot appear at the start or the end of the email address.")]
    DotAtEdge,

    /// The part after the last '.' is longer than three characters.
    #[error("Domain of email address cannot exceed three characters.")]
    DomainTooLong,
}
