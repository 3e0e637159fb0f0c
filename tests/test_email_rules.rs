//! Rule-level tests for the email address format.
//!
//! The pipeline order matters as much as the rules themselves: whitespace is
//! reported before structure, structure before domain length.

use format_validators::domain::{EmailAddress, EmailFormatError};

#[test]
fn test_accepted_addresses() {
    for address in ["a@b.co", "user@example.com", "first.last@domain.org"] {
        assert!(EmailAddress::new(address).is_ok(), "{address} should pass");
    }
}

/// Whitespace is the first rule, so the space wins over the structural
/// problems that follow it.
#[test]
fn test_whitespace_reported_first() {
    assert_eq!(
        EmailAddress::new("no space@allowed.com"),
        Err(EmailFormatError::ContainsWhitespace)
    );
    // Whitespace beats the doubled '@' even though both are present
    assert_eq!(
        EmailAddress::new("a b@c@d.com"),
        Err(EmailFormatError::ContainsWhitespace)
    );
}

#[test]
fn test_at_sign_rules() {
    assert_eq!(
        EmailAddress::new("two@at@signs.com"),
        Err(EmailFormatError::WrongAtSignCount)
    );
    assert_eq!(
        EmailAddress::new("plain.string"),
        Err(EmailFormatError::WrongAtSignCount)
    );
    assert_eq!(
        EmailAddress::new("@missing.com"),
        Err(EmailFormatError::AtSignAtEdge)
    );
    assert_eq!(
        EmailAddress::new("missing@"),
        Err(EmailFormatError::MissingDot)
    );
}

#[test]
fn test_dot_rules() {
    assert_eq!(
        EmailAddress::new("user@domain"),
        Err(EmailFormatError::MissingDot)
    );
    assert_eq!(
        EmailAddress::new(".leading@dot.com"),
        Err(EmailFormatError::DotAtEdge)
    );
    assert_eq!(
        EmailAddress::new("trailing@dot.com."),
        Err(EmailFormatError::DotAtEdge)
    );
}

/// The exact boundary: three characters after the last dot pass, four fail.
#[test]
fn test_domain_length_boundary() {
    assert!(EmailAddress::new("user@domain.com").is_ok());
    assert!(EmailAddress::new("user@domain.co").is_ok());
    assert!(EmailAddress::new("user@domain.c").is_ok());
    assert_eq!(
        EmailAddress::new("user@domain.info"),
        Err(EmailFormatError::DomainTooLong)
    );
}

/// The last dot is the domain separator even when earlier dots exist.
#[test]
fn test_last_dot_is_the_separator() {
    assert!(EmailAddress::new("a.b@c.com").is_ok());
    assert_eq!(
        EmailAddress::new("a.b@c.d.info"),
        Err(EmailFormatError::DomainTooLong)
    );
}

/// Validation has no hidden state: an accepted value re-validates cleanly.
#[test]
fn test_validation_idempotent() {
    let first = EmailAddress::new("user@example.com").unwrap();
    let second = EmailAddress::new(first.as_str()).unwrap();
    assert_eq!(first, second);
}
