//! EmailAddress value object.

use super::errors::EmailFormatError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for email addresses.
///
/// An `EmailAddress` can only be obtained through [`EmailAddress::new`],
/// which runs the full rule pipeline, so any instance is valid by
/// construction. The rules are deliberately simple and syntactic; nothing
/// here checks that the address is deliverable.
///
/// # Example
///
/// ```
/// use format_validators::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.local_part(), "user");
/// assert_eq!(email.top_level_domain(), "com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Validation Rules
    ///
    /// Applied in order; the first failing rule is returned:
    ///
    /// 1. No whitespace anywhere
    /// 2. Exactly one '@' symbol
    /// 3. At least one '.' symbol
    /// 4. '@' not at the start or end
    /// 5. '.' not at the start or end
    /// 6. At most three characters after the last '.'
    ///
    /// # Errors
    ///
    /// Returns the [`EmailFormatError`] for the first rule violated.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailFormatError> {
        let email = email.into();
        Self::validate(&email)?;

        Ok(Self(email))
    }

    /// Run the rule pipeline.
    fn validate(email: &str) -> Result<(), EmailFormatError> {
        if email.chars().any(char::is_whitespace) {
            return Err(EmailFormatError::ContainsWhitespace);
        }

        if email.chars().filter(|&c| c == '@').count() != 1 {
            return Err(EmailFormatError::WrongAtSignCount);
        }

        let last_dot = email
            .chars()
            .enumerate()
            .filter(|&(_, c)| c == '.')
            .last()
            .map(|(i, _)| i);
        let Some(last_dot) = last_dot else {
            return Err(EmailFormatError::MissingDot);
        };

        if email.starts_with('@') || email.ends_with('@') {
            return Err(EmailFormatError::AtSignAtEdge);
        }

        if email.starts_with('.') || email.ends_with('.') {
            return Err(EmailFormatError::DotAtEdge);
        }

        // The limit is three characters after the last dot, expressed as
        // length minus dot index so the dot itself accounts for the fourth
        if email.chars().count() - last_dot > 4 {
            return Err(EmailFormatError::DomainTooLong);
        }

        Ok(())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // SAFETY: Constructor validates exactly one '@' exists
        self.0
            .split('@')
            .next()
            .expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: Constructor validates exactly one '@' exists
        self.0
            .split('@')
            .nth(1)
            .expect("email validated to contain '@'")
    }

    /// Get the top-level domain (after the last '.').
    pub fn top_level_domain(&self) -> &str {
        // SAFETY: Constructor validates at least one '.' exists
        self.0
            .rsplit('.')
            .next()
            .expect("email validated to contain '.'")
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
