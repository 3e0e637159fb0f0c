//! PhoneNumber value object.

use super::errors::PhoneFormatError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which of the two accepted phone number shapes a value matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneFormat {
    /// `DDD-DDD-DDDD`: 10 digits with a 3-digit area code prefix.
    AreaCode,
    /// `DDD-DDDD`: 7 digits without an area code.
    Local,
}

/// A type-safe wrapper for phone numbers.
///
/// A `PhoneNumber` can only be obtained through [`PhoneNumber::new`], which
/// runs the full rule pipeline, so any instance is valid by construction.
///
/// # Example
///
/// ```
/// use format_validators::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123-123-1234").unwrap();
/// assert_eq!(phone.as_str(), "123-123-1234");
/// assert!(phone.has_area_code());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    value: String,
    format: PhoneFormat,
}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// Applied in order; the first failing rule is returned:
    ///
    /// 1. Every character must be a digit or a dash
    /// 2. Two or more dashes select the area-code form, otherwise local form
    /// 3. Exactly 10 digits (area-code form) or 7 digits (local form)
    /// 4. Dashes at indices 3 and 7 (area-code form), or exactly one dash at
    ///    index 3 (local form)
    ///
    /// # Errors
    ///
    /// Returns the [`PhoneFormatError`] for the first rule violated.
    pub fn new(phone: impl Into<String>) -> Result<Self, PhoneFormatError> {
        let phone = phone.into();
        let format = Self::validate(&phone)?;

        Ok(Self {
            value: phone,
            format,
        })
    }

    /// Run the rule pipeline, returning the matched shape.
    fn validate(phone: &str) -> Result<PhoneFormat, PhoneFormatError> {
        // Everything except dashes must be a digit
        if phone
            .chars()
            .any(|c| c != '-' && !c.is_ascii_digit())
        {
            return Err(PhoneFormatError::NonDigitCharacter);
        }

        // Two or more dashes means the area-code form, regardless of how the
        // digits are actually grouped
        let dash_count = phone.chars().filter(|&c| c == '-').count();
        let digit_count = phone.chars().filter(char::is_ascii_digit).count();

        // All characters are ASCII from here on, so byte indices from
        // find/rfind line up with character positions
        if dash_count >= 2 {
            if digit_count != 10 {
                return Err(PhoneFormatError::WrongDigitCountWithAreaCode);
            }

            if phone.find('-') == Some(3) && phone.rfind('-') == Some(7) {
                Ok(PhoneFormat::AreaCode)
            } else {
                Err(PhoneFormatError::MisplacedDashes)
            }
        } else {
            if digit_count != 7 {
                return Err(PhoneFormatError::WrongDigitCountWithoutAreaCode);
            }

            if dash_count != 1 {
                return Err(PhoneFormatError::WrongDashCount);
            }

            if phone.find('-') == Some(3) {
                Ok(PhoneFormat::Local)
            } else {
                Err(PhoneFormatError::MisplacedDash)
            }
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Which of the two accepted shapes this number matched.
    pub fn format(&self) -> PhoneFormat {
        self.format
    }

    /// Whether the number includes a 3-digit area code prefix.
    pub fn has_area_code(&self) -> bool {
        self.format == PhoneFormat::AreaCode
    }

    /// Get the phone number with only digits (no dashes).
    pub fn digits_only(&self) -> String {
        self.value
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
