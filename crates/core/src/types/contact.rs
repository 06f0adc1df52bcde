//! Contact number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ContactNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ContactError {
    /// The input string is empty.
    #[error("contact number cannot be empty")]
    Empty,
    /// The input contains a non-digit character.
    #[error("contact number may only contain digits")]
    NonDigit,
    /// The input has the wrong number of digits.
    #[error("contact number must be {min}-{max} digits")]
    WrongLength {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
    },
}

/// A mobile contact number used to coordinate pickup and delivery.
///
/// ## Constraints
///
/// - 10-13 ASCII digits, nothing else (no spaces, `+`, or dashes)
///
/// ## Examples
///
/// ```
/// use soycart_core::ContactNumber;
///
/// assert!(ContactNumber::parse("09171234567").is_ok());
/// assert!(ContactNumber::parse("12345").is_err());
/// assert!(ContactNumber::parse("0917-123-4567").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ContactNumber(String);

impl ContactNumber {
    /// Minimum digit count.
    pub const MIN_DIGITS: usize = 10;

    /// Maximum digit count.
    pub const MAX_DIGITS: usize = 13;

    /// Parse a `ContactNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a non-digit
    /// character, or is not 10-13 digits long.
    pub fn parse(s: &str) -> Result<Self, ContactError> {
        if s.is_empty() {
            return Err(ContactError::Empty);
        }

        if !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContactError::NonDigit);
        }

        if s.len() < Self::MIN_DIGITS || s.len() > Self::MAX_DIGITS {
            return Err(ContactError::WrongLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the contact number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ContactNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContactNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContactNumber {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ContactNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for ContactNumber {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for ContactNumber {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for ContactNumber {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(ContactNumber::parse("0917123456").is_ok()); // 10 digits
        assert!(ContactNumber::parse("09171234567").is_ok()); // 11 digits
        assert!(ContactNumber::parse("6391712345678").is_ok()); // 13 digits
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(ContactNumber::parse(""), Err(ContactError::Empty)));
    }

    #[test]
    fn test_parse_too_few_digits() {
        assert!(matches!(
            ContactNumber::parse("12345"),
            Err(ContactError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_parse_too_many_digits() {
        assert!(matches!(
            ContactNumber::parse("12345678901234"),
            Err(ContactError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_parse_non_digit() {
        assert!(matches!(
            ContactNumber::parse("0917-123-4567"),
            Err(ContactError::NonDigit)
        ));
        assert!(matches!(
            ContactNumber::parse("+639171234567"),
            Err(ContactError::NonDigit)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let contact = ContactNumber::parse("09171234567").unwrap();
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, "\"09171234567\"");

        let parsed: ContactNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contact);
    }
}
