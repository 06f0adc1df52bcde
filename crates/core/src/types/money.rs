//! Money amounts in Philippine pesos.
//!
//! Amounts are stored as integer centavos to avoid floating-point drift
//! and to map directly onto an INTEGER database column. Conversion to
//! [`Decimal`] is provided for display and reporting.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A peso amount in centavos.
///
/// ```
/// use soycart_core::Money;
///
/// let price = Money::from_centavos(2500);
/// assert_eq!(price.to_string(), "₱25.00");
/// assert_eq!((price * 3).as_centavos(), 7500);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero pesos.
    pub const ZERO: Self = Self(0);

    /// Create an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Create an amount from whole pesos.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Get the amount in centavos.
    #[must_use]
    pub const fn as_centavos(&self) -> i64 {
        self.0
    }

    /// Whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Convert to a two-decimal-place [`Decimal`] peso value.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{}", self.to_decimal())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Money {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Money {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let centavos = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(centavos))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Money {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pesos() {
        assert_eq!(Money::from_pesos(20).as_centavos(), 2000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_centavos(2000).to_string(), "₱20.00");
        assert_eq!(Money::from_centavos(2550).to_string(), "₱25.50");
        assert_eq!(Money::ZERO.to_string(), "₱0.00");
    }

    #[test]
    fn test_line_total() {
        let unit = Money::from_pesos(25);
        assert_eq!(unit * 4, Money::from_pesos(100));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_pesos(20), Money::from_pesos(25)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_pesos(45));
    }

    #[test]
    fn test_serde_transparent() {
        let m = Money::from_centavos(2500);
        assert_eq!(serde_json::to_string(&m).unwrap(), "2500");
        let parsed: Money = serde_json::from_str("2500").unwrap();
        assert_eq!(parsed, m);
    }

    #[test]
    fn test_is_positive() {
        assert!(Money::from_centavos(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::from_centavos(-5).is_positive());
    }
}
