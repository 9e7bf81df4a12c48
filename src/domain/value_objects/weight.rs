//! # Weight
//!
//! Requester-assigned strength of interest in a topic.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Non-negative exact decimal weight.
///
/// # Examples
///
/// ```
/// use course_quotes::domain::value_objects::Weight;
/// use rust_decimal::Decimal;
///
/// let weight = Weight::new(Decimal::new(50, 0)).unwrap();
/// assert_eq!(weight.get(), Decimal::new(50, 0));
///
/// assert!(Weight::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weight(Decimal);

impl Weight {
    /// Zero weight.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a weight, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeight` if `value` is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidWeight(format!(
                "weight must be non-negative, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Creates a weight from a whole number.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// Accepts JSON numbers only; numeric strings are rejected.
impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeightVisitor;

        impl Visitor<'_> for WeightVisitor {
            type Value = Weight;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative number")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Weight(Decimal::from(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Weight::new(Decimal::from(v)).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                let value = Decimal::from_f64(v)
                    .ok_or_else(|| E::custom(format!("weight {v} is out of range")))?;
                Weight::new(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(WeightVisitor)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
