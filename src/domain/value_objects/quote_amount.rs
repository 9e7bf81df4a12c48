//! # Quote Amount
//!
//! The price a provider would charge, with integer-normalizing serialization.
//!
//! A computed amount with no fractional part is emitted as a JSON integer
//! (`8.0` becomes `8`) across the whole decimal range; anything else keeps
//! its fraction (`7.5`).
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::value_objects::QuoteAmount;
//! use rust_decimal::Decimal;
//!
//! let whole = QuoteAmount::new(Decimal::new(80, 1));
//! assert_eq!(serde_json::to_string(&whole).unwrap(), "8");
//!
//! let fractional = QuoteAmount::new(Decimal::new(75, 1));
//! assert_eq!(serde_json::to_string(&fractional).unwrap(), "7.5");
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use std::fmt;

/// A computed quote value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct QuoteAmount(Decimal);

impl QuoteAmount {
    /// Zero quote.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal amount.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount has no fractional part.
    #[inline]
    #[must_use]
    pub fn is_integer(self) -> bool {
        self.0.fract().is_zero()
    }
}

impl From<Decimal> for QuoteAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Serialize for QuoteAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integer() {
            if let Some(whole) = self.0.to_i128() {
                return serializer.serialize_i128(whole);
            }
        }
        match self.0.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => Err(S::Error::custom(format!(
                "quote amount {} is not representable",
                self.0
            ))),
        }
    }
}

impl fmt::Display for QuoteAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
