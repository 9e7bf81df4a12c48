//! # Checked Arithmetic
//!
//! Traits and utilities for safe decimal arithmetic in quote pricing.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`percent_of`] - Applies a whole-number percentage to a value
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::value_objects::arithmetic::{percent_of, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! let a = Decimal::new(100, 0);
//! let b = Decimal::new(3, 0);
//! assert!(a.safe_div(b).is_ok());
//!
//! let quote = percent_of(Decimal::new(50, 0), 20).unwrap();
//! assert_eq!(quote, Decimal::new(10, 0));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Computes `value * percentage / 100`.
///
/// Multiplication happens first so that exact inputs such as `30 * 30 / 100`
/// stay exact. If the product does not fit, the value is scaled down by 100
/// before multiplying instead.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the result itself does not fit,
/// which requires a percentage above 100.
#[inline]
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn percent_of(value: Decimal, percentage: u32) -> ArithmeticResult<Decimal> {
    let percentage = Decimal::from(percentage);
    match value.safe_mul(percentage) {
        Ok(product) => product.safe_div(Decimal::ONE_HUNDRED),
        Err(ArithmeticError::Overflow) => value
            .safe_div(Decimal::ONE_HUNDRED)?
            .safe_mul(percentage),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_works() {
            let a = Decimal::new(5, 0);
            let b = Decimal::new(3, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(8, 0));
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_add(Decimal::ONE),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(
                Decimal::ONE_HUNDRED.safe_div(Decimal::ZERO),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }

    mod percent {
        use super::*;

        #[test]
        fn rank_zero_rate_on_fifty() {
            assert_eq!(
                percent_of(Decimal::new(50, 0), 20).unwrap(),
                Decimal::new(10, 0)
            );
        }

        #[test]
        fn keeps_fractional_results_exact() {
            // 15 * 25 / 100 = 3.75
            assert_eq!(
                percent_of(Decimal::new(15, 0), 25).unwrap(),
                Decimal::new(375, 2)
            );
        }

        #[test]
        fn zero_value_is_zero() {
            assert!(percent_of(Decimal::ZERO, 30).unwrap().is_zero());
        }

        #[test]
        fn largest_value_divides_first_instead_of_overflowing() {
            let quote = percent_of(Decimal::MAX, 30).unwrap();
            let expected = Decimal::MAX / Decimal::ONE_HUNDRED * Decimal::from(30);
            assert_eq!(quote, expected);
            assert!(quote > Decimal::MAX / Decimal::from(4));
            assert!(quote < Decimal::MAX / Decimal::from(3));
        }

        #[test]
        fn product_just_past_the_limit_is_priced() {
            // 3e27 * 30 overflows; 3e27 / 100 * 30 does not.
            let value = Decimal::from_i128_with_scale(3_000_000_000_000_000_000_000_000_000, 0);
            assert_eq!(
                percent_of(value, 30).unwrap(),
                Decimal::from_i128_with_scale(900_000_000_000_000_000_000_000_000, 0)
            );
        }

        #[test]
        fn result_beyond_range_is_overflow() {
            assert_eq!(
                percent_of(Decimal::MAX, 300),
                Err(ArithmeticError::Overflow)
            );
        }
    }
}
