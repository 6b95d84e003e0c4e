// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Calculator Operations
//!
//! The four arithmetic operations over two integer operands: addition,
//! subtraction, multiplication, and division. Each operation is a
//! single-step, synchronous, referentially transparent computation with no
//! internal state.
//!
//! ## Semantics
//!
//! - `add`, `subtract`, `multiply` return an integer of the operand type and
//!   never fail. On overflow they wrap (two's complement), identically in
//!   debug and release builds.
//! - `divide` promotes both operands to `f64` before dividing, so fractional
//!   quotients are preserved (5 / 2 = 2.5). A zero divisor yields
//!   `ArithmeticError::DivisionByZero`; the quotient is the nearest
//!   representable `f64` otherwise.
//! - `checked_add`, `checked_sub`, `checked_mul` are companions returning
//!   `Option<T>`, with `None` exactly where the wrapping operations would
//!   wrap.

use crate::{error::ArithmeticError, num::CalcNumeric};

/// A stateless calculator over two integer operands.
///
/// `Calculator` holds no data; it exists to group the operations behind one
/// entry point and to make the call sites self-describing. A single value
/// can be shared freely, including across threads.
///
/// # Examples
///
/// ```rust
/// # use abacus_arith::calculator::Calculator;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.add(2, 3), 5);
/// assert_eq!(calc.divide(5, 2), Ok(2.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calculator;

impl Calculator {
    /// Creates a new `Calculator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.multiply(-2, 3), -6);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns the sum `a + b`.
    ///
    /// Never fails. On overflow the result wraps around the numeric bounds
    /// of `T` (two's complement).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.add(2, 3), 5);
    /// assert_eq!(calc.add(-1, 1), 0);
    /// assert_eq!(calc.add(i64::MAX, 1), i64::MIN); // Wraps
    /// ```
    #[inline]
    pub fn add<T>(&self, a: T, b: T) -> T
    where
        T: CalcNumeric,
    {
        a.wrapping_add_val(b)
    }

    /// Returns the difference `a - b`.
    ///
    /// Never fails. On overflow the result wraps around the numeric bounds
    /// of `T` (two's complement).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.subtract(5, 3), 2);
    /// assert_eq!(calc.subtract(1, 1), 0);
    /// assert_eq!(calc.subtract(i64::MIN, 1), i64::MAX); // Wraps
    /// ```
    #[inline]
    pub fn subtract<T>(&self, a: T, b: T) -> T
    where
        T: CalcNumeric,
    {
        a.wrapping_sub_val(b)
    }

    /// Returns the product `a * b`.
    ///
    /// Never fails. On overflow the result wraps around the numeric bounds
    /// of `T` (two's complement).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.multiply(-2, 3), -6);
    /// assert_eq!(calc.multiply(0, 5), 0);
    /// ```
    #[inline]
    pub fn multiply<T>(&self, a: T, b: T) -> T
    where
        T: CalcNumeric,
    {
        a.wrapping_mul_val(b)
    }

    /// Returns the quotient `a / b` as an `f64`.
    ///
    /// Both operands are promoted to `f64` before dividing, so fractional
    /// quotients are preserved and the integer-overflow corner case
    /// (`T::MIN / -1`) cannot occur. The result is the nearest representable
    /// `f64` to the real quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `b` is zero. The error
    /// is reported synchronously and never retried internally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    /// # use abacus_arith::error::ArithmeticError;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.divide(6, 2), Ok(3.0));
    /// assert_eq!(calc.divide(5, 2), Ok(2.5));
    /// assert_eq!(calc.divide(5, 0), Err(ArithmeticError::DivisionByZero));
    /// ```
    #[inline]
    pub fn divide<T>(&self, a: T, b: T) -> Result<f64, ArithmeticError>
    where
        T: CalcNumeric,
    {
        if b == T::ZERO {
            return Err(ArithmeticError::DivisionByZero);
        }

        let dividend: f64 = a.as_();
        let divisor: f64 = b.as_();
        Ok(dividend / divisor)
    }

    /// Returns the sum `a + b`, or `None` if it would overflow.
    ///
    /// Companion to [`Calculator::add`] for callers that need overflow
    /// surfaced instead of wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.checked_add(2, 3), Some(5));
    /// assert_eq!(calc.checked_add(i64::MAX, 1), None);
    /// ```
    #[inline]
    pub fn checked_add<T>(&self, a: T, b: T) -> Option<T>
    where
        T: CalcNumeric,
    {
        a.checked_add_val(b)
    }

    /// Returns the difference `a - b`, or `None` if it would overflow.
    ///
    /// Companion to [`Calculator::subtract`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.checked_sub(5, 3), Some(2));
    /// assert_eq!(calc.checked_sub(i64::MIN, 1), None);
    /// ```
    #[inline]
    pub fn checked_sub<T>(&self, a: T, b: T) -> Option<T>
    where
        T: CalcNumeric,
    {
        a.checked_sub_val(b)
    }

    /// Returns the product `a * b`, or `None` if it would overflow.
    ///
    /// Companion to [`Calculator::multiply`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_arith::calculator::Calculator;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.checked_mul(-2, 3), Some(-6));
    /// assert_eq!(calc.checked_mul(i64::MAX, 2), None);
    /// ```
    #[inline]
    pub fn checked_mul<T>(&self, a: T, b: T) -> Option<T>
    where
        T: CalcNumeric,
    {
        a.checked_mul_val(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_add() {
        let calc = Calculator::new();
        assert_eq!(calc.add(2, 3), 5);
        assert_eq!(calc.add(-1, 1), 0);
        assert_eq!(calc.add(0, 0), 0);
    }

    #[test]
    fn test_subtract() {
        let calc = Calculator::new();
        assert_eq!(calc.subtract(5, 3), 2);
        assert_eq!(calc.subtract(1, 1), 0);
        assert_eq!(calc.subtract(0, 0), 0);
    }

    #[test]
    fn test_multiply() {
        let calc = Calculator::new();
        assert_eq!(calc.multiply(2, 3), 6);
        assert_eq!(calc.multiply(-2, 3), -6);
        assert_eq!(calc.multiply(0, 5), 0);
    }

    #[test]
    fn test_divide() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(6, 2), Ok(3.0));
        assert_eq!(calc.divide(5, 2), Ok(2.5));
        assert_eq!(calc.divide(0, 5), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(5, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(calc.divide(0, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            calc.divide(IntegerType::MIN, 0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_add_commutative() {
        let calc = Calculator::new();
        for a in -8..=8 as IntegerType {
            for b in -8..=8 as IntegerType {
                assert_eq!(calc.add(a, b), calc.add(b, a));
            }
        }
    }

    #[test]
    fn test_multiply_commutative() {
        let calc = Calculator::new();
        for a in -8..=8 as IntegerType {
            for b in -8..=8 as IntegerType {
                assert_eq!(calc.multiply(a, b), calc.multiply(b, a));
            }
        }
    }

    #[test]
    fn test_subtract_antisymmetric() {
        let calc = Calculator::new();
        for a in -8..=8 as IntegerType {
            for b in -8..=8 as IntegerType {
                assert_eq!(calc.subtract(a, b), -calc.subtract(b, a));
            }
        }
    }

    #[test]
    fn test_divide_matches_float_division() {
        let calc = Calculator::new();
        for a in -8..=8 as IntegerType {
            for b in -8..=8 as IntegerType {
                if b == 0 {
                    continue;
                }
                assert_eq!(calc.divide(a, b), Ok(a as f64 / b as f64));
            }
        }
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        // The integer corner case i64::MIN / -1 has no representable integer
        // result; the promoting division is well-defined.
        let calc = Calculator::new();
        assert_eq!(calc.divide(i8::MIN, -1i8), Ok(128.0));
        assert_eq!(
            calc.divide(IntegerType::MIN, -1),
            Ok(-(IntegerType::MIN as f64))
        );
    }

    #[test]
    fn test_wrapping_at_bounds() {
        let calc = Calculator::new();
        assert_eq!(calc.add(IntegerType::MAX, 1), IntegerType::MIN);
        assert_eq!(calc.subtract(IntegerType::MIN, 1), IntegerType::MAX);
        assert_eq!(calc.multiply(IntegerType::MAX, 2), -2);
    }

    #[test]
    fn test_checked_companions() {
        let calc = Calculator::new();
        assert_eq!(calc.checked_add(2, 3), Some(5));
        assert_eq!(calc.checked_add(IntegerType::MAX, 1), None);
        assert_eq!(calc.checked_sub(5, 3), Some(2));
        assert_eq!(calc.checked_sub(IntegerType::MIN, 1), None);
        assert_eq!(calc.checked_mul(-2, 3), Some(-6));
        assert_eq!(calc.checked_mul(IntegerType::MAX, 2), None);
    }

    #[test]
    fn test_generic_operand_widths() {
        let calc = Calculator::new();
        assert_eq!(calc.add(120i8, 7i8), 127i8);
        assert_eq!(calc.add(120i8, 8i8), -128i8);
        assert_eq!(calc.subtract(5i16, 3i16), 2i16);
        assert_eq!(calc.multiply(-2i32, 3i32), -6i32);
        assert_eq!(calc.divide(5i8, 2i8), Ok(2.5));
        assert_eq!(calc.divide(5isize, 0isize), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_calculator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }
}
