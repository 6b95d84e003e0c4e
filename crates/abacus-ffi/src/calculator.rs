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

use abacus_arith::{calculator::Calculator, error::ArithmeticError};

/// Status code returned by fallible Abacus FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbacusStatus {
    /// The operation completed and its result was written out.
    Ok = 0,
    /// The divisor was zero; no result was written.
    DivisionByZero = 1,
}

impl From<ArithmeticError> for AbacusStatus {
    #[inline]
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl std::fmt::Display for AbacusStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

/// Returns the sum `a + b`.
///
/// Wrapping (two's-complement) semantics on overflow. Never fails.
#[no_mangle]
pub extern "C" fn abacus_add(a: i64, b: i64) -> i64 {
    Calculator::new().add(a, b)
}

/// Returns the difference `a - b`.
///
/// Wrapping (two's-complement) semantics on overflow. Never fails.
#[no_mangle]
pub extern "C" fn abacus_subtract(a: i64, b: i64) -> i64 {
    Calculator::new().subtract(a, b)
}

/// Returns the product `a * b`.
///
/// Wrapping (two's-complement) semantics on overflow. Never fails.
#[no_mangle]
pub extern "C" fn abacus_multiply(a: i64, b: i64) -> i64 {
    Calculator::new().multiply(a, b)
}

/// Computes the quotient `a / b` as a double-precision float.
///
/// On success, writes the quotient through `out_quotient` and returns
/// [`AbacusStatus::Ok`]. If `b` is zero, returns
/// [`AbacusStatus::DivisionByZero`] and leaves the output untouched.
///
/// # Panics
///
/// This function will panic if called with a null `out_quotient` pointer.
///
/// # Safety
///
/// This function is unsafe because it writes through a raw pointer.
/// The caller must ensure that the pointer is non-null, properly aligned,
/// and valid for writing a `double`.
#[no_mangle]
pub unsafe extern "C" fn abacus_divide(a: i64, b: i64, out_quotient: *mut f64) -> AbacusStatus {
    assert!(
        !out_quotient.is_null(),
        "called `abacus_divide` with null out_quotient pointer"
    );

    match Calculator::new().divide(a, b) {
        Ok(quotient) => {
            *out_quotient = quotient;
            AbacusStatus::Ok
        }
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infallible_ops() {
        assert_eq!(abacus_add(2, 3), 5);
        assert_eq!(abacus_add(i64::MAX, 1), i64::MIN);
        assert_eq!(abacus_subtract(5, 3), 2);
        assert_eq!(abacus_multiply(-2, 3), -6);
    }

    #[test]
    fn test_divide_writes_quotient() {
        let mut quotient = 0.0f64;
        let status = unsafe { abacus_divide(5, 2, &mut quotient) };
        assert_eq!(status, AbacusStatus::Ok);
        assert_eq!(quotient, 2.5);
    }

    #[test]
    fn test_divide_by_zero_leaves_output_untouched() {
        let mut quotient = 42.0f64;
        let status = unsafe { abacus_divide(5, 0, &mut quotient) };
        assert_eq!(status, AbacusStatus::DivisionByZero);
        assert_eq!(quotient, 42.0);
    }

    #[test]
    fn test_status_from_error() {
        assert_eq!(
            AbacusStatus::from(ArithmeticError::DivisionByZero),
            AbacusStatus::DivisionByZero
        );
    }
}
