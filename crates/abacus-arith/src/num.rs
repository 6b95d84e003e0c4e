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

//! # Calculator Numeric Trait
//!
//! Unified numeric bounds for the calculator operations. `CalcNumeric`
//! specifies the integer capabilities an operand type must provide,
//! including intrinsic traits (`PrimInt`, `Signed`), promotion to `f64`
//! for division, and the by-value wrapping/checked arithmetic traits from
//! `abacus_core`.
//!
//! ## Motivation
//!
//! The operations should remain generic over integer types while retaining
//! predictable arithmetic semantics. This trait collects the necessary
//! bounds into a single alias, simplifying generic signatures and ensuring
//! a consistent overflow policy across every operand width.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` for numeric fundamentals.
//! - Enforces `AsPrimitive<f64>` so division can promote its operands.
//! - Includes the `Zero` constant trait for the divisor test.
//! - Adds by-value arithmetic traits:
//!   - Wrapping: add/sub/mul/neg with two's-complement modular outcomes.
//!   - Checked: add/sub/mul/div/neg returning `Option<T>`.
//! - Send + Sync so operations can be invoked concurrently.
//!
//! Note: quotients of operands whose magnitude exceeds 2^53 are rounded to
//! the nearest representable `f64`, as is inherent to the promotion.

use abacus_core::num::{
    constants::Zero,
    ops::{checked_arithmetic, wrapping_arithmetic},
};
use num_traits::{AsPrimitive, PrimInt, Signed};

/// A trait alias for numeric types that can be used as calculator operands.
/// This includes integer types that support the four operations with both
/// wrapping and checked semantics, and that can be promoted to `f64` for
/// division. These are usually the signed integer types `i8`, `i16`, `i32`,
/// `i64` and `isize`.
pub trait CalcNumeric:
    PrimInt
    + Signed
    + AsPrimitive<f64>
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + wrapping_arithmetic::WrappingAddVal
    + wrapping_arithmetic::WrappingSubVal
    + wrapping_arithmetic::WrappingMulVal
    + wrapping_arithmetic::WrappingNegVal
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + checked_arithmetic::CheckedDivVal
    + checked_arithmetic::CheckedNegVal
    + Send
    + Sync
{
}

impl<T> CalcNumeric for T where
    T: PrimInt
        + Signed
        + AsPrimitive<f64>
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + wrapping_arithmetic::WrappingAddVal
        + wrapping_arithmetic::WrappingSubVal
        + wrapping_arithmetic::WrappingMulVal
        + wrapping_arithmetic::WrappingNegVal
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + checked_arithmetic::CheckedDivVal
        + checked_arithmetic::CheckedNegVal
        + Send
        + Sync
{
}
