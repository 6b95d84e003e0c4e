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

//! # Abacus Arith
//!
//! **The Core Arithmetic Engine of the Abacus Calculator.**
//!
//! This crate implements the four calculator operations (addition,
//! subtraction, multiplication, division) over integer operands, together
//! with their error contract. It sits between the numeric foundations of
//! `abacus_core` and outward-facing surfaces such as `abacus_ffi`.
//!
//! ## Architecture
//!
//! * **`num`**: The `CalcNumeric` trait alias collecting every bound an
//!   operand type must satisfy, so the operations stay generic over the
//!   signed primitive integers.
//! * **`error`**: The `ArithmeticError` type. Division by zero is the single
//!   failure mode of the engine and is always surfaced to the caller.
//! * **`calculator`**: The stateless `Calculator` entry point exposing the
//!   operations.
//!
//! ## Design Philosophy
//!
//! 1.  **Purity**: Every operation is a referentially transparent function of
//!     its two operands. There is no internal state, so a single `Calculator`
//!     value can be shared freely across threads.
//! 2.  **Explicit overflow policy**: The infallible operations use wrapping
//!     (two's-complement) semantics in every build profile, with checked
//!     companions for callers that want overflow surfaced instead.
//! 3.  **Fail-Fast on division by zero**: A zero divisor never produces a
//!     value; it produces `ArithmeticError::DivisionByZero` synchronously.

pub mod calculator;
pub mod error;
pub mod num;
