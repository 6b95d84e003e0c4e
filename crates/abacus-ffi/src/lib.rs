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

//! # Abacus FFI
//!
//! **C-Compatible Bindings for the Abacus Calculator.**
//!
//! This crate serves as the bridge between the Rust core of Abacus and
//! external environments such as C, C++, Python, C#, and Java. It exposes a
//! stable, ABI-compliant interface over `i64` operands.
//!
//! ## Core Design Principles
//!
//! 1.  **Direct Value Calls**: The calculator is stateless, so no handles or
//!     lifecycle functions are needed. Every binding is a plain function of
//!     its operands.
//! 2.  **Explicit Status Codes**: The one fallible operation, division,
//!     reports its outcome through an `AbacusStatus` code and writes the
//!     quotient through an out-pointer only on success. A zero divisor never
//!     silently produces a value.
//! 3.  **Fail-Fast Safety**: To protect the integrity of the host
//!     application, passing a `NULL` output pointer results in an immediate
//!     process abort (panic) rather than undefined behavior or stack
//!     unwinding.

pub mod calculator;
