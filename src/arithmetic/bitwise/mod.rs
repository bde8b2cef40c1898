// Copyright 2025 Irreducible Inc.

//! Bitwise operators and logical shifts.
//!
//! Xor and And deliberately differ in how they line operands up: Xor combines
//! by numeric value and aligns at the least-significant byte, And compares at
//! equal significance and aligns at the most-significant byte. Both resolve
//! length mismatches by zero-extension, never by error.

pub mod and;
pub mod shift;
pub mod xor;

pub use and::{and, and_assign};
pub use shift::{shl, shr};
pub use xor::{xor, xor_assign};
