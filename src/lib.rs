// Copyright 2025 Irreducible Inc.

//! Arbitrary-length, endianness-agnostic arithmetic over raw byte buffers.
//!
//! Operands are never promoted to a native fixed-width integer: every operator
//! reads and writes individual bytes through an endian-aware view, so the same
//! algorithm works over big- and little-endian encoded numbers of independent,
//! possibly unequal, lengths.
//!
//! The building blocks, leaves first:
//!
//! * [`ByteOrder`] — byte-order descriptor attached to a view, mapping logical
//!   positions to physical offsets.
//! * [`SegmentView`] — bounded, endian-aware read/write view over bytes.
//! * [`Pointer`] — exclusive owner of a resizable byte buffer; hands out
//!   [`Segment`] handles and reallocates storage while preserving logical
//!   value.
//! * [`ByteSequence`] — endian-generic read access, letting operators take a
//!   segment view, a raw byte slice, a fixed-size array or a single byte as an
//!   operand through one generic parameter.
//! * [`arithmetic`] — addition, multiplication, shifts and the bitwise
//!   operators; [`assign`] — bulk fill and bounded copy.
//!
//! Mismatched operand lengths are not errors: positions beyond a shorter
//! operand read as zero. The only recovery mechanism anywhere is
//! grow-on-overflow — a destination too small for the mathematically correct
//! result gets reallocated, never truncated.

pub mod arithmetic;
pub mod assign;
pub mod endian;
mod error;
pub mod pointer;
pub mod segment;
pub mod sequence;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use endian::ByteOrder;
pub use error::Error;
pub use pointer::Pointer;
pub use segment::{Segment, SegmentMut, SegmentRef, SegmentView};
pub use sequence::ByteSequence;
