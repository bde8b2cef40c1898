// Copyright 2025 Irreducible Inc.

//! Bitwise and, most-significant-aligned.

use crate::{ByteSequence, Error, Pointer, Segment, SegmentMut};

/// Writes `a AND b` into the result, aligning both operands at their
/// most-significant byte.
///
/// The alignment is intentionally asymmetric with [`xor`](super::xor): AND's
/// absorbing element is 0 at any position, and the operands are compared at
/// equal significance rather than combined by numeric value. A position where
/// either operand is out of bounds yields 0.
pub fn and<A, B>(a: &A, b: &B, result: &mut SegmentMut<'_>) -> Result<(), Error>
where
	A: ByteSequence + ?Sized,
	B: ByteSequence + ?Sized,
{
	for i in 0..result.size() {
		let value = if a.is_end(i) || b.is_end(i) {
			0
		} else {
			a.get(i) & b.get(i)
		};
		result.set(i, value)?;
	}
	Ok(())
}

/// ANDs `b` into the accumulator in place.
///
/// The accumulator grows to at least `b`'s size first. AND against an absent
/// byte is always 0, so growth only affects the output shape; it never leaks
/// out-of-bounds data.
pub fn and_assign<B: ByteSequence + ?Sized>(
	pointer: &mut Pointer,
	segment: &mut Segment,
	b: &B,
) -> Result<(), Error> {
	if b.size() > segment.size() {
		pointer.reallocate(b.size(), segment)?;
	}
	let mut acc = pointer.view_mut(segment)?;
	for i in 0..acc.size() {
		let value = if b.is_end(i) { 0 } else { acc.get(i) & b.get(i) };
		acc.set(i, value)?;
	}
	Ok(())
}
