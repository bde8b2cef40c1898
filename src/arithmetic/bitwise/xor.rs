// Copyright 2025 Irreducible Inc.

//! Bitwise exclusive-or, least-significant-aligned.

use crate::{ByteSequence, Error, Pointer, Segment, SegmentMut};

/// Writes `a XOR b` into the result, aligning both operands at their
/// least-significant byte.
///
/// A position beyond an operand's bounds contributes 0, so the longer
/// operand's extra high bytes pass through unchanged. The result drives the
/// loop: positions above its size are dropped.
pub fn xor<A, B>(a: &A, b: &B, result: &mut SegmentMut<'_>) -> Result<(), Error>
where
	A: ByteSequence + ?Sized,
	B: ByteSequence + ?Sized,
{
	for i in 0..result.size() {
		result.reverse_set(i, a.reverse_get(i) ^ b.reverse_get(i))?;
	}
	Ok(())
}

/// XORs `b` into the accumulator in place.
///
/// If `b` is longer than the accumulator, the accumulator's backing buffer
/// grows first, so callers can accumulate without pre-sizing the destination.
pub fn xor_assign<B: ByteSequence + ?Sized>(
	pointer: &mut Pointer,
	segment: &mut Segment,
	b: &B,
) -> Result<(), Error> {
	if b.size() > segment.size() {
		pointer.reallocate(b.size(), segment)?;
	}
	let mut acc = pointer.view_mut(segment)?;
	for i in 0..acc.size() {
		let value = acc.reverse_get(i) ^ b.reverse_get(i);
		acc.reverse_set(i, value)?;
	}
	Ok(())
}
