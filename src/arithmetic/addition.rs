// Copyright 2025 Irreducible Inc.

//! Ripple-carry addition in base 256.

use crate::{ByteSequence, Error, Pointer, Segment};

/// Adds `b` into the accumulator, growing the backing buffer on overflow.
///
/// The accumulator first grows to cover any nonzero bytes of `b` above its
/// current extent, then the sum ripples from the least-significant position
/// with `b` zero-extended as needed. A carry out of the top position grows
/// the accumulator by one more byte; the result is never truncated.
pub fn add_assign<B: ByteSequence + ?Sized>(
	pointer: &mut Pointer,
	segment: &mut Segment,
	b: &B,
) -> Result<(), Error> {
	let mut top = b.size();
	while top > segment.size() && b.reverse_get(top - 1) == 0 {
		top -= 1;
	}
	if top > segment.size() {
		pointer.reallocate(top, segment)?;
	}

	let size = segment.size();
	let mut carry = 0u16;
	{
		let mut acc = pointer.view_mut(segment)?;
		for i in 0..size {
			if b.is_reverse_end(i) && carry == 0 {
				break;
			}
			let sum = acc.reverse_get(i) as u16 + b.reverse_get(i) as u16 + carry;
			let [lo, hi] = sum.to_le_bytes();
			acc.reverse_set(i, lo)?;
			carry = hi as u16;
		}
	}
	if carry != 0 {
		pointer.reallocate(size + 1, segment)?;
		pointer.view_mut(segment)?.reverse_set(size, carry as u8)?;
	}
	Ok(())
}

/// Writes `a + b` into the destination accumulator.
///
/// The destination takes `a`'s value at its current size, then accumulates
/// `b` with the same grow-on-overflow contract as [`add_assign`].
pub fn add<A, B>(a: &A, b: &B, pointer: &mut Pointer, segment: &mut Segment) -> Result<(), Error>
where
	A: ByteSequence + ?Sized,
	B: ByteSequence + ?Sized,
{
	{
		let mut dst = pointer.view_mut(segment)?;
		for i in 0..dst.size() {
			dst.reverse_set(i, a.reverse_get(i))?;
		}
	}
	add_assign(pointer, segment, b)
}
