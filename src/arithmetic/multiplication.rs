// Copyright 2025 Irreducible Inc.

//! Schoolbook long multiplication in base 256.

use crate::{
	ByteSequence, Error, Pointer, Segment,
	arithmetic::{addition, bitwise},
	assign,
};

/// Multiplies `a` by `b` into a caller-sized destination accumulator.
///
/// Classic schoolbook long multiplication: for every digit of `b` from the
/// least-significant end, a scratch buffer takes the single-digit partial
/// product of `a`, is shifted into place-value position, and accumulates into
/// the destination through [`addition::add_assign`] — which grows the
/// destination on overflow rather than truncate.
///
/// Digit products are widened to 16 bits; `255 * 255 + 255 < 65536`, so the
/// running carry register never overflows. When a partial product's trailing
/// carry does not fit the scratch buffer, the buffer grows by one or two
/// bytes *before* the carry bytes are written, so they are never silently
/// dropped. A zero multiplier digit with no residual carry short-circuits the
/// inner loop, making sparse operands cheaper than the `O(a_size * b_size)`
/// worst case.
///
/// Either operand of size 0 leaves the destination untouched.
pub fn mul<A, B>(a: &A, b: &B, pointer: &mut Pointer, segment: &mut Segment) -> Result<(), Error>
where
	A: ByteSequence + ?Sized,
	B: ByteSequence + ?Sized,
{
	let a_size = a.size();
	let b_size = b.size();

	let mut scratch = Pointer::new(segment.size());
	let mut scratch_segment = scratch.share(0, segment.size(), segment.order())?;
	for i in 0..b_size {
		let digit = b.reverse_get(i);
		let mut carry = 0u16;
		let mut j = 0;
		{
			let mut partial = scratch.view_mut(&scratch_segment)?;
			assign::fill(&mut partial, 0);
			while j < a_size {
				if digit == 0 && carry == 0 {
					break;
				}
				let val = a.reverse_get(j) as u16 * digit as u16;
				let [val_lo, val_hi] = val.to_le_bytes();
				carry += val_lo as u16;
				if !partial.is_reverse_end(j) {
					partial.reverse_set(j, carry.to_le_bytes()[0])?;
				}
				carry >>= 8;
				carry += val_hi as u16;
				j += 1;
			}
		}

		let [carry_lo, carry_hi] = carry.to_le_bytes();
		let growth = if carry_hi != 0 {
			2
		} else if carry_lo != 0 {
			1
		} else {
			0
		};
		if growth > 0 {
			scratch.reallocate(scratch_segment.size() + growth, &mut scratch_segment)?;
		}
		{
			let mut partial = scratch.view_mut(&scratch_segment)?;
			if !partial.is_reverse_end(j) {
				partial.reverse_set(j, carry_lo)?;
			}
			if !partial.is_reverse_end(j + 1) {
				partial.reverse_set(j + 1, carry_hi)?;
			}
			bitwise::shl(&mut partial, 8 * i)?;
		}

		let partial = scratch.view(&scratch_segment)?;
		addition::add_assign(pointer, segment, &partial)?;
	}
	Ok(())
}

/// Multiplies the accumulator by `b`, resizing it to exactly fit the product.
///
/// The product is computed into a fresh worst-case buffer of
/// `acc.size() + b.size()` bytes, trimmed to the minimal length whose
/// most-significant byte is nonzero (an all-zero product trims to length 0),
/// and written back over the accumulator's prior contents. This is the entry
/// point for modeling a variable-width integer in place: the accumulator's
/// storage grows or shrinks to exactly fit.
///
/// # Example
///
/// ```
/// use bytenum::{ByteOrder, Pointer, arithmetic};
///
/// let mut pointer = Pointer::from_bytes(&[0x12]);
/// let mut segment = pointer.share(0, 1, ByteOrder::Big).unwrap();
/// arithmetic::mul_assign(&mut pointer, &mut segment, &[0x34u8]).unwrap();
/// // 18 * 52 = 936, stored in exactly two bytes
/// assert_eq!(pointer.view(&segment).unwrap().as_bytes(), [0x03, 0xA8]);
/// ```
pub fn mul_assign<B: ByteSequence + ?Sized>(
	pointer: &mut Pointer,
	segment: &mut Segment,
	b: &B,
) -> Result<(), Error> {
	let expanded = segment.size() + b.size();
	let mut product = Pointer::new(expanded);
	let mut product_segment = product.share(0, expanded, segment.order())?;
	{
		let acc = pointer.view(segment)?;
		mul(&acc, b, &mut product, &mut product_segment)?;
	}

	let view = product.view(&product_segment)?;
	let leading = view.iter().take_while(|&byte| byte == 0).count();
	let trimmed = view.size() - leading;
	assign::copy(pointer, segment, &view, trimmed)
}
