// Copyright 2025 Irreducible Inc.

//! Bulk fill and bounded logical copy.

use std::ops::DerefMut;

use crate::{ByteSequence, Error, Pointer, Segment, segment::SegmentView};

/// Sets every byte of the view to `value`.
pub fn fill<Data: DerefMut<Target = [u8]>>(view: &mut SegmentView<Data>, value: u8) {
	view.as_bytes_mut().fill(value);
}

/// Resizes the destination segment to exactly `len` bytes and copies the
/// `len` least-significant logical bytes of `src` into it.
///
/// The destination's prior contents are replaced entirely. This is the
/// write-back primitive behind
/// [`mul_assign`](crate::arithmetic::mul_assign)'s trimmed product.
pub fn copy<B: ByteSequence + ?Sized>(
	pointer: &mut Pointer,
	segment: &mut Segment,
	src: &B,
	len: usize,
) -> Result<(), Error> {
	pointer.reallocate(len, segment)?;
	let mut dst = pointer.view_mut(segment)?;
	for i in 0..len {
		dst.reverse_set(i, src.reverse_get(i))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ByteOrder;

	#[test]
	fn fill_overwrites_every_byte() {
		let mut pointer = Pointer::from_bytes(&[1, 2, 3]);
		let segment = pointer.share(0, 3, ByteOrder::Big).unwrap();
		let mut view = pointer.view_mut(&segment).unwrap();
		fill(&mut view, 0xEE);
		assert_eq!(view.as_bytes(), [0xEE, 0xEE, 0xEE]);
	}

	#[test]
	fn copy_resizes_and_replaces() {
		let mut pointer = Pointer::from_bytes(&[0xFF]);
		let mut segment = pointer.share(0, 1, ByteOrder::Big).unwrap();
		copy(&mut pointer, &mut segment, &[0x12u8, 0x34, 0x56], 3).unwrap();
		assert_eq!(segment.size(), 3);
		assert_eq!(pointer.view(&segment).unwrap().as_bytes(), [0x12, 0x34, 0x56]);

		// shrinking keeps the least-significant bytes of the source
		copy(&mut pointer, &mut segment, &[0x12u8, 0x34, 0x56], 2).unwrap();
		assert_eq!(pointer.view(&segment).unwrap().as_bytes(), [0x34, 0x56]);

		copy(&mut pointer, &mut segment, &[0xAAu8], 0).unwrap();
		assert_eq!(segment.size(), 0);
	}

	#[test]
	fn copy_respects_destination_order() {
		let mut pointer = Pointer::new(0);
		let mut segment = pointer.share(0, 0, ByteOrder::Little).unwrap();
		copy(&mut pointer, &mut segment, &[0x12u8, 0x34], 2).unwrap();
		assert_eq!(pointer.view(&segment).unwrap().as_bytes(), [0x34, 0x12]);
	}
}
