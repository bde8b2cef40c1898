// Copyright 2025 Irreducible Inc.

//! Logical in-place shifts.

use std::ops::DerefMut;

use crate::{Error, segment::SegmentView};

/// Shifts the view's logical value left by `bits`, in place.
///
/// Vacated low positions fill with zero; bits moved past the view's extent
/// are discarded. The view never grows — sizing the destination is the
/// caller's choice, and multiplication pre-sizes its scratch buffer before
/// shifting partial products into place-value position.
pub fn shl<Data: DerefMut<Target = [u8]>>(
	view: &mut SegmentView<Data>,
	bits: usize,
) -> Result<(), Error> {
	let size = view.size();
	let byte_shift = bits / 8;
	let bit_shift = (bits % 8) as u32;
	// from the most-significant position down, every read is at or below the
	// write position and still holds its original value
	for i in (0..size).rev() {
		let value = if i >= byte_shift {
			let low = view.reverse_get(i - byte_shift);
			if bit_shift == 0 {
				low
			} else {
				let below = if i > byte_shift {
					view.reverse_get(i - byte_shift - 1)
				} else {
					0
				};
				(low << bit_shift) | (below >> (8 - bit_shift))
			}
		} else {
			0
		};
		view.reverse_set(i, value)?;
	}
	Ok(())
}

/// Shifts the view's logical value right by `bits`, in place.
///
/// Vacated high positions fill with zero; bits moved below position zero are
/// discarded.
pub fn shr<Data: DerefMut<Target = [u8]>>(
	view: &mut SegmentView<Data>,
	bits: usize,
) -> Result<(), Error> {
	let size = view.size();
	let byte_shift = bits / 8;
	let bit_shift = (bits % 8) as u32;
	for i in 0..size {
		let high = view.reverse_get(i.saturating_add(byte_shift));
		let value = if bit_shift == 0 {
			high
		} else {
			let above = view.reverse_get(i.saturating_add(byte_shift) + 1);
			(high >> bit_shift) | (above << (8 - bit_shift))
		};
		view.reverse_set(i, value)?;
	}
	Ok(())
}
