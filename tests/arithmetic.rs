// Copyright 2025 Irreducible Inc.

//! End-to-end scenarios across the operator family, driving everything
//! through the public API only.

use bytenum::{
	ByteOrder, Pointer, Segment,
	arithmetic::{add_assign, and_assign, mul, mul_assign, shl, xor_assign},
};

fn operand(digits: &[u8], order: ByteOrder) -> (Pointer, Segment) {
	let physical: Vec<u8> = match order {
		ByteOrder::Big => digits.to_vec(),
		ByteOrder::Little => digits.iter().rev().copied().collect(),
	};
	let pointer = Pointer::from_bytes(&physical);
	let segment = pointer.share(0, physical.len(), order).unwrap();
	(pointer, segment)
}

fn digits(pointer: &Pointer, segment: &Segment) -> Vec<u8> {
	pointer.view(segment).unwrap().iter().collect()
}

#[test]
fn variable_width_integer_grows_and_shrinks_in_place() {
	for order in [ByteOrder::Big, ByteOrder::Little] {
		let (mut pointer, mut segment) = operand(&[0x12], order);

		// 0x12 * 0x34 = 0x03A8: storage grows to exactly two bytes
		let (b_pointer, b_segment) = operand(&[0x34], order);
		mul_assign(&mut pointer, &mut segment, &b_pointer.view(&b_segment).unwrap()).unwrap();
		assert_eq!(segment.size(), 2);
		assert_eq!(digits(&pointer, &segment), [0x03, 0xA8]);

		// * 0 shrinks to nothing
		mul_assign(&mut pointer, &mut segment, &[0x00u8]).unwrap();
		assert_eq!(segment.size(), 0);
	}
}

#[test]
fn mixed_endianness_operands_agree_on_value() {
	// one big-endian and one little-endian operand, same numeric value
	let (mut acc_ptr, mut acc_seg) = operand(&[0xAB, 0xCD], ByteOrder::Big);
	let (b_ptr, b_seg) = operand(&[0x01, 0x02], ByteOrder::Little);
	add_assign(&mut acc_ptr, &mut acc_seg, &b_ptr.view(&b_seg).unwrap()).unwrap();
	assert_eq!(digits(&acc_ptr, &acc_seg), [0xAC, 0xCF]);
}

#[test]
fn chained_operators_model_a_running_accumulator() {
	let (mut pointer, mut segment) = operand(&[0x02], ByteOrder::Big);

	mul_assign(&mut pointer, &mut segment, &[0x80u8]).unwrap(); // 0x100
	assert_eq!(digits(&pointer, &segment), [0x01, 0x00]);

	add_assign(&mut pointer, &mut segment, &[0xFFu8, 0xFF]).unwrap(); // 0x100 + 0xFFFF
	assert_eq!(digits(&pointer, &segment), [0x01, 0x00, 0xFF]);

	xor_assign(&mut pointer, &mut segment, &[0x0Fu8]).unwrap();
	assert_eq!(digits(&pointer, &segment), [0x01, 0x00, 0xF0]);

	and_assign(&mut pointer, &mut segment, &[0x00u8, 0xFF, 0xFF]).unwrap();
	assert_eq!(digits(&pointer, &segment), [0x00, 0x00, 0xF0]);
}

#[test]
fn caller_sized_multiply_with_explicit_shift() {
	// multiply into a caller-provided destination, then scale by 2^16
	let (a_ptr, a_seg) = operand(&[0xFF], ByteOrder::Big);
	let a = a_ptr.view(&a_seg).unwrap();

	let mut result = Pointer::new(2);
	let mut result_segment = result.share(0, 2, ByteOrder::Big).unwrap();
	mul(&a, &[0xFFu8], &mut result, &mut result_segment).unwrap();
	assert_eq!(digits(&result, &result_segment), [0xFE, 0x01]);

	result.reallocate(4, &mut result_segment).unwrap();
	let mut view = result.view_mut(&result_segment).unwrap();
	shl(&mut view, 16).unwrap();
	drop(view);
	assert_eq!(digits(&result, &result_segment), [0xFE, 0x01, 0x00, 0x00]);
}

#[test]
fn segments_must_be_rederived_after_reallocation() {
	let mut pointer = Pointer::new(2);
	let stale = pointer.share(0, 2, ByteOrder::Big).unwrap();
	let mut segment = pointer.share(0, 2, ByteOrder::Big).unwrap();

	add_assign(&mut pointer, &mut segment, &[0x01u8, 0x00, 0x00]).unwrap();
	assert!(pointer.view(&stale).is_err());
	assert_eq!(digits(&pointer, &segment), [0x01, 0x00, 0x00]);
}
