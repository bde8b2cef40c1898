// Copyright 2025 Irreducible Inc.

//! Helpers shared by unit, integration and property tests.

use rand::RngCore;

use crate::{ByteOrder, Pointer, Segment};

/// Generates `n` uniformly random bytes.
pub fn random_bytes(mut rng: impl RngCore, n: usize) -> Vec<u8> {
	let mut bytes = vec![0u8; n];
	rng.fill_bytes(&mut bytes);
	bytes
}

/// Creates a pointer/segment pair storing the number given by big-endian
/// `digits`, laid out physically according to `order`.
pub fn make_operand(digits: &[u8], order: ByteOrder) -> (Pointer, Segment) {
	let physical: Vec<u8> = match order {
		ByteOrder::Big => digits.to_vec(),
		ByteOrder::Little => digits.iter().rev().copied().collect(),
	};
	let pointer = Pointer::from_bytes(&physical);
	let segment = pointer
		.share(0, physical.len(), order)
		.expect("segment spans the whole buffer");
	(pointer, segment)
}

/// Reads a segment's value back out as big-endian digits.
pub fn read_be(pointer: &Pointer, segment: &Segment) -> Vec<u8> {
	let view = pointer.view(segment).expect("segment is current");
	view.iter().collect()
}

/// Interprets a segment's value as a `u128`; the segment must fit in one.
pub fn read_u128(pointer: &Pointer, segment: &Segment) -> u128 {
	let view = pointer.view(segment).expect("segment is current");
	assert!(view.size() <= 16, "segment does not fit in a u128");
	view.iter().fold(0u128, |acc, byte| (acc << 8) | byte as u128)
}

/// Big-endian digits of `value` without leading zeros; empty for 0.
pub fn be_digits(value: u128) -> Vec<u8> {
	let bytes = value.to_be_bytes();
	let leading = bytes.iter().take_while(|&&byte| byte == 0).count();
	bytes[leading..].to_vec()
}
