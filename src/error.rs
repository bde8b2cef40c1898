// Copyright 2025 Irreducible Inc.

/// Errors returned by buffer and segment operations.
///
/// Mismatched operand lengths never show up here — they are resolved by the
/// documented zero-extension policies. What does: sharing or viewing a range
/// the buffer cannot satisfy, going through a segment that a reallocation has
/// invalidated, and strict writes outside a view.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("segment at offset {offset} with length {len} exceeds the buffer length {buffer_len}")]
	SegmentOutOfRange {
		offset: usize,
		len: usize,
		buffer_len: usize,
	},
	#[error(
		"segment was invalidated by a reallocation (segment generation {segment}, buffer generation {buffer})"
	)]
	StaleSegment { segment: u64, buffer: u64 },
	#[error("index {index} is out of bounds for a segment of {len} bytes")]
	IndexOutOfBounds { index: usize, len: usize },
}
