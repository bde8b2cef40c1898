// Copyright 2025 Irreducible Inc.

//! Exclusive ownership of resizable byte buffers.

use bytemuck::allocation::zeroed_vec;

use crate::{ByteOrder, Error, Segment, SegmentMut, SegmentRef, segment::SegmentView};

/// Exclusive owner of one contiguous, resizable byte buffer.
///
/// A pointer hands out [`Segment`] handles over parts of its buffer and can
/// later [`reallocate`](Self::reallocate) the storage behind one of them while
/// preserving the bytes' logical value. Each reallocation bumps an internal
/// generation counter; segments record the generation they were shared under,
/// so access through a segment that predates the current allocation is
/// detected and refused rather than silently dereferencing reused storage.
///
/// Allocation failure is fatal: an operator mid-algorithm cannot make partial
/// progress meaningfully, so the process aborts through the global allocator
/// instead of surfacing a recoverable error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pointer {
	data: Vec<u8>,
	generation: u64,
}

impl Pointer {
	/// Creates a pointer owning `size` zeroed bytes.
	pub fn new(size: usize) -> Self {
		Self {
			data: zeroed_vec(size),
			generation: 0,
		}
	}

	/// Creates a pointer owning a copy of `bytes`, in physical order.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		Self {
			data: bytes.to_vec(),
			generation: 0,
		}
	}

	/// Current buffer size in bytes.
	pub fn size(&self) -> usize {
		self.data.len()
	}

	/// Generation of the current allocation.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Shares `len` bytes starting at `offset` as a [`Segment`] with the
	/// given byte order.
	///
	/// ## Throws
	///
	/// * [`Error::SegmentOutOfRange`] if the range exceeds the buffer.
	pub fn share(&self, offset: usize, len: usize, order: ByteOrder) -> Result<Segment, Error> {
		if offset.checked_add(len).is_none_or(|end| end > self.data.len()) {
			return Err(Error::SegmentOutOfRange {
				offset,
				len,
				buffer_len: self.data.len(),
			});
		}
		Ok(Segment {
			offset,
			len,
			order,
			generation: self.generation,
		})
	}

	fn check(&self, segment: &Segment) -> Result<(), Error> {
		if segment.generation != self.generation {
			return Err(Error::StaleSegment {
				segment: segment.generation,
				buffer: self.generation,
			});
		}
		debug_assert!(segment.offset + segment.len <= self.data.len());
		Ok(())
	}

	/// Borrows the segment's bytes as a read-only view.
	///
	/// ## Throws
	///
	/// * [`Error::StaleSegment`] if the segment predates the current
	///   allocation.
	pub fn view(&self, segment: &Segment) -> Result<SegmentRef<'_>, Error> {
		self.check(segment)?;
		Ok(SegmentView::new(
			segment.order,
			&self.data[segment.offset..segment.offset + segment.len],
		))
	}

	/// Borrows the segment's bytes as a mutable view.
	///
	/// ## Throws
	///
	/// * [`Error::StaleSegment`] if the segment predates the current
	///   allocation.
	pub fn view_mut(&mut self, segment: &Segment) -> Result<SegmentMut<'_>, Error> {
		self.check(segment)?;
		Ok(SegmentView::new(
			segment.order,
			&mut self.data[segment.offset..segment.offset + segment.len],
		))
	}

	/// Replaces the buffer so that `segment` spans `new_size` bytes, and
	/// rebinds `segment` to the new extent.
	///
	/// The segment's logical value is preserved: growing zero-extends at the
	/// logically-most-significant end (the physical front under
	/// [`ByteOrder::Big`], the physical back under [`ByteOrder::Little`]);
	/// shrinking drops logically-most-significant bytes. Bytes outside the
	/// segment's extent keep their values and relative positions.
	///
	/// Every other segment of this pointer becomes stale and must be
	/// re-derived, never dereferenced.
	///
	/// ## Throws
	///
	/// * [`Error::StaleSegment`] if `segment` itself is already stale.
	pub fn reallocate(&mut self, new_size: usize, segment: &mut Segment) -> Result<(), Error> {
		self.check(segment)?;
		let old_size = segment.len;
		let offset = segment.offset;

		let mut data = zeroed_vec(self.data.len() - old_size + new_size);
		data[..offset].copy_from_slice(&self.data[..offset]);
		data[offset + new_size..].copy_from_slice(&self.data[offset + old_size..]);
		let kept = old_size.min(new_size);
		match segment.order {
			// Most-significant bytes sit at the physical front: keep the
			// physical tail of the old extent and right-align it.
			ByteOrder::Big => data[offset + new_size - kept..offset + new_size]
				.copy_from_slice(&self.data[offset + old_size - kept..offset + old_size]),
			ByteOrder::Little => data[offset..offset + kept]
				.copy_from_slice(&self.data[offset..offset + kept]),
		}

		self.data = data;
		self.generation += 1;
		segment.len = new_size;
		segment.generation = self.generation;
		tracing::trace!(old_size, new_size, generation = self.generation, "reallocated buffer");
		Ok(())
	}
}
