use std::cmp::Ordering;

use crate::algorithms::common::{PivotSnapshot, Records};
use crate::algorithms::swap::swap_records;

/// Fixed-size records laid out back to back in a byte buffer.
///
/// `SCRATCH` is the inline pivot capacity; the snapshot path is only used
/// when `size <= SCRATCH`.
pub(crate) struct ByteRecords<'a, F, const SCRATCH: usize> {
    bytes: &'a mut [u8],
    size: usize,
    compare: F,
    scratch: [u8; SCRATCH],
}

impl<'a, F, const SCRATCH: usize> ByteRecords<'a, F, SCRATCH>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    /// `bytes` must hold exactly `count * size` bytes with `size > 0`.
    pub fn new(bytes: &'a mut [u8], size: usize, compare: F) -> Self {
        debug_assert!(size > 0 && bytes.len() % size == 0);
        Self {
            bytes,
            size,
            compare,
            scratch: [0; SCRATCH],
        }
    }
}

impl<F, const SCRATCH: usize> Records for ByteRecords<'_, F, SCRATCH>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / self.size
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        let size = self.size;
        let x = &self.bytes[a * size..(a + 1) * size];
        let y = &self.bytes[b * size..(b + 1) * size];
        (self.compare)(x, y)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        swap_records(&mut *self.bytes, a, b, self.size);
    }
}

impl<F, const SCRATCH: usize> PivotSnapshot for ByteRecords<'_, F, SCRATCH>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    #[inline]
    fn capture_pivot(&mut self, idx: usize) {
        let size = self.size;
        self.scratch[..size].copy_from_slice(&self.bytes[idx * size..(idx + 1) * size]);
    }

    #[inline]
    fn compare_to_pivot(&mut self, idx: usize) -> Ordering {
        let x = &self.bytes[idx * self.size..(idx + 1) * self.size];
        (self.compare)(x, &self.scratch[..self.size])
    }
}

/// Slice of arbitrary values, compared in place.
pub(crate) struct SliceRecords<'a, T, F> {
    v: &'a mut [T],
    compare: F,
}

impl<'a, T, F> SliceRecords<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(v: &'a mut [T], compare: F) -> Self {
        Self { v, compare }
    }
}

impl<T, F> Records for SliceRecords<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

/// Slice of `Copy` values; the pivot is held as a plain copy.
pub(crate) struct CopyRecords<'a, T, F> {
    v: &'a mut [T],
    compare: F,
    pivot: T,
}

impl<'a, T, F> CopyRecords<'a, T, F>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    /// Returns `None` for an empty slice.
    pub fn new(v: &'a mut [T], compare: F) -> Option<Self> {
        let pivot = *v.first()?;
        Some(Self { v, compare, pivot })
    }
}

impl<T, F> Records for CopyRecords<'_, T, F>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn compare(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.v[a], &self.v[b])
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

impl<T, F> PivotSnapshot for CopyRecords<'_, T, F>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn capture_pivot(&mut self, idx: usize) {
        self.pivot = self.v[idx];
    }

    #[inline]
    fn compare_to_pivot(&mut self, idx: usize) -> Ordering {
        (self.compare)(&self.v[idx], &self.pivot)
    }
}
