//! In-place hybrid quicksort over fixed-size records.
//!
//! Median-of-three pivots, Hoare partitioning against a pivot snapshot,
//! insertion sort for short ranges and an explicit bounded work stack in
//! place of recursion. Nothing is allocated; the stack and the pivot scratch
//! space live in the caller's frame.
//!
//! The sort is not stable.

use std::cmp::Ordering;
use std::mem;

mod algorithms;
mod error;
mod records;

use algorithms::hybrid_quick_sort::hybrid_quick_sort;
use algorithms::partition;
use records::{ByteRecords, CopyRecords, SliceRecords};

pub use error::SortError;

/// Ranges of at most this many elements are finished by insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 24;
/// Largest element, in bytes, whose pivot is copied into inline scratch.
pub const DEFAULT_SCRATCH_CAPACITY: usize = 512;
/// Pending ranges the work stack can hold; enough for any 64-bit length.
pub const DEFAULT_STACK_CAPACITY: usize = 64;

/// What to do with elements larger than the pivot scratch capacity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum OversizePolicy {
    /// Fail with [`SortError::ElementTooLarge`] before touching the buffer.
    #[default]
    Reject,
    /// Park the pivot at the start of each range and compare against it in
    /// place.
    RelocateToBoundary,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SortConfig {
    /// `None` partitions all the way down to single elements.
    pub insertion_threshold: Option<usize>,
    pub oversize: OversizePolicy,
}

pub const DEFAULT_CONFIG: SortConfig = SortConfig {
    insertion_threshold: Some(DEFAULT_INSERTION_THRESHOLD),
    oversize: OversizePolicy::Reject,
};

impl SortConfig {
    pub const fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = Some(threshold);
        self
    }

    pub const fn without_insertion_sort(mut self) -> Self {
        self.insertion_threshold = None;
        self
    }

    pub const fn with_oversize_policy(mut self, oversize: OversizePolicy) -> Self {
        self.oversize = oversize;
        self
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PivotMode {
    Snapshot,
    Boundary,
}

/// A configured sorter.
///
/// `SCRATCH` is the inline pivot buffer size in bytes and `STACK` the number
/// of pending ranges the work stack holds. Both are fixed at compile time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuickSort<
    const SCRATCH: usize = DEFAULT_SCRATCH_CAPACITY,
    const STACK: usize = DEFAULT_STACK_CAPACITY,
> {
    config: SortConfig,
}

const DEFAULT_SORTER: QuickSort = QuickSort::with_config(DEFAULT_CONFIG);

impl<const SCRATCH: usize, const STACK: usize> Default for QuickSort<SCRATCH, STACK> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SCRATCH: usize, const STACK: usize> QuickSort<SCRATCH, STACK> {
    pub const fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }

    pub const fn with_config(config: SortConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> SortConfig {
        self.config
    }

    pub const fn scratch_capacity(&self) -> usize {
        SCRATCH
    }

    pub const fn stack_capacity(&self) -> usize {
        STACK
    }

    /// Sorts `count` records of `size` bytes stored at the front of `buffer`.
    ///
    /// Bytes past `count * size` are left alone. `count < 2` or `size == 0`
    /// is a no-op. `compare` must be a total order over the records for the
    /// whole call; if it is not, the output order is unspecified but still a
    /// permutation of the input.
    pub fn sort_bytes<F>(
        &self,
        buffer: &mut [u8],
        count: usize,
        size: usize,
        compare: F,
    ) -> Result<(), SortError>
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        if count < 2 || size == 0 {
            return Ok(());
        }

        let required = count
            .checked_mul(size)
            .ok_or(SortError::LengthOverflow { count, size })?;
        let actual = buffer.len();
        let bytes = buffer
            .get_mut(..required)
            .ok_or(SortError::BufferTooSmall { required, actual })?;
        let mode = self.pivot_mode(size)?;

        let mut records = ByteRecords::<_, SCRATCH>::new(bytes, size, compare);
        let threshold = self.config.insertion_threshold;
        match mode {
            PivotMode::Snapshot => {
                hybrid_quick_sort::<_, _, STACK>(&mut records, threshold, partition::hoare_snapshot)
            }
            PivotMode::Boundary => {
                hybrid_quick_sort::<_, _, STACK>(&mut records, threshold, partition::boundary_slot)
            }
        }
    }

    /// Sorts values of any type, comparing the pivot where it sits in the
    /// slice. Never fails with [`SortError::ElementTooLarge`].
    pub fn sort_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut records = SliceRecords::new(v, compare);
        hybrid_quick_sort::<_, _, STACK>(
            &mut records,
            self.config.insertion_threshold,
            partition::boundary_slot,
        )
    }

    /// Like [`sort_by`](Self::sort_by) but holds a copy of the pivot, subject
    /// to the scratch capacity and oversize policy.
    pub fn sort_copy_by<T, F>(&self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        T: Copy,
        F: FnMut(&T, &T) -> Ordering,
    {
        let size = mem::size_of::<T>();
        if v.len() < 2 || size == 0 {
            return Ok(());
        }

        let mode = self.pivot_mode(size)?;
        let Some(mut records) = CopyRecords::new(v, compare) else {
            return Ok(());
        };
        let threshold = self.config.insertion_threshold;
        match mode {
            PivotMode::Snapshot => {
                hybrid_quick_sort::<_, _, STACK>(&mut records, threshold, partition::hoare_snapshot)
            }
            PivotMode::Boundary => {
                hybrid_quick_sort::<_, _, STACK>(&mut records, threshold, partition::boundary_slot)
            }
        }
    }

    pub fn sort<T: Ord>(&self, v: &mut [T]) -> Result<(), SortError> {
        self.sort_by(v, T::cmp)
    }

    fn pivot_mode(&self, size: usize) -> Result<PivotMode, SortError> {
        if size <= SCRATCH {
            return Ok(PivotMode::Snapshot);
        }
        match self.config.oversize {
            OversizePolicy::Reject => Err(SortError::ElementTooLarge {
                size,
                capacity: SCRATCH,
            }),
            OversizePolicy::RelocateToBoundary => Ok(PivotMode::Boundary),
        }
    }
}

/// Sorts `count` records of `size` bytes with the default configuration.
///
/// See [`QuickSort::sort_bytes`].
pub fn sort_bytes<F>(
    buffer: &mut [u8],
    count: usize,
    size: usize,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    DEFAULT_SORTER.sort_bytes(buffer, count, size, compare)
}

pub fn sort_by<T, F>(v: &mut [T], compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    DEFAULT_SORTER.sort_by(v, compare)
}

pub fn sort_copy_by<T, F>(v: &mut [T], compare: F) -> Result<(), SortError>
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    DEFAULT_SORTER.sort_copy_by(v, compare)
}

pub fn sort<T: Ord>(v: &mut [T]) -> Result<(), SortError> {
    DEFAULT_SORTER.sort(v)
}
