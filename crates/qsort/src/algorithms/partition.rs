use std::cmp::Ordering;

use super::common::{self, PivotSnapshot, Records, Span};

/// Sub-ranges left to sort after a partition step. Either side is `None`
/// when it holds fewer than two elements.
pub(crate) type Split = (Option<Span>, Option<Span>);

/// Hoare partition against a copy of the median-of-three pivot.
///
/// Both cursors stop on elements equal to the pivot, so runs of duplicates
/// are spread over both sides. The split point `p` satisfies
/// `low <= p < high`, giving `[low, p]` and `[p + 1, high]`.
pub(crate) fn hoare_snapshot<R: PivotSnapshot>(records: &mut R, span: Span) -> Split {
    let pivot = common::median_of_three(records, span);
    records.capture_pivot(pivot);

    let mut lo = span.low;
    let mut hi = span.high;
    loop {
        while records.compare_to_pivot(lo) == Ordering::Less {
            lo += 1;
        }
        while records.compare_to_pivot(hi) == Ordering::Greater {
            hi -= 1;
        }

        if lo >= hi {
            debug_assert!(span.low <= hi && hi < span.high);
            return (Span::new(span.low, hi), Span::new(hi + 1, span.high));
        }

        records.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
}

/// Partition for records that cannot be copied out of the buffer.
///
/// The median-of-three pivot is parked at `low` and compared in place. Once
/// the cursors cross it is dropped into its final slot `j`, which is excluded
/// from both returned sides.
pub(crate) fn boundary_slot<R: Records>(records: &mut R, span: Span) -> Split {
    let Span { low, high } = span;
    let pivot = common::median_of_three(records, span);
    records.swap(pivot, low);

    let mut i = low;
    let mut j = high + 1;
    loop {
        i += 1;
        while i < high && records.compare(i, low) == Ordering::Less {
            i += 1;
        }
        // The parked pivot stops this cursor at `low` at the latest.
        j -= 1;
        while records.compare(low, j) == Ordering::Less {
            j -= 1;
        }

        if i >= j {
            break;
        }
        records.swap(i, j);
    }
    records.swap(low, j);

    let left = j.checked_sub(1).and_then(|end| Span::new(low, end));
    (left, Span::new(j + 1, high))
}
