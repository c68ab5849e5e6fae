use crate::SortError;

use super::common::{self, Records, Span};
use super::partition::Split;
use super::stack::WorkStack;

/// Iterative median-of-three quicksort that hands small spans to insertion
/// sort.
///
/// After each partition the larger side is pushed and the smaller side is
/// processed next, so every pushed span is at least as large as everything
/// above it and the stack never holds more than `log2(len)` spans.
pub(crate) fn hybrid_quick_sort<R, P, const STACK: usize>(
    records: &mut R,
    insertion_threshold: Option<usize>,
    mut partition: P,
) -> Result<(), SortError>
where
    R: Records,
    P: FnMut(&mut R, Span) -> Split,
{
    let mut stack = WorkStack::<STACK>::new();
    let mut next = Span::whole(records.len());

    while let Some(span) = next.take().or_else(|| stack.pop()) {
        if insertion_threshold.is_some_and(|threshold| span.len() <= threshold) {
            common::insertion_sort(records, span);
            continue;
        }

        next = match partition(records, span) {
            (Some(left), Some(right)) => {
                let (small, large) = if left.len() <= right.len() {
                    (left, right)
                } else {
                    (right, left)
                };
                stack.push(large)?;
                Some(small)
            }
            (left, right) => left.or(right),
        };
    }

    Ok(())
}
