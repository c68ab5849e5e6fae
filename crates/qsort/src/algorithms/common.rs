use std::cmp::Ordering;

/// Inclusive index range `[low, high]` still waiting to be sorted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Span {
    pub low: usize,
    pub high: usize,
}

impl Span {
    /// Only ranges with at least two elements need work.
    #[inline]
    pub fn new(low: usize, high: usize) -> Option<Self> {
        (low < high).then_some(Self { low, high })
    }

    #[inline]
    pub fn whole(len: usize) -> Option<Self> {
        if len < 2 { None } else { Self::new(0, len - 1) }
    }

    #[inline]
    pub fn len(self) -> usize {
        self.high - self.low + 1
    }
}

/// Indexed view over the elements being sorted.
///
/// Every reordering goes through `swap`, so an implementation only has to
/// know how to compare and exchange two slots.
pub(crate) trait Records {
    fn len(&self) -> usize;

    /// Compares the element at `a` with the element at `b`.
    fn compare(&mut self, a: usize, b: usize) -> Ordering;

    fn swap(&mut self, a: usize, b: usize);
}

/// Records that can hold a copy of the pivot outside the buffer.
pub(crate) trait PivotSnapshot: Records {
    fn capture_pivot(&mut self, idx: usize);

    /// Compares the element at `idx` with the captured pivot.
    fn compare_to_pivot(&mut self, idx: usize) -> Ordering;
}

/// Orders `low`, `mid` and `high` in place and returns `mid`, which now holds
/// the median of the three samples.
#[inline]
pub(crate) fn median_of_three<R: Records>(records: &mut R, span: Span) -> usize {
    let Span { low, high } = span;
    let mid = low + ((high - low) >> 1);

    if records.compare(low, mid) == Ordering::Greater {
        records.swap(low, mid);
    }
    if records.compare(low, high) == Ordering::Greater {
        records.swap(low, high);
    }
    if records.compare(mid, high) == Ordering::Greater {
        records.swap(mid, high);
    }

    mid
}

#[inline]
pub(crate) fn insertion_sort<R: Records>(records: &mut R, span: Span) {
    for i in span.low + 1..=span.high {
        let mut j = i;
        while j > span.low && records.compare(j, j - 1) == Ordering::Less {
            records.swap(j, j - 1);
            j -= 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Plain `u64` records that count comparisons.
    pub(crate) struct Counted {
        pub data: Vec<u64>,
        pub comparisons: usize,
    }

    impl Counted {
        pub fn new(data: &[u64]) -> Self {
            Self {
                data: data.to_vec(),
                comparisons: 0,
            }
        }
    }

    impl Records for Counted {
        fn len(&self) -> usize {
            self.data.len()
        }

        fn compare(&mut self, a: usize, b: usize) -> Ordering {
            self.comparisons += 1;
            self.data[a].cmp(&self.data[b])
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.data.swap(a, b);
        }
    }

    #[test]
    fn span_construction() {
        assert_eq!(Span::whole(0), None);
        assert_eq!(Span::whole(1), None);
        assert_eq!(Span::whole(2), Some(Span { low: 0, high: 1 }));
        assert_eq!(Span::new(5, 5), None);
        assert_eq!(Span::new(3, 9).map(Span::len), Some(7));
    }

    #[test]
    fn median_of_three_orders_samples() {
        let cases: [[u64; 3]; 6] = [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ];
        for [a, b, c] in cases {
            let mut records = Counted::new(&[a, 9, b, 9, c]);
            let mid = median_of_three(&mut records, Span { low: 0, high: 4 });
            assert_eq!(mid, 2);
            assert_eq!(
                [records.data[0], records.data[2], records.data[4]],
                [1, 2, 3]
            );
            assert!(records.comparisons <= 3);
        }
    }

    #[test]
    fn median_of_three_on_pair() {
        let mut records = Counted::new(&[8, 3]);
        let mid = median_of_three(&mut records, Span { low: 0, high: 1 });
        assert_eq!(mid, 0);
        assert_eq!(records.data, [3, 8]);
    }

    #[test]
    fn insertion_sort_touches_only_span() {
        let mut records = Counted::new(&[9, 5, 4, 3, 2, 1, 0]);
        insertion_sort(&mut records, Span { low: 1, high: 5 });
        assert_eq!(records.data, [9, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn insertion_sort_sorted_input_is_linear() {
        let data = (0..24_u64).collect::<Vec<_>>();
        let mut records = Counted::new(&data);
        insertion_sort(&mut records, Span { low: 0, high: 23 });
        assert_eq!(records.data, data);
        assert_eq!(records.comparisons, 23);
    }
}
