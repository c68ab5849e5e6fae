use crate::SortError;

use super::common::Span;

/// Fixed-capacity LIFO of pending spans. Lives on the call stack.
pub(crate) struct WorkStack<const N: usize> {
    entries: [Span; N],
    top: usize,
}

impl<const N: usize> WorkStack<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: [Span::default(); N],
            top: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, span: Span) -> Result<(), SortError> {
        let slot = self
            .entries
            .get_mut(self.top)
            .ok_or(SortError::StackExhausted { capacity: N })?;
        *slot = span;
        self.top += 1;
        Ok(())
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Span> {
        self.top = self.top.checked_sub(1)?;
        Some(self.entries[self.top])
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = WorkStack::<4>::new();
        for low in 0..3 {
            stack.push(Span { low, high: 10 }).unwrap();
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop().map(|s| s.low), Some(2));
        assert_eq!(stack.pop().map(|s| s.low), Some(1));
        assert_eq!(stack.pop().map(|s| s.low), Some(0));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn overflow_is_reported() {
        let mut stack = WorkStack::<2>::new();
        let span = Span { low: 0, high: 1 };
        stack.push(span).unwrap();
        stack.push(span).unwrap();
        assert_eq!(
            stack.push(span),
            Err(SortError::StackExhausted { capacity: 2 })
        );
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn zero_capacity_rejects_first_push() {
        let mut stack = WorkStack::<0>::new();
        assert!(stack.push(Span { low: 0, high: 1 }).is_err());
        assert_eq!(stack.pop(), None);
    }
}
