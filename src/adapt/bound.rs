use crate::producer::{Producer, SizeHint};

/// A producer that discards a fixed-length prefix. Created by
/// [`ProducerExt::skip`](crate::ProducerExt::skip).
pub struct Skip<I> {
    inner: I,
    remaining: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(inner: I, n: usize) -> Skip<I> {
        Skip { inner, remaining: n }
    }
}

impl<I: Producer> Producer for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // The skip happens at most once, on the first pull.
        if self.remaining > 0 {
            let n = self.remaining;
            self.remaining = 0;
            for _ in 0..n {
                self.inner.next()?;
            }
        }
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|n| n.saturating_sub(self.remaining)),
        )
    }
}

/// A producer that yields at most a fixed number of elements. Created by
/// [`ProducerExt::take`](crate::ProducerExt::take).
///
/// Once the budget is spent the adapter reports exhaustion without
/// consulting the underlying producer, so the elements past the cut are
/// left in place.
pub struct Take<I> {
    inner: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(inner: I, n: usize) -> Take<I> {
        Take { inner, remaining: n }
    }
}

impl<I: Producer> Producer for Take<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.inner.size_hint();
        let upper = match upper {
            Some(n) if n < self.remaining => Some(n),
            _ => Some(self.remaining),
        };
        (lower.min(self.remaining), upper)
    }
}

/// A producer that yields the first element and then every `step`th
/// element after it. Created by
/// [`ProducerExt::step_by`](crate::ProducerExt::step_by).
pub struct StepBy<I> {
    inner: I,
    step: usize,
    first: bool,
}

impl<I> StepBy<I> {
    pub(crate) fn new(inner: I, step: usize) -> StepBy<I> {
        assert!(step != 0, "step_by requires a step of at least 1");
        StepBy { inner, step, first: true }
    }
}

impl<I: Producer> Producer for StepBy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.first {
            self.first = false;
            return self.inner.next();
        }
        // Discard the gap, then yield.
        for _ in 1..self.step {
            self.inner.next()?;
        }
        self.inner.next()
    }

    fn size_hint(&self) -> SizeHint {
        let (lower, upper) = self.inner.size_hint();
        let step = self.step;
        let remaining = |n: usize| {
            if self.first {
                // The first element costs one pull; each later element
                // costs `step`.
                if n == 0 {
                    0
                } else {
                    1 + (n - 1) / step
                }
            } else {
                n / step
            }
        };
        (remaining(lower), upper.map(remaining))
    }
}
