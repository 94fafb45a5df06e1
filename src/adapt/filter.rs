use crate::producer::{Producer, SizeHint};

/// A producer that yields only the elements satisfying a predicate.
/// Created by [`ProducerExt::filter`](crate::ProducerExt::filter).
pub struct Filter<I, P> {
    inner: I,
    pred: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(inner: I, pred: P) -> Filter<I, P> {
        Filter { inner, pred }
    }
}

impl<I, P> Producer for Filter<I, P>
where
    I: Producer,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.inner.next()?;
            if (self.pred)(&x) {
                return Some(x);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// A producer that discards a leading run of elements satisfying a
/// predicate. Created by
/// [`ProducerExt::skip_while`](crate::ProducerExt::skip_while).
///
/// The predicate is consulted only during the leading run. After its
/// first failure the adapter is a plain pass-through, so elements that
/// would satisfy the predicate again are yielded, not skipped.
pub struct SkipWhile<I, P> {
    inner: I,
    pred: P,
    skipping: bool,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) fn new(inner: I, pred: P) -> SkipWhile<I, P> {
        SkipWhile { inner, pred, skipping: true }
    }
}

impl<I, P> Producer for SkipWhile<I, P>
where
    I: Producer,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.skipping {
            let x = self.inner.next()?;
            if !(self.pred)(&x) {
                self.skipping = false;
                return Some(x);
            }
        }
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// A producer that yields a leading run of elements satisfying a
/// predicate, then permanently stops. Created by
/// [`ProducerExt::take_while`](crate::ProducerExt::take_while).
///
/// The stop is final: once an element fails the predicate (that element
/// is consumed and discarded), the adapter reports exhaustion forever,
/// even though the underlying producer may hold further elements that
/// would pass.
pub struct TakeWhile<I, P> {
    inner: I,
    pred: P,
    done: bool,
}

impl<I, P> TakeWhile<I, P> {
    pub(crate) fn new(inner: I, pred: P) -> TakeWhile<I, P> {
        TakeWhile { inner, pred, done: false }
    }
}

impl<I, P> Producer for TakeWhile<I, P>
where
    I: Producer,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let x = self.inner.next()?;
        if (self.pred)(&x) {
            Some(x)
        } else {
            self.done = true;
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            return (0, Some(0));
        }
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::{Producer, ProducerExt};

    #[test]
    fn filter_keeps_order() {
        let evens = from_vec(vec![1, 2, 3, 4, 5, 6])
            .filter(|x| x % 2 == 0)
            .collect();
        assert_eq!(evens, vec![2, 4, 6]);
    }

    #[test]
    fn filter_may_discard_everything() {
        let none = from_vec(vec![1, 3, 5]).filter(|x| x % 2 == 0).collect();
        assert_eq!(none, Vec::<i32>::new());
    }

    #[test]
    fn skip_while_stops_skipping_permanently() {
        // 1 and 2 are skipped; after 3 fails the predicate, the trailing
        // 1 and 2 pass through even though they satisfy it.
        let rest = from_vec(vec![1, 2, 3, 1, 2])
            .skip_while(|&x| x < 3)
            .collect();
        assert_eq!(rest, vec![3, 1, 2]);
    }

    #[test]
    fn skip_while_everything() {
        let rest = from_vec(vec![1, 2, 3]).skip_while(|_| true).collect();
        assert_eq!(rest, Vec::<i32>::new());
    }

    #[test]
    fn take_while_stop_is_permanent() {
        // The second element fails and stops everything, so the later 1,
        // which would pass again, is never yielded.
        let mut it = from_vec(vec![1, 2, 1, 1]).take_while(|&x| x < 2);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn take_while_consumes_the_failing_element() {
        let mut inner = from_vec(vec![1, 5, 2, 3]);
        {
            let mut it = (&mut inner).take_while(|&x| x < 3);
            assert_eq!(it.next(), Some(1));
            assert_eq!(it.next(), None);
        }
        // 5 was pulled to test the predicate and discarded; traversal of
        // the source resumes after it.
        assert_eq!(inner.next(), Some(2));
    }
}
