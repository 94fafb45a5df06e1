use crate::producer::{Producer, SizeHint};

/// A producer with a one-element lookahead buffer. Created by
/// [`ProducerExt::peekable`](crate::ProducerExt::peekable).
///
/// [`peek`](Peekable::peek) pulls an element from the underlying
/// producer and parks it in the buffer without logically consuming it;
/// the next call to `next` drains the buffer before touching the
/// underlying producer again. The buffer also parks an observed
/// exhaustion, so peeking at the end does not re-pull a producer that
/// might resume.
pub struct Peekable<I>
where
    I: Producer,
{
    inner: I,
    peeked: Option<Option<I::Item>>,
}

impl<I: Producer> Peekable<I> {
    pub(crate) fn new(inner: I) -> Peekable<I> {
        Peekable { inner, peeked: None }
    }

    /// Returns a reference to the next element without consuming it, or
    /// `None` if the underlying producer is exhausted.
    ///
    /// The first `peek` after a `next` advances the underlying producer
    /// by one element; repeated peeks return the same buffered element.
    pub fn peek(&mut self) -> Option<&I::Item> {
        let inner = &mut self.inner;
        self.peeked.get_or_insert_with(|| inner.next()).as_ref()
    }
}

impl<I: Producer> Producer for Peekable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.peeked.take() {
            Some(buffered) => buffered,
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.peeked {
            // A buffered exhaustion: nothing further will be yielded.
            Some(None) => (0, Some(0)),
            Some(Some(_)) => {
                let (lower, upper) = self.inner.size_hint();
                (
                    lower.saturating_add(1),
                    upper.and_then(|n| n.checked_add(1)),
                )
            }
            None => self.inner.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::{Producer, ProducerExt};

    #[test]
    fn peek_does_not_consume() {
        let mut it = from_vec(vec![1, 2, 3]).peekable();
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.peek(), Some(&3));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.peek(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn peek_adjusts_the_size_hint() {
        let mut it = from_vec(vec![1, 2]).peekable();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.peek();
        // One element buffered plus one left in the source.
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.next();
        it.next();
        it.peek();
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
