use crate::producer::{Producer, SizeHint};

/// A producer whose exhaustion is final. Created by
/// [`ProducerExt::fuse`](crate::ProducerExt::fuse).
///
/// The base contract permits a producer to yield `Some` again after
/// having returned `None`. `Fuse` removes that freedom: after the first
/// `None` from the underlying producer, every later call returns `None`
/// without the underlying producer being invoked at all.
pub struct Fuse<I> {
    inner: I,
    done: bool,
}

impl<I> Fuse<I> {
    pub(crate) fn new(inner: I) -> Fuse<I> {
        Fuse { inner, done: false }
    }
}

impl<I: Producer> Producer for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        let x = self.inner.next();
        if x.is_none() {
            self.done = true;
        }
        x
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            (0, Some(0))
        } else {
            self.inner.size_hint()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::{Producer, ProducerExt};

    /// Yields its value on even calls and `None` on odd ones, forever.
    /// A legal producer: exhaustion is allowed to be temporary.
    struct Blink {
        calls: usize,
    }

    impl Producer for Blink {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.calls += 1;
            if self.calls % 2 == 1 {
                Some(7)
            } else {
                None
            }
        }
    }

    #[test]
    fn unfused_producers_may_resume() {
        let mut blink = Blink { calls: 0 };
        assert_eq!(blink.next(), Some(7));
        assert_eq!(blink.next(), None);
        assert_eq!(blink.next(), Some(7));
    }

    #[test]
    fn fuse_pins_exhaustion() {
        let mut it = Blink { calls: 0 }.fuse();
        assert_eq!(it.next(), Some(7));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn fuse_is_transparent_before_exhaustion() {
        let mut it = from_vec(vec![1, 2]).fuse();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
