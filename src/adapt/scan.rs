use crate::producer::{Producer, SizeHint};

/// A producer that threads mutable fold state through a function while
/// yielding its results. Created by
/// [`ProducerExt::scan`](crate::ProducerExt::scan).
///
/// Each pull advances the underlying producer by one element and hands
/// the function a mutable borrow of the state together with that
/// element. A `None` from the function permanently exhausts the
/// adapter, no matter what the underlying producer would still yield.
pub struct Scan<I, St, F> {
    inner: I,
    state: St,
    f: F,
    done: bool,
}

impl<I, St, F> Scan<I, St, F> {
    pub(crate) fn new(inner: I, state: St, f: F) -> Scan<I, St, F> {
        Scan { inner, state, f, done: false }
    }
}

impl<I, St, B, F> Producer for Scan<I, St, F>
where
    I: Producer,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        let x = self.inner.next()?;
        match (self.f)(&mut self.state, x) {
            None => {
                self.done = true;
                None
            }
            some => some,
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        if self.done {
            return (0, Some(0));
        }
        // The function may cut traversal short at any point.
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}
