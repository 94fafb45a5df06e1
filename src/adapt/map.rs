use crate::producer::{Producer, SizeHint};

/// A producer that transforms every element of another producer through a
/// function. Created by [`ProducerExt::map`](crate::ProducerExt::map).
pub struct Map<I, F> {
    inner: I,
    f: F,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(inner: I, f: F) -> Map<I, F> {
        Map { inner, f }
    }
}

impl<I, B, F> Producer for Map<I, F>
where
    I: Producer,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.inner.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        // Mapping is one-to-one, so the inner bounds carry over exactly.
        self.inner.size_hint()
    }
}

/// A producer that simultaneously filters and maps. Created by
/// [`ProducerExt::filter_map`](crate::ProducerExt::filter_map).
pub struct FilterMap<I, F> {
    inner: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) fn new(inner: I, f: F) -> FilterMap<I, F> {
        FilterMap { inner, f }
    }
}

impl<I, B, F> Producer for FilterMap<I, F>
where
    I: Producer,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        loop {
            let x = self.inner.next()?;
            if let Some(mapped) = (self.f)(x) {
                return Some(mapped);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        // Any number of elements may be discarded, so only the upper
        // bound survives.
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// A producer that maps elements until the function declines one. Created
/// by [`ProducerExt::map_while`](crate::ProducerExt::map_while).
///
/// Unlike [`FilterMap`], a `None` from the function is reported as
/// exhaustion instead of skipped.
pub struct MapWhile<I, F> {
    inner: I,
    f: F,
}

impl<I, F> MapWhile<I, F> {
    pub(crate) fn new(inner: I, f: F) -> MapWhile<I, F> {
        MapWhile { inner, f }
    }
}

impl<I, B, F> Producer for MapWhile<I, F>
where
    I: Producer,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        let x = self.inner.next()?;
        (self.f)(x)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// A producer that pairs each element with its zero-based position.
/// Created by [`ProducerExt::enumerate`](crate::ProducerExt::enumerate).
///
/// The index counts successful pulls from this adapter, starting at 0
/// regardless of how many adapters precede it in the chain or how much of
/// the source has already been consumed.
pub struct Enumerate<I> {
    inner: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(inner: I) -> Enumerate<I> {
        Enumerate { inner, count: 0 }
    }
}

impl<I: Producer> Producer for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<(usize, I::Item)> {
        let x = self.inner.next()?;
        let i = self.count;
        self.count += 1;
        Some((i, x))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}
