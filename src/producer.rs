/// A non-authoritative bound on the number of elements a producer has left.
///
/// The first component is a lower bound: a count of elements known to still
/// be reachable. The second component is an optional upper bound, where
/// `None` means either that no upper bound is known or that the bound does
/// not fit in a `usize`.
///
/// Hints exist purely so that `collect` can pre-size its storage. They are
/// never trusted for anything else: a producer that yields fewer elements
/// than its lower bound or more than its upper bound is buggy, but consumers
/// must degrade to a re-allocation rather than misbehave.
pub type SizeHint = (usize, Option<usize>);

/// Producer is the minimal capability required to drive traversal: yield
/// the next element, or signal exhaustion with `None`.
///
/// Everything else in this crate is built on top of this one operation.
/// Concrete sources (a vector, an integer range, a channel) implement it
/// directly; every adapter implements it by pulling from the producer (or
/// producers) it wraps. Composition is strictly by wrapping: no adapter
/// shares or mutates another's cursor state.
///
/// Unlike `std::iter::Iterator`, the item type here is always owned by the
/// producer chain. Elements are manufactured by a source, handed through
/// the wrapper chain one at a time and consumed immediately; nothing in the
/// protocol borrows from the producer itself.
///
/// # Exhaustion is not final
///
/// It is unspecified what a producer does after it has returned `None`
/// once. Most sources in this crate keep returning `None`, but adapters
/// must not rely on that, and a few (for example an adapter over a channel
/// that is refilled) may legitimately resume. The [`Fuse`] adapter upgrades
/// the weak contract to a permanent one.
///
/// [`Fuse`]: crate::adapt::Fuse
pub trait Producer {
    /// The type of element this producer yields.
    type Item;

    /// Yields the next element, or `None` to signal exhaustion.
    fn next(&mut self) -> Option<Self::Item>;

    /// Returns bounds on the number of remaining elements.
    ///
    /// The default implementation returns `(0, None)`, which is correct for
    /// every producer.
    #[inline]
    fn size_hint(&self) -> SizeHint {
        (0, None)
    }
}

impl<'a, P: Producer + ?Sized> Producer for &'a mut P {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        (**self).next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }
}

/// IntoProducer describes types that can be converted into a producer.
///
/// This is analogous to `IntoIterator` for `Iterator` in `std::iter`. It
/// exists so that operations combining two chains (`chain`, `zip`,
/// `flat_map`) can accept either an existing producer or a plain value,
/// such as a `Vec`, that has an obvious producer form.
pub trait IntoProducer {
    /// The type of element the constructed producer yields.
    type Item;
    /// The type of the producer to be constructed.
    type Into: Producer<Item = Self::Item>;

    /// Converts `self` into a producer.
    fn into_producer(self) -> Self::Into;
}

impl<P: Producer> IntoProducer for P {
    type Item = P::Item;
    type Into = P;

    #[inline]
    fn into_producer(self) -> P {
        self
    }
}

impl<T> IntoProducer for Vec<T> {
    type Item = T;
    type Into = crate::source::FromVec<T>;

    #[inline]
    fn into_producer(self) -> crate::source::FromVec<T> {
        crate::source::from_vec(self)
    }
}
