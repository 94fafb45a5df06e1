use std::num::NonZeroUsize;

use crate::adapt::{
    Chain, Enumerate, Filter, FilterMap, FlatMap, Flatten, Fuse, Intersperse,
    IntersperseWith, Map, MapWhile, Peekable, Scan, Skip, SkipWhile, StepBy,
    Take, TakeWhile, Zip,
};
use crate::producer::{IntoProducer, Producer};

/// Every adapter constructor and terminal consumer, derived once from
/// [`Producer::next`].
///
/// This trait is implemented for every producer via a blanket impl; it is
/// never implemented by hand. The split between the minimal capability
/// (`Producer`) and the derived operations (this trait) keeps the bar for
/// writing a new source or adapter at exactly one required method.
///
/// The adapter constructors (`map`, `filter`, `take`, ...) are all lazy:
/// calling one wraps `self` in a new producer and performs no traversal.
/// The terminal consumers (`fold`, `collect`, `count`, ...) are the only
/// operations that pull elements. Two of them are primitive and everything
/// else is expressed through them:
///
/// * [`fold`](ProducerExt::fold) drives traversal to exhaustion;
/// * [`try_fold`](ProducerExt::try_fold) drives traversal until the first
///   `Err`, which unifies early termination, searching and fallible
///   accumulation under one short-circuiting loop.
///
/// Traversal is never time-bounded: folding an infinite producer does not
/// terminate unless an upstream `take`/`take_while` bounds it.
pub trait ProducerExt: Producer {
    /// Transforms every element through `f`.
    ///
    /// The adapter exhausts exactly when the underlying producer does.
    #[inline]
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Yields only the elements for which `pred` returns `true`.
    ///
    /// Each call to `next` pulls from the underlying producer repeatedly,
    /// discarding failing elements, until one passes or the source is
    /// exhausted.
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    /// Transforms elements through `f`, discarding those for which `f`
    /// returns `None`.
    ///
    /// This both filters and maps in one pull loop.
    #[inline]
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Transforms elements through `f`, ending iteration on the first
    /// element for which `f` returns `None`.
    ///
    /// Unlike `filter_map`, a `None` from `f` is reported as exhaustion
    /// rather than skipped, and no further element is pulled for it.
    #[inline]
    fn map_while<B, F>(self, f: F) -> MapWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, f)
    }

    /// Discards the first `n` elements, then passes everything through.
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yields at most `n` elements, then reports exhaustion regardless of
    /// the state of the underlying producer.
    ///
    /// This is the standard way of bounding an infinite producer so that a
    /// terminal consumer terminates.
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Discards elements while `pred` holds; once it fails for the first
    /// time, every subsequent element passes through unchanged, including
    /// elements that would have satisfied `pred` again.
    #[inline]
    fn skip_while<P>(self, pred: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, pred)
    }

    /// Yields elements while `pred` holds; the first failure permanently
    /// exhausts the adapter, even if a later element would satisfy `pred`.
    ///
    /// The failing element itself is consumed from the underlying producer
    /// and discarded.
    #[inline]
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Yields the first element, then every `step`th element after it.
    ///
    /// `from_range(0, 6).step_by(2)` yields `0, 2, 4`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero. A zero step cannot make progress and is a
    /// programming error, rejected at construction rather than producing a
    /// silently wrong (or non-terminating) traversal.
    #[inline]
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        StepBy::new(self, step)
    }

    /// Threads mutable state through `f`, yielding each `Some` that `f`
    /// returns. A `None` from `f` permanently exhausts the adapter.
    #[inline]
    fn scan<St, B, F>(self, state: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<B>,
    {
        Scan::new(self, state, f)
    }

    /// Pairs each element with a zero-based index that increments once per
    /// successful pull.
    #[inline]
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Adds a one-element lookahead buffer, exposing
    /// [`peek`](crate::adapt::Peekable::peek).
    #[inline]
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Upgrades the exhaustion contract: once the underlying producer has
    /// returned `None`, every subsequent call returns `None` without the
    /// underlying producer ever being consulted again.
    #[inline]
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Yields all of `self`'s elements, then all of `other`'s.
    ///
    /// The switch to `other` is one-way: once the first producer has
    /// reported exhaustion it is never pulled again.
    #[inline]
    fn chain<J>(self, other: J) -> Chain<Self, J::Into>
    where
        Self: Sized,
        J: IntoProducer<Item = Self::Item>,
    {
        Chain::new(self, other.into_producer())
    }

    /// Yields pairs of elements pulled from `self` and `other` in lock
    /// step.
    ///
    /// Iteration ends permanently the moment either side is exhausted; the
    /// second side is not pulled at all once the first side has reported
    /// exhaustion, so its next element (if any) is left in place.
    #[inline]
    fn zip<J>(self, other: J) -> Zip<Self, J::Into>
    where
        Self: Sized,
        J: IntoProducer,
    {
        Zip::new(self, other.into_producer())
    }

    /// Places a clone of `separator` between adjacent elements.
    ///
    /// No separator is emitted before the first element or after the last.
    #[inline]
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Like [`intersperse`](ProducerExt::intersperse), but manufactures
    /// each separator by calling `separator`, for element types that are
    /// not `Clone` or separators that are expensive to build up front.
    #[inline]
    fn intersperse_with<F>(self, separator: F) -> IntersperseWith<Self, F>
    where
        Self: Sized,
        F: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Maps each element to a producer and yields the elements of each in
    /// turn.
    ///
    /// Each sub-producer is drained fully before the next element is
    /// pulled from the underlying producer.
    #[inline]
    fn flat_map<J, F>(self, f: F) -> FlatMap<Self, J, F>
    where
        Self: Sized,
        J: IntoProducer,
        F: FnMut(Self::Item) -> J,
    {
        FlatMap::new(self, f)
    }

    /// Flattens one level of nesting in a producer of producer-convertible
    /// values.
    #[inline]
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoProducer,
    {
        Flatten::new(self)
    }

    /// Folds every element into an accumulator, returning the final value.
    ///
    /// This is the primitive full traversal: it calls `next` until
    /// exhaustion and applies `f(acc, element)` at every step. It does not
    /// terminate on an infinite producer.
    ///
    /// ```
    /// use trickle::{from_vec, ProducerExt};
    ///
    /// let sum = from_vec(vec![1, 2, 3]).fold(0, |acc, x| acc + x);
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Folds every element into an accumulator until `f` returns an error,
    /// which is returned immediately.
    ///
    /// This is the primitive short-circuiting traversal; `all`, `any`,
    /// `find`, `position` and `try_for_each` are all specializations of it.
    /// Because it takes `self` by mutable reference, traversal can resume
    /// after an early return: elements consumed before the `Err` stay
    /// consumed, elements after it are still available.
    #[inline]
    fn try_fold<B, E, F>(&mut self, init: B, mut f: F) -> Result<B, E>
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x)?;
        }
        Ok(acc)
    }

    /// Calls `f` on every element.
    #[inline]
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), x| f(x));
    }

    /// Calls a fallible `f` on each element, stopping at and returning the
    /// first error.
    #[inline]
    fn try_for_each<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.try_fold((), |(), x| f(x))
    }

    /// Consumes the producer, counting the number of elements.
    ///
    /// Forces a full traversal; every remaining element is pulled and
    /// discarded.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |n, _| n + 1)
    }

    /// Consumes the producer, returning the last element it yields, or
    /// `None` if it was already exhausted.
    #[inline]
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    /// Advances by exactly `n` elements, discarding them.
    ///
    /// If the producer is exhausted first, returns the number of elements
    /// that could not be advanced over as an error.
    #[inline]
    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize>
    where
        Self: Sized,
    {
        for done in 0..n {
            if self.next().is_none() {
                // done < n, so the shortfall is necessarily nonzero.
                return Err(NonZeroUsize::new(n - done)
                    .expect("shortfall of a failed advance is nonzero"));
            }
        }
        Ok(())
    }

    /// Discards `n` elements and returns the one after them, or `None` if
    /// the producer is exhausted first.
    ///
    /// `nth(0)` is equivalent to `next`. The position is cumulative:
    /// repeated calls do not rewind, so `nth(1)` twice on `[1, 2, 3]`
    /// yields `Some(2)` and then `None`.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.advance_by(n).ok()?;
        self.next()
    }

    /// Tests whether every element satisfies `pred`, short-circuiting on
    /// the first failure. An exhausted producer yields `true`.
    #[inline]
    fn all<P>(&mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| if pred(x) { Ok(()) } else { Err(()) })
            .is_ok()
    }

    /// Tests whether any element satisfies `pred`, short-circuiting on the
    /// first success. An exhausted producer yields `false`.
    #[inline]
    fn any<P>(&mut self, mut pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| if pred(x) { Err(()) } else { Ok(()) })
            .is_err()
    }

    /// Returns the first element satisfying `pred`, or `None` if the
    /// producer exhausts first. Elements before the match are consumed.
    #[inline]
    fn find<P>(&mut self, mut pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_fold((), |(), x| if pred(&x) { Err(x) } else { Ok(()) })
            .err()
    }

    /// Returns the zero-based position of the first element satisfying
    /// `pred`, or `None`. Elements up to and including the match are
    /// consumed.
    #[inline]
    fn position<P>(&mut self, mut pred: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold(0usize, |i, x| if pred(x) { Err(i) } else { Ok(i + 1) })
            .err()
    }

    /// Folds the producer using its first element as the seed, or returns
    /// `None` if it is already exhausted.
    ///
    /// ```
    /// use trickle::{from_vec, ProducerExt};
    ///
    /// assert_eq!(from_vec(vec![1, 2, 3]).reduce(|a, b| a + b), Some(6));
    /// assert_eq!(from_vec(Vec::<i32>::new()).reduce(|a, b| a + b), None);
    /// ```
    #[inline]
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// Splits all elements into two vectors by `pred`: elements that
    /// satisfy it, then elements that do not, each group in its original
    /// relative order. Forces a full traversal.
    #[inline]
    fn partition<P>(self, mut pred: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold((vec![], vec![]), |(mut yes, mut no), x| {
            if pred(&x) {
                yes.push(x);
            } else {
                no.push(x);
            }
            (yes, no)
        })
    }

    /// Materializes all remaining elements into a vector, in order.
    ///
    /// The upper size hint, when present, pre-sizes the storage; otherwise
    /// the lower hint does. The hint is advisory only, so a wrong one costs
    /// at most a re-allocation.
    #[inline]
    fn collect(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let (lower, upper) = self.size_hint();
        let mut out = Vec::with_capacity(upper.unwrap_or(lower));
        while let Some(x) = self.next() {
            out.push(x);
        }
        out
    }
}

impl<P: Producer> ProducerExt for P {}
