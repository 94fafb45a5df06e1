use std::vec;

use crossbeam_channel::Receiver;

use crate::producer::{Producer, SizeHint};

/// Creates a producer that yields the elements of `vec` in order.
///
/// This source is deterministic and finite, and its size hint is exact at
/// every point of the traversal.
pub fn from_vec<T>(vec: Vec<T>) -> FromVec<T> {
    FromVec { elems: vec.into_iter() }
}

/// Creates a producer over the characters of a string.
///
/// Convenience for `from_vec(s.chars().collect())`.
pub fn from_chars(s: &str) -> FromVec<char> {
    from_vec(s.chars().collect())
}

/// A producer over the elements of a vector. See [`from_vec`].
pub struct FromVec<T> {
    elems: vec::IntoIter<T>,
}

impl<T> Producer for FromVec<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.elems.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        let n = self.elems.len();
        (n, Some(n))
    }
}

/// Creates a producer over the half-open range `[start, end)`, counting up
/// by one.
///
/// An empty range (`start >= end`) yields nothing. Works for any primitive
/// integer type.
pub fn from_range<T: Integer>(start: T, end: T) -> FromRange<T> {
    FromRange { cursor: Some(start), end, right_closed: false }
}

/// Creates a producer over the closed range `[start, end]`, counting up by
/// one.
///
/// Yields nothing when `start > end`; yields exactly `start` when the
/// bounds are equal.
pub fn from_range_inclusive<T: Integer>(start: T, end: T) -> FromRange<T> {
    FromRange { cursor: Some(start), end, right_closed: true }
}

/// A producer over an arithmetic progression of integers. See
/// [`from_range`] and [`from_range_inclusive`].
pub struct FromRange<T> {
    // The next value to yield, or None once the range is exhausted. The
    // inclusive case needs the explicit terminal state because `end` itself
    // has to be yielded before stopping, and `end` may have no successor.
    cursor: Option<T>,
    end: T,
    right_closed: bool,
}

impl<T: Integer> Producer for FromRange<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cur = self.cursor?;
        if cur < self.end {
            self.cursor = cur.successor();
            Some(cur)
        } else if cur == self.end && self.right_closed {
            self.cursor = None;
            Some(cur)
        } else {
            self.cursor = None;
            None
        }
    }

    fn size_hint(&self) -> SizeHint {
        let cur = match self.cursor {
            None => return (0, Some(0)),
            Some(cur) => cur,
        };
        if cur > self.end {
            return (0, Some(0));
        }
        let span = cur.span_to(self.end);
        let size = if self.right_closed {
            span.and_then(|n| n.checked_add(1))
        } else {
            span
        };
        match size {
            // The range has more elements than a usize can count, so the
            // upper bound must be reported as unknown.
            None => (usize::max_value(), None),
            Some(n) => (n, Some(n)),
        }
    }
}

/// An integer type usable as a range bound.
///
/// This exists so that [`from_range`] works for every primitive integer
/// type with a single definition. It is implemented for all of them and is
/// not meant to be implemented outside this crate.
pub trait Integer: Copy + Ord {
    /// The next value up, or `None` at the type's maximum.
    fn successor(self) -> Option<Self>;
    /// The number of steps from `self` up to (excluding) `end`, or `None`
    /// if that count does not fit in a `usize`. Callers guarantee
    /// `self <= end`.
    fn span_to(self, end: Self) -> Option<usize>;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl Integer for $ty {
                #[inline]
                fn successor(self) -> Option<$ty> {
                    self.checked_add(1)
                }

                #[inline]
                fn span_to(self, end: $ty) -> Option<usize> {
                    // The subtraction cannot overflow an i128 for any
                    // primitive integer operands.
                    let span = (end as i128) - (self as i128);
                    if span >= 0 && span <= (usize::max_value() as i128) {
                        Some(span as usize)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Creates a producer that receives its elements from a channel.
///
/// Each call to `next` blocks the calling thread until a message is
/// available or every sender has been dropped; a closed, drained channel
/// maps to exhaustion. This is the only producer in this crate whose
/// `next` can suspend the calling thread, and there is no cancellation:
/// a blocked call unblocks only when the sending side sends or closes.
///
/// ```
/// use trickle::{from_chan, ProducerExt};
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// tx.send(1).unwrap();
/// tx.send(2).unwrap();
/// drop(tx);
/// assert_eq!(from_chan(rx).collect(), vec![1, 2]);
/// ```
pub fn from_chan<T>(chan: Receiver<T>) -> FromChan<T> {
    FromChan { chan }
}

/// A blocking producer over a channel receiver. See [`from_chan`].
pub struct FromChan<T> {
    chan: Receiver<T>,
}

impl<T> Producer for FromChan<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.chan.recv().ok()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        // A bounded channel can hold at most its capacity at any instant,
        // but more messages may flow through it over the traversal, so the
        // capacity is advisory and the lower bound stays at zero.
        (0, self.chan.capacity())
    }
}
