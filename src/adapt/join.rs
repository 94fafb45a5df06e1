use crate::producer::{Producer, SizeHint};

/// A producer that yields one producer's elements, then another's.
/// Created by [`ProducerExt::chain`](crate::ProducerExt::chain).
pub struct Chain<A, B> {
    first: A,
    second: B,
    on_first: bool,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Chain<A, B> {
        Chain { first, second, on_first: true }
    }
}

impl<A, B> Producer for Chain<A, B>
where
    A: Producer,
    B: Producer<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.on_first {
            if let Some(x) = self.first.next() {
                return Some(x);
            }
            // One-way switch: the first producer is never pulled again,
            // even if it would resume.
            self.on_first = false;
        }
        self.second.next()
    }

    fn size_hint(&self) -> SizeHint {
        let (b_lower, b_upper) = self.second.size_hint();
        if !self.on_first {
            return (b_lower, b_upper);
        }
        let (a_lower, a_upper) = self.first.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (a_lower.saturating_add(b_lower), upper)
    }
}

/// A producer that pulls both of its inner producers in lock step and
/// yields pairs. Created by [`ProducerExt::zip`](crate::ProducerExt::zip).
///
/// Exhaustion of either side permanently exhausts the pair. The first
/// side is pulled before the second on every call, so once the first
/// side runs out the second is never pulled at all.
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Zip<A, B> {
        Zip { a, b, done: false }
    }
}

impl<A, B> Producer for Zip<A, B>
where
    A: Producer,
    B: Producer,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<(A::Item, B::Item)> {
        if self.done {
            return None;
        }
        let x = match self.a.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(x) => x,
        };
        match self.b.next() {
            None => {
                // The element just pulled from the first side has no
                // partner and is dropped, matching lock-step semantics.
                self.done = true;
                None
            }
            Some(y) => Some((x, y)),
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return (0, Some(0));
        }
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}
