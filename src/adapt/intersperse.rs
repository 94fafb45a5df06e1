use crate::adapt::Peekable;
use crate::producer::{Producer, SizeHint};

/// A producer that places a clone of a separator between adjacent
/// elements. Created by
/// [`ProducerExt::intersperse`](crate::ProducerExt::intersperse).
///
/// The separator never leads or trails: an empty producer stays empty
/// and a one-element producer is passed through untouched. Lookahead of
/// one element (via an internal [`Peekable`]) is what prevents a
/// trailing separator.
pub struct Intersperse<I>
where
    I: Producer,
{
    inner: Peekable<I>,
    separator: I::Item,
    needs_sep: bool,
}

impl<I> Intersperse<I>
where
    I: Producer,
    I::Item: Clone,
{
    pub(crate) fn new(inner: I, separator: I::Item) -> Intersperse<I> {
        Intersperse {
            inner: Peekable::new(inner),
            separator,
            needs_sep: false,
        }
    }
}

impl<I> Producer for Intersperse<I>
where
    I: Producer,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.needs_sep && self.inner.peek().is_some() {
            self.needs_sep = false;
            Some(self.separator.clone())
        } else {
            self.needs_sep = true;
            self.inner.next()
        }
    }

    fn size_hint(&self) -> SizeHint {
        intersperse_size_hint(self.inner.size_hint(), self.needs_sep)
    }
}

/// Like [`Intersperse`], but each separator is manufactured by a closure.
/// Created by
/// [`ProducerExt::intersperse_with`](crate::ProducerExt::intersperse_with).
pub struct IntersperseWith<I, F>
where
    I: Producer,
{
    inner: Peekable<I>,
    separator: F,
    needs_sep: bool,
}

impl<I, F> IntersperseWith<I, F>
where
    I: Producer,
    F: FnMut() -> I::Item,
{
    pub(crate) fn new(inner: I, separator: F) -> IntersperseWith<I, F> {
        IntersperseWith {
            inner: Peekable::new(inner),
            separator,
            needs_sep: false,
        }
    }
}

impl<I, F> Producer for IntersperseWith<I, F>
where
    I: Producer,
    F: FnMut() -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.needs_sep && self.inner.peek().is_some() {
            self.needs_sep = false;
            Some((self.separator)())
        } else {
            self.needs_sep = true;
            self.inner.next()
        }
    }

    fn size_hint(&self) -> SizeHint {
        intersperse_size_hint(self.inner.size_hint(), self.needs_sep)
    }
}

fn intersperse_size_hint(inner: SizeHint, needs_sep: bool) -> SizeHint {
    // n remaining elements yield n - 1 separators between them, plus one
    // leading separator when one is already owed.
    let (lower, upper) = inner;
    let lower = if needs_sep {
        lower.saturating_mul(2)
    } else {
        lower.saturating_mul(2).saturating_sub(1)
    };
    let upper = upper.and_then(|n| {
        let doubled = n.checked_mul(2)?;
        Some(if needs_sep { doubled } else { doubled.saturating_sub(1) })
    });
    (lower, upper)
}

#[cfg(test)]
mod tests {
    use crate::source::from_vec;
    use crate::{Producer, ProducerExt};

    #[test]
    fn separator_goes_between_elements_only() {
        let spaced = from_vec(vec![1, 2, 3]).intersperse(0).collect();
        assert_eq!(spaced, vec![1, 0, 2, 0, 3]);
    }

    #[test]
    fn no_separator_for_short_producers() {
        assert_eq!(
            from_vec(Vec::<i32>::new()).intersperse(0).collect(),
            Vec::<i32>::new()
        );
        assert_eq!(from_vec(vec![7]).intersperse(0).collect(), vec![7]);
    }

    #[test]
    fn with_builds_each_separator() {
        let mut n = 10;
        let spaced = from_vec(vec![1, 2, 3])
            .intersperse_with(|| {
                n += 1;
                n
            })
            .collect();
        assert_eq!(spaced, vec![1, 11, 2, 12, 3]);
    }

    #[test]
    fn size_hint_counts_separators() {
        let it = from_vec(vec![1, 2, 3]).intersperse(0);
        assert_eq!(it.size_hint(), (5, Some(5)));

        let mut it = from_vec(vec![1, 2, 3]).intersperse(0);
        it.next();
        // Two elements remain plus a separator owed before each.
        assert_eq!(it.size_hint(), (4, Some(4)));

        let it = from_vec(Vec::<i32>::new()).intersperse(0);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
