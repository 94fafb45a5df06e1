use crate::producer::{IntoProducer, Producer, SizeHint};

/// A producer that maps each element to a sub-producer and yields the
/// sub-producers' elements in sequence. Created by
/// [`ProducerExt::flat_map`](crate::ProducerExt::flat_map).
///
/// The outer cursor only advances once the current sub-producer is
/// fully drained, so element order is depth-first: all of the first
/// sub-producer, then all of the second, and so on.
pub struct FlatMap<I, J, F>
where
    J: IntoProducer,
{
    outer: I,
    f: F,
    current: Option<J::Into>,
}

impl<I, J, F> FlatMap<I, J, F>
where
    J: IntoProducer,
{
    pub(crate) fn new(outer: I, f: F) -> FlatMap<I, J, F> {
        FlatMap { outer, f, current: None }
    }
}

impl<I, J, F> Producer for FlatMap<I, J, F>
where
    I: Producer,
    J: IntoProducer,
    F: FnMut(I::Item) -> J,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if let Some(ref mut sub) = self.current {
                if let Some(x) = sub.next() {
                    return Some(x);
                }
                self.current = None;
            }
            let elem = self.outer.next()?;
            self.current = Some((self.f)(elem).into_producer());
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        // Sub-producer lengths are unknowable without running the
        // function, so no bound can be offered.
        (0, None)
    }
}

/// A producer that removes one level of nesting. Created by
/// [`ProducerExt::flatten`](crate::ProducerExt::flatten).
pub struct Flatten<I>
where
    I: Producer,
    I::Item: IntoProducer,
{
    outer: I,
    current: Option<<I::Item as IntoProducer>::Into>,
}

impl<I> Flatten<I>
where
    I: Producer,
    I::Item: IntoProducer,
{
    pub(crate) fn new(outer: I) -> Flatten<I> {
        Flatten { outer, current: None }
    }
}

impl<I> Producer for Flatten<I>
where
    I: Producer,
    I::Item: IntoProducer,
{
    type Item = <I::Item as IntoProducer>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(ref mut sub) = self.current {
                if let Some(x) = sub.next() {
                    return Some(x);
                }
                self.current = None;
            }
            let elem = self.outer.next()?;
            self.current = Some(elem.into_producer());
        }
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{from_range, from_vec};
    use crate::{Producer, ProducerExt};

    #[test]
    fn flat_map_drains_each_sub_producer_fully() {
        let repeated = from_vec(vec![1, 2, 3])
            .flat_map(|x| vec![x; x as usize])
            .collect();
        assert_eq!(repeated, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn flat_map_over_ranges() {
        let triangles = from_range(0, 4).flat_map(|n| from_range(0, n)).collect();
        assert_eq!(triangles, vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn flat_map_skips_empty_sub_producers() {
        let some = from_vec(vec![0, 2, 0, 1])
            .flat_map(|x| vec![x; x as usize])
            .collect();
        assert_eq!(some, vec![2, 2, 1]);
    }

    #[test]
    fn flatten_removes_one_level() {
        let flat = from_vec(vec![vec![1, 2], vec![], vec![3]])
            .flatten()
            .collect();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn flatten_of_empty_outer() {
        let flat = from_vec(Vec::<Vec<i32>>::new()).flatten().collect();
        assert_eq!(flat, Vec::<i32>::new());
    }

    #[test]
    fn flatten_is_lazy_per_pull() {
        let mut it = from_vec(vec![vec![1, 2], vec![3]]).flatten();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), Some(3));
        assert_eq!(it.next(), None);
    }
}
