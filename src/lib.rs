/*!
Lazy, composable, pull-based iteration.

This crate provides a small traversal protocol ([`Producer`]), a set of
lazy adapters (see the [`adapt`] module) and the terminal consumers that
drive them ([`ProducerExt`]). The whole machine is built on a single
required operation:

```ignore
fn next(&mut self) -> Option<Self::Item>;
```

Building a chain performs no traversal. Each adapter call wraps the
previous producer in a new value without touching any data; only a
terminal consumer (`collect`, `fold`, `count`, ...) pulls elements, and
every pull cascades through the wrapper chain back to the original
source.

# Example

```
use trickle::{from_vec, ProducerExt};

let doubled_evens = from_vec(vec![1, 2, 3, 4, 5])
    .filter(|x| x % 2 == 0)
    .map(|x| x * 2)
    .collect();
assert_eq!(doubled_evens, vec![4, 8]);
```

# Sources

Three kinds of source producer are provided: [`from_vec`] (finite, exact
size hint), [`from_range`]/[`from_range_inclusive`] (arithmetic
progressions over any primitive integer type) and [`from_chan`] (a
blocking, channel-backed producer; the only place in this crate where
`next` can suspend the calling thread).

# Exhaustion

After `next` returns `None`, a producer is permitted to yield `Some`
again on a later call. Code that needs the stronger guarantee should
wrap the chain in [`ProducerExt::fuse`], which pins the producer to
`None` forever after its first `None`.
*/

#![deny(missing_docs)]

pub use crate::ext::ProducerExt;
pub use crate::producer::{IntoProducer, Producer, SizeHint};
pub use crate::source::{
    from_chan, from_chars, from_range, from_range_inclusive, from_vec,
    FromChan, FromRange, FromVec, Integer,
};

pub mod adapt;
mod ext;
mod producer;
mod source;

#[cfg(test)]
mod tests;
