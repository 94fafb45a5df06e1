/*!
Lazy adapters over producers.

Every type in this module is itself a [`Producer`](crate::Producer)
wrapping one or two inner producers, plus whatever private cursor state
its behavior needs (a remaining-count, a "still skipping" flag, a one
element lookahead buffer). Construction never traverses anything; an
adapter pulls from what it wraps only when its own `next` is invoked.

Adapters are created with the methods on
[`ProducerExt`](crate::ProducerExt) rather than directly; the types are
public so that chains can be named in struct fields and signatures.

Composition is by value: each adapter owns its inner producer outright,
so a chain is a straight-line tower of wrappers with the original source
at the bottom. No two adapters ever share state, and a wrapper can only
reference a producer constructed strictly before it, so cycles cannot be
built.
*/

pub use self::bound::{Skip, StepBy, Take};
pub use self::filter::{Filter, SkipWhile, TakeWhile};
pub use self::flatten::{FlatMap, Flatten};
pub use self::fuse::Fuse;
pub use self::intersperse::{Intersperse, IntersperseWith};
pub use self::join::{Chain, Zip};
pub use self::map::{Enumerate, FilterMap, Map, MapWhile};
pub use self::peekable::Peekable;
pub use self::scan::Scan;

mod bound;
mod filter;
mod flatten;
mod fuse;
mod intersperse;
mod join;
mod map;
mod peekable;
mod scan;
