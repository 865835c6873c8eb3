//! Producers: the pull-based iterators an [`Enumerable`](crate::Enumerable) wraps.
//!
//! Most chainable operators compose the standard iterator adapters directly
//! (`Map`, `Filter`, `Skip`, `Take`, `SkipWhile`, `TakeWhile`, `FlatMap`). The two
//! operators whose pull behavior has no standard adapter live here:
//!
//! - [`Reverse`] buffers its parent on the *first* pull, not when the chain is
//!   built, then drains the buffer back to front.
//! - [`Join`] walks the outer producer once and opens a fresh pass over the
//!   re-iterable inner source for every outer element.

use std::iter::Fuse;

/// A boxed, type-erased producer of `T`.
///
/// Each [`Enumerable`](crate::Enumerable) owns exactly one of these; composing a chain
/// moves the parent producer into the child.
pub type Producer<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

enum ReverseState<I: Iterator> {
    Pending(I),
    Draining(Vec<I::Item>),
}

/// Yields its parent's elements back to front.
///
/// Memory is proportional to the parent's length; an infinite parent never
/// yields.
pub struct Reverse<I: Iterator> {
    state: ReverseState<I>,
}

impl<I: Iterator> Reverse<I> {
    pub(crate) fn new(parent: I) -> Self {
        Self {
            state: ReverseState::Pending(parent),
        }
    }
}

impl<I: Iterator> Iterator for Reverse<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let ReverseState::Pending(parent) = &mut self.state {
            let buffer: Vec<I::Item> = parent.by_ref().collect();
            #[cfg(feature = "tracing")]
            tracing::trace!(buffered = buffer.len(), "reverse materialized parent");
            self.state = ReverseState::Draining(buffer);
        }
        match &mut self.state {
            ReverseState::Draining(buffer) => buffer.pop(),
            ReverseState::Pending(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ReverseState::Pending(parent) => parent.size_hint(),
            ReverseState::Draining(buffer) => (buffer.len(), Some(buffer.len())),
        }
    }
}

/// Inner equi-join of an outer producer with a re-iterable inner source.
///
/// Output order is outer-major, inner-minor. The outer key is computed once per
/// outer element; the inner key is computed for every `(outer, inner)` pair.
pub struct Join<O, I, K, OK, IK, RS>
where
    O: Iterator,
    I: IntoIterator + Clone,
{
    outer: Fuse<O>,
    inner: I,
    outer_key: OK,
    inner_key: IK,
    result: RS,
    current: Option<(O::Item, K, I::IntoIter)>,
}

impl<O, I, K, OK, IK, RS> Join<O, I, K, OK, IK, RS>
where
    O: Iterator,
    I: IntoIterator + Clone,
{
    pub(crate) fn new(outer: O, inner: I, outer_key: OK, inner_key: IK, result: RS) -> Self {
        Self {
            outer: outer.fuse(),
            inner,
            outer_key,
            inner_key,
            result,
            current: None,
        }
    }
}

impl<O, I, K, R, OK, IK, RS> Iterator for Join<O, I, K, OK, IK, RS>
where
    O: Iterator,
    I: IntoIterator + Clone,
    K: PartialEq,
    OK: FnMut(&O::Item) -> K,
    IK: FnMut(&I::Item) -> K,
    RS: FnMut(&O::Item, &I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some((outer, key, pass)) = self.current.as_mut() {
                for candidate in pass.by_ref() {
                    if (self.inner_key)(&candidate) == *key {
                        return Some((self.result)(&*outer, &candidate));
                    }
                }
            }
            let Some(outer) = self.outer.next() else {
                self.current = None;
                return None;
            };
            let key = (self.outer_key)(&outer);
            self.current = Some((outer, key, self.inner.clone().into_iter()));
        }
    }
}
