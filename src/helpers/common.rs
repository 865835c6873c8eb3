//! Stateless chainable operators.
//!
//! Every method here consumes the receiving [`Enumerable`] and returns a new one
//! wrapping a composed producer. None of them pull from the parent when called;
//! the returned handle pulls from its parent only as its own elements are
//! requested.

use crate::producer::Reverse;
use crate::validation::require_non_negative;
use crate::{Enumerable, Result};

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Apply `selector` to every element, one output per input.
    pub fn select<O, F>(self, selector: F) -> Enumerable<'a, O>
    where
        O: 'a,
        F: FnMut(T) -> O + 'a,
    {
        self.chain(move |src| src.map(selector))
    }

    /// Keep the elements for which `predicate` holds, in source order.
    #[doc(alias = "where")]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(move |src| src.filter(predicate))
    }

    /// Drop the first `count` elements.
    ///
    /// # Errors
    /// [`QueryError::InvalidArgument`](crate::QueryError::InvalidArgument) if `count < 0`.
    pub fn skip(self, count: i64) -> Result<Self> {
        let n = require_non_negative(count, "count")?;
        Ok(self.chain(move |src| src.skip(n)))
    }

    /// Yield at most the first `count` elements.
    ///
    /// Once `count` elements have been yielded the parent is never pulled again,
    /// so `take` is safe on infinite sources.
    ///
    /// # Errors
    /// [`QueryError::InvalidArgument`](crate::QueryError::InvalidArgument) if `count < 0`.
    pub fn take(self, count: i64) -> Result<Self> {
        let n = require_non_negative(count, "count")?;
        Ok(self.chain(move |src| src.take(n)))
    }

    /// Drop leading elements while `predicate` holds.
    ///
    /// The first element that fails the predicate and everything after it are
    /// yielded; the predicate is not consulted again.
    pub fn skip_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(move |src| src.skip_while(predicate))
    }

    /// Yield leading elements while `predicate` holds, stopping for good at the
    /// first element that fails it.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(move |src| src.take_while(predicate))
    }

    /// Map every element to a nested sequence and flatten, preserving outer then
    /// inner order.
    ///
    /// ```
    /// use ironseq::*;
    ///
    /// let flat = from_vec(vec![1, 2, 3]).select_many(|x| 1..=x);
    /// assert_eq!(flat.to_list(), vec![1, 1, 2, 1, 2, 3]);
    /// ```
    pub fn select_many<U, F>(self, selector: F) -> Enumerable<'a, U::Item>
    where
        U: IntoIterator + 'a,
        U::IntoIter: 'a,
        U::Item: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.chain(move |src| src.flat_map(selector))
    }

    /// Yield the elements back to front.
    ///
    /// The whole parent is buffered when the first element is requested, not when
    /// `reverse` is called.
    pub fn reverse(self) -> Self {
        self.chain(Reverse::new)
    }

    /// Observe each element as it is pulled, without changing the sequence.
    pub fn inspect<F>(self, action: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.chain(move |src| src.inspect(action))
    }
}
