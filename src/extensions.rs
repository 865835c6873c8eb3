//! Extension points for reusable query fragments.
//!
//! - [`CompositeQuery`]: package a sequence of chainable operators into a named,
//!   reusable component applied with [`Enumerable::apply_composite`].
//!
//! A composite is still lazy: `expand` only composes producers, so applying one
//! pulls nothing from the input.

use crate::{Enumerable, Result};

/// A reusable, packaged sequence of chainable operators.
///
/// `expand` returns a [`Result`] so composites can use the size-checked operators
/// ([`skip`](Enumerable::skip), [`take`](Enumerable::take)) with `?`.
///
/// # Example: top scorers
/// ```
/// use ironseq::*;
/// use ironseq::extensions::CompositeQuery;
///
/// struct TopPassing {
///     threshold: u32,
///     limit: i64,
/// }
///
/// impl<'a> CompositeQuery<'a, (&'a str, u32), &'a str> for TopPassing {
///     fn expand(&self, input: Enumerable<'a, (&'a str, u32)>) -> Result<Enumerable<'a, &'a str>> {
///         let threshold = self.threshold;
///         input
///             .filter(move |(_, score)| *score >= threshold)
///             .select(|(name, _)| name)
///             .take(self.limit)
///     }
/// }
///
/// # fn main() -> Result<()> {
/// let scores = vec![("ann", 91), ("ben", 40), ("cy", 77), ("di", 88)];
/// let passing = from_vec(scores).apply_composite(&TopPassing { threshold: 75, limit: 2 })?;
/// assert_eq!(passing.to_list(), vec!["ann", "cy"]);
/// # Ok(())
/// # }
/// ```
pub trait CompositeQuery<'a, I, O> {
    /// Compose this fragment's operators onto `input`.
    ///
    /// # Errors
    /// Whatever the composed operators report at build time, typically
    /// [`QueryError::InvalidArgument`](crate::QueryError::InvalidArgument).
    fn expand(&self, input: Enumerable<'a, I>) -> Result<Enumerable<'a, O>>;
}

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Apply a [`CompositeQuery`] to this sequence.
    ///
    /// # Errors
    /// Propagates the composite's build-time error.
    pub fn apply_composite<O, C>(self, composite: &C) -> Result<Enumerable<'a, O>>
    where
        C: CompositeQuery<'a, T, O> + ?Sized,
    {
        composite.expand(self)
    }
}
