//! Quantifiers, counting, materialization and side effects.

use crate::Enumerable;

impl<'a, T: 'a> Enumerable<'a, T> {
    /// `true` iff every element satisfies `predicate`; `true` for an empty sequence.
    ///
    /// Stops at the first element that fails.
    pub fn all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut source = self.source;
        source.all(|t| predicate(&t))
    }

    /// `true` iff at least one element satisfies `predicate`; `false` for an empty
    /// sequence.
    ///
    /// Stops at the first element that passes.
    pub fn any<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut source = self.source;
        source.any(|t| predicate(&t))
    }

    /// Number of elements. Consumes the whole sequence.
    #[must_use]
    pub fn count(self) -> usize {
        self.source.count()
    }

    /// Materialize the sequence into a `Vec`, preserving order.
    #[must_use]
    pub fn to_list(self) -> Vec<T> {
        let out: Vec<T> = self.source.collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(len = out.len(), "to_list materialized sequence");
        out
    }

    /// Invoke `action` once per element, in order.
    pub fn run<F>(self, action: F)
    where
        F: FnMut(T),
    {
        self.source.for_each(action);
    }
}
