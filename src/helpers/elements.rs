//! Element lookups: positional access, first match, unique match.
//!
//! The strict variants return [`QueryError`] when the element does not exist;
//! the `_or_default` variants return `None` instead. Ambiguity is never
//! defaulted: [`single_or_default_where`](Enumerable::single_or_default_where)
//! still fails with [`QueryError::Ambiguous`] when two elements match.

use crate::validation::{non_negative, require_non_negative};
use crate::{Enumerable, QueryError, Result};

impl<'a, T: 'a> Enumerable<'a, T> {
    /// The element at zero-based `index`.
    ///
    /// # Errors
    /// - [`QueryError::InvalidArgument`] if `index < 0`.
    /// - [`QueryError::OutOfRange`] if the sequence has at most `index` elements.
    pub fn element_at(self, index: i64) -> Result<T> {
        let index = require_non_negative(index, "index")?;
        let mut seen = 0usize;
        for value in self.source {
            if seen == index {
                return Ok(value);
            }
            seen += 1;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(index, len = seen, "element_at out of range");
        Err(QueryError::OutOfRange { index, len: seen })
    }

    /// The element at `index`, or `None` if `index` is negative or past the end.
    pub fn element_at_or_default(self, index: i64) -> Option<T> {
        let index = non_negative(index)?;
        let mut source = self.source;
        source.nth(index)
    }

    /// The first element.
    ///
    /// # Errors
    /// [`QueryError::NotFound`] if the sequence is empty.
    pub fn first(self) -> Result<T> {
        self.first_where(|_| true)
    }

    /// The first element satisfying `predicate`.
    ///
    /// Stops pulling as soon as a match is found.
    ///
    /// # Errors
    /// [`QueryError::NotFound`] if no element matches.
    pub fn first_where<P>(self, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.first_or_default_where(predicate).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("first found no matching element");
            QueryError::NotFound
        })
    }

    /// The first element, or `None` if the sequence is empty.
    pub fn first_or_default(self) -> Option<T> {
        self.first_or_default_where(|_| true)
    }

    /// The first element satisfying `predicate`, or `None`.
    pub fn first_or_default_where<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut source = self.source;
        source.find(|t| predicate(t))
    }

    /// The only element of the sequence.
    ///
    /// # Errors
    /// - [`QueryError::NotFound`] if the sequence is empty.
    /// - [`QueryError::Ambiguous`] if it has more than one element.
    pub fn single(self) -> Result<T> {
        self.single_where(|_| true)
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    /// - [`QueryError::NotFound`] if nothing matches.
    /// - [`QueryError::Ambiguous`] as soon as a second match is pulled.
    pub fn single_where<P>(self, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.single_or_default_where(predicate)?.ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!("single found no matching element");
            QueryError::NotFound
        })
    }

    /// The only element, or `None` if the sequence is empty.
    ///
    /// # Errors
    /// [`QueryError::Ambiguous`] if the sequence has more than one element.
    pub fn single_or_default(self) -> Result<Option<T>> {
        self.single_or_default_where(|_| true)
    }

    /// The only element satisfying `predicate`, or `None` if nothing matches.
    ///
    /// # Errors
    /// [`QueryError::Ambiguous`] as soon as a second match is pulled.
    pub fn single_or_default_where<P>(self, mut predicate: P) -> Result<Option<T>>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matched = None;
        for value in self.source {
            if !predicate(&value) {
                continue;
            }
            if matched.is_some() {
                #[cfg(feature = "tracing")]
                tracing::debug!("single found a second matching element");
                return Err(QueryError::Ambiguous);
            }
            matched = Some(value);
        }
        Ok(matched)
    }
}
