//! Factory constructors for [`Enumerable`].
//!
//! These helpers create root producers from counts, repeated values, nothing at
//! all, or native Rust data (`Vec<T>` and any `IntoIterator`). Building a source
//! never pulls from it; `from_iter(1..)` is a valid, infinite sequence.
//!
//! ### Overview
//! - [`Enumerable::range`] -- `count` consecutive `i64`s starting at `start`.
//! - [`Enumerable::repeat`] -- one value, `count` times.
//! - [`Enumerable::empty`] -- zero elements.
//! - [`from_vec`] / [`from_iter`] -- wrap existing data.
//!
//! ### Example
//! ```
//! use ironseq::*;
//!
//! # fn main() -> Result<()> {
//! assert_eq!(Enumerable::range(1, 5)?.to_list(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(Enumerable::repeat("x", 3)?.to_list(), vec!["x", "x", "x"]);
//! assert_eq!(Enumerable::<u8>::empty().count(), 0);
//! # Ok(())
//! # }
//! ```

use crate::validation::{require_non_negative, require_range};
use crate::{Enumerable, Result};

impl Enumerable<'static, i64> {
    /// Produce `count` consecutive integers beginning at `start`.
    ///
    /// # Errors
    /// [`QueryError::InvalidArgument`](crate::QueryError::InvalidArgument) if
    /// `count < 0` or `start + count` overflows `i64`.
    pub fn range(start: i64, count: i64) -> Result<Self> {
        Ok(Self::new(require_range(start, count)?))
    }
}

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Produce `value` exactly `count` times.
    ///
    /// # Errors
    /// [`QueryError::InvalidArgument`](crate::QueryError::InvalidArgument) if `count < 0`.
    pub fn repeat(value: T, count: i64) -> Result<Self>
    where
        T: Clone,
    {
        let n = require_non_negative(count, "count")?;
        Ok(Self::new(std::iter::repeat_n(value, n)))
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

/// Create an [`Enumerable<T>`] from a pre-existing [`Vec<T>`].
///
/// ### Example
/// ```
/// use ironseq::*;
///
/// let e = from_vec(vec![10, 20, 30]);
/// assert_eq!(e.to_list(), vec![10, 20, 30]);
/// ```
pub fn from_vec<'a, T: 'a>(data: Vec<T>) -> Enumerable<'a, T> {
    Enumerable::new(data)
}

/// Create an [`Enumerable<T>`] from any iterator or collection implementing [`IntoIterator`].
///
/// Unlike [`FromIterator`], this does not collect: the source is pulled only when
/// a terminal operator runs, so infinite iterators are fine.
///
/// ### Example
/// ```
/// use ironseq::*;
///
/// # fn main() -> Result<()> {
/// let evens = from_iter(0u32..).filter(|n| n % 2 == 0).take(4)?;
/// assert_eq!(evens.to_list(), vec![0, 2, 4, 6]);
///
/// let words = ["x", "y", "z"];
/// assert_eq!(from_iter(&words).count(), 3);
/// # Ok(())
/// # }
/// ```
pub fn from_iter<'a, I>(iter: I) -> Enumerable<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    Enumerable::new(iter)
}
