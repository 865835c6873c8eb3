//! Argument validation shared by factories, chainable and terminal operators.
//!
//! Size-like arguments (`count`, `index`) are accepted as signed integers so that
//! negative values can be rejected with a [`QueryError::InvalidArgument`] instead of
//! being silently wrapped. Each helper converts a validated value to the unsigned
//! type the underlying iterator adapters expect.

use crate::error::{QueryError, Result};

/// Require `value >= 0` and convert it to `usize`.
///
/// # Errors
/// Returns [`QueryError::InvalidArgument`] naming `name` if `value` is negative or
/// does not fit in `usize` on this platform.
pub fn require_non_negative(value: i64, name: &'static str) -> Result<usize> {
    if value < 0 {
        return Err(QueryError::invalid_argument(
            name,
            format!("must be >= 0, got {value}"),
        ));
    }
    usize::try_from(value).map_err(|_| {
        QueryError::invalid_argument(name, format!("{value} does not fit in usize"))
    })
}

/// Like [`require_non_negative`], but maps a rejected value to `None`.
///
/// Used by the `_or_default` lookups, which never fail on a bad index.
#[must_use]
pub fn non_negative(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

/// Validate a `(start, count)` pair describing `start..start + count`.
///
/// # Errors
/// Returns [`QueryError::InvalidArgument`] if `count` is negative or the end of
/// the range overflows `i64`.
pub fn require_range(start: i64, count: i64) -> Result<std::ops::Range<i64>> {
    require_non_negative(count, "count")?;
    let end = start.checked_add(count).ok_or_else(|| {
        QueryError::invalid_argument("count", format!("{start} + {count} overflows i64"))
    })?;
    Ok(start..end)
}
