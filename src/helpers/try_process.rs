use crate::Enumerable;
use anyhow::{anyhow, Result};
use std::fmt::Display;

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Fallible [`select`](Enumerable::select): each output is the selector's `Result`.
    ///
    /// Errors stay in the sequence as values; use
    /// [`collect_fail_fast`](Enumerable::collect_fail_fast) to stop at the first one.
    pub fn try_select<O, E, F>(self, selector: F) -> Enumerable<'a, std::result::Result<O, E>>
    where
        O: 'a,
        E: 'a,
        F: FnMut(T) -> std::result::Result<O, E> + 'a,
    {
        self.select(selector)
    }

    /// Fallible [`run`](Enumerable::run): stops pulling at the first `Err` and returns it.
    ///
    /// # Errors
    /// The first error returned by `action`.
    pub fn try_run<F>(self, action: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        let mut source = self.source;
        source.try_for_each(action)
    }
}

// Fail-fast terminal (keeps errors ergonomic)
impl<'a, T: 'a, E> Enumerable<'a, std::result::Result<T, E>>
where
    E: Display + 'a,
{
    /// Collect the `Ok` values in order, aborting at the first `Err`.
    ///
    /// # Errors
    /// An error carrying the failing element's position and message.
    pub fn collect_fail_fast(self) -> Result<Vec<T>> {
        let mut ok = Vec::new();
        for (position, r) in self.source.enumerate() {
            match r {
                Ok(v) => ok.push(v),
                Err(e) => return Err(anyhow!("element {position} failed: {e}")),
            }
        }
        Ok(ok)
    }
}
