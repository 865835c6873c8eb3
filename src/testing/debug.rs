//! Debug utilities for inspecting sequences during test execution.
//!
//! This module provides an extension trait that adds pass-through debugging
//! operators to [`Enumerable`]. Like every chainable operator they are lazy: a
//! debug point prints only when elements are actually pulled through it.

use crate::Enumerable;
use std::fmt::Debug;

/// Only the first few elements are printed to avoid spam.
const PRINT_LIMIT: usize = 10;

/// Extension trait for adding debug methods to [`Enumerable`].
pub trait EnumerableDebugExt<'a, T> {
    /// Print elements to stderr as they are pulled through this point.
    ///
    /// # Example
    ///
    /// ```
    /// use ironseq::*;
    /// use ironseq::testing::EnumerableDebugExt;
    ///
    /// let result = from_vec(vec![1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .select(|x| x * 2)
    ///     .debug_inspect("after select")
    ///     .to_list();
    /// assert_eq!(result, vec![2, 4, 6]);
    /// ```
    fn debug_inspect(self, label: &str) -> Enumerable<'a, T>
    where
        T: Debug;

    /// Print the number of elements that passed this point once it is exhausted.
    ///
    /// Nothing is printed if the consumer stops pulling early.
    ///
    /// # Example
    ///
    /// ```
    /// use ironseq::*;
    /// use ironseq::testing::EnumerableDebugExt;
    ///
    /// let evens = from_vec(vec![1, 2, 3, 4, 5])
    ///     .filter(|x| x % 2 == 0)
    ///     .debug_count("after filter")
    ///     .count();
    /// assert_eq!(evens, 2);
    /// ```
    fn debug_count(self, label: &str) -> Enumerable<'a, T>;
}

impl<'a, T: 'a> EnumerableDebugExt<'a, T> for Enumerable<'a, T> {
    fn debug_inspect(self, label: &str) -> Self
    where
        T: Debug,
    {
        let label = label.to_string();
        let mut index = 0usize;
        self.inspect(move |item| {
            if index < PRINT_LIMIT {
                eprintln!("[Debug: {label}] [{index}]: {item:?}");
            } else if index == PRINT_LIMIT {
                eprintln!("[Debug: {label}] ... (further elements not printed)");
            }
            index += 1;
        })
    }

    fn debug_count(self, label: &str) -> Self {
        let label = label.to_string();
        self.chain(move |mut src| {
            let mut seen = 0usize;
            let mut reported = false;
            std::iter::from_fn(move || match src.next() {
                Some(item) => {
                    seen += 1;
                    Some(item)
                }
                None => {
                    if !reported {
                        eprintln!("[Debug: {label}] Count: {seen} elements");
                        reported = true;
                    }
                    None
                }
            })
        })
    }
}
