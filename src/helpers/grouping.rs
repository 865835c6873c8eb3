//! Eager grouping by a derived key.
//!
//! [`Enumerable::group_by`] drains the whole sequence into a `HashMap<K, Vec<T>>`.
//! Iteration order across keys is unspecified; within each group elements keep
//! the order in which they were pulled from the source.
//!
//! ```
//! use ironseq::*;
//! use std::collections::HashMap;
//!
//! let groups = from_vec(vec![1, 2, 3, 4]).group_by(|x| x % 2);
//! let expected = HashMap::from([(1, vec![1, 3]), (0, vec![2, 4])]);
//! assert_eq!(groups, expected);
//! ```

use crate::Enumerable;
use std::collections::HashMap;
use std::hash::Hash;

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Partition every element under `key_selector(&element)`.
    pub fn group_by<K, F>(self, mut key_selector: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for value in self.source {
            groups.entry(key_selector(&value)).or_default().push(value);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(groups = groups.len(), "group_by materialized sequence");
        groups
    }
}
