//! Inner equi-join.
//!
//! [`Enumerable::join`] pairs every outer element with every inner element whose
//! derived key compares equal, emitting `result(&outer, &inner)` for each pair.
//!
//! ## Re-iterable inner source
//! The inner sequence is scanned once per outer element. It must therefore be
//! safe to iterate many times, which the signature encodes as
//! `IntoIterator + Clone`: a borrowed slice or `&Vec<U>`, a range, or any
//! cloneable iterator. A single-pass [`Enumerable`] is not `Clone` and cannot be
//! passed as `inner`; call [`to_list`](Enumerable::to_list) on it first.
//!
//! ## Ordering
//! Outer-major, inner-minor, both in source order. Outer elements without a match
//! produce nothing.
//!
//! ## Example
//! ```
//! use ironseq::*;
//!
//! let users = vec![(1, "alice"), (2, "bob"), (3, "carol")];
//! let orders = vec![(10, 1), (11, 3), (12, 1)];
//!
//! let pairs = from_vec(users)
//!     .join(
//!         &orders,
//!         |user| user.0,
//!         |order| order.1,
//!         |user, order| (user.1, order.0),
//!     )
//!     .to_list();
//! assert_eq!(pairs, vec![("alice", 10), ("alice", 12), ("carol", 11)]);
//! ```

use crate::producer::Join;
use crate::Enumerable;

impl<'a, T: 'a> Enumerable<'a, T> {
    /// Inner join with a re-iterable `inner` source on equal derived keys.
    ///
    /// Emits `result(&outer, &inner)` for every pair whose keys compare equal,
    /// outer-major and inner-minor, both in source order. `inner` is scanned once
    /// per outer element, so it must be `IntoIterator + Clone` (a slice, `&Vec`,
    /// a range or a cloneable iterator). Materialize a single-pass
    /// [`Enumerable`] with [`to_list`](Enumerable::to_list) before joining
    /// against it.
    pub fn join<I, K, R, OK, IK, RS>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: RS,
    ) -> Enumerable<'a, R>
    where
        I: IntoIterator + Clone + 'a,
        I::IntoIter: 'a,
        I::Item: 'a,
        K: PartialEq + 'a,
        R: 'a,
        OK: FnMut(&T) -> K + 'a,
        IK: FnMut(&I::Item) -> K + 'a,
        RS: FnMut(&T, &I::Item) -> R + 'a,
    {
        self.chain(move |src| {
            Join::<_, _, K, _, _, _>::new(src, inner, outer_key, inner_key, result)
        })
    }
}
