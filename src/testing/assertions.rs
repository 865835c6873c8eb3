//! Assertion functions for testing sequence queries.
//!
//! The `assert_yields*` helpers consume the [`Enumerable`] they are given, which
//! is usually what a test wants: drive the chain to completion and compare.

use crate::{Enumerable, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that a sequence yields exactly `expected`, in order.
///
/// # Panics
///
/// Panics if the sequence differs in length or content.
///
/// # Example
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::assert_yields;
///
/// assert_yields(from_vec(vec![3, 1, 2]).reverse(), &[2, 1, 3]);
/// ```
pub fn assert_yields<'a, T: Debug + PartialEq + 'a>(actual: Enumerable<'a, T>, expected: &[T]) {
    let actual = actual.to_list();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Sequence mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a sequence yields the same elements as `expected`, ignoring order.
///
/// # Panics
///
/// Panics if the sequences differ in length or content.
pub fn assert_yields_unordered<'a, T: Debug + Eq + Hash + 'a>(
    actual: Enumerable<'a, T>,
    expected: &[T],
) {
    let actual = actual.to_list();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Sequence length mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    let actual_set: HashSet<_> = actual.iter().collect();
    let expected_set: HashSet<_> = expected.iter().collect();
    if actual_set != expected_set {
        let missing: Vec<_> = expected_set.difference(&actual_set).collect();
        let extra: Vec<_> = actual_set.difference(&expected_set).collect();
        panic!(
            "Sequence content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}"
        );
    }
}

/// Assert that `result` failed with a [`QueryError`](crate::QueryError) of the given
/// kind (`"InvalidArgument"`, `"OutOfRange"`, `"NotFound"` or `"Ambiguous"`).
///
/// # Panics
///
/// Panics if `result` is `Ok` or carries a different error kind.
///
/// # Example
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::assert_error_kind;
///
/// assert_error_kind(Enumerable::<i32>::empty().first(), "NotFound");
/// assert_error_kind(Enumerable::repeat(1, -1), "InvalidArgument");
/// ```
pub fn assert_error_kind<T: Debug>(result: Result<T>, expected_kind: &str) {
    match result {
        Ok(value) => panic!("Expected a {expected_kind} error, got Ok({value:?})"),
        Err(e) => assert_eq!(
            e.kind(),
            expected_kind,
            "Error kind mismatch:\n  Expected: {expected_kind}\n  Actual: {e}"
        ),
    }
}

/// Assert that a grouping has exactly the `expected` keys, each with its members
/// in the given order.
///
/// # Panics
///
/// Panics on a missing key, an unexpected key, or a member list mismatch.
pub fn assert_groups_equal<K, T>(actual: &HashMap<K, Vec<T>>, expected: &[(K, Vec<T>)])
where
    K: Debug + Eq + Hash,
    T: Debug + PartialEq,
{
    for (key, members) in expected {
        match actual.get(key) {
            Some(got) => assert_eq!(
                got, members,
                "Group {key:?} mismatch:\n  Expected: {members:?}\n  Actual: {got:?}"
            ),
            None => panic!("Missing group {key:?}"),
        }
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected keys: {:?}\n  Actual keys: {:?}",
        expected.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        actual.keys().collect::<Vec<_>>()
    );
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics with the first offending element and its index.
pub fn assert_all<'a, T: Debug + 'a, F>(actual: Enumerable<'a, T>, mut predicate: F)
where
    F: FnMut(&T) -> bool,
{
    for (i, item) in actual.into_iter().enumerate() {
        assert!(predicate(&item), "Element at index {i} failed predicate: {item:?}");
    }
}
