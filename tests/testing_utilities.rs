//! Integration tests demonstrating the testing utilities.

use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn test_basic_query_with_assertions() {
    assert_yields(from_vec(vec![1, 2, 3]).select(|x| x * 2), &[2, 4, 6]);
}

#[test]
fn test_unordered_comparison() {
    let groups = from_vec(vec![3, 1, 2]).group_by(|x| *x);
    assert_yields_unordered(from_iter(groups.into_keys()), &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "Sequence mismatch at index 1")]
fn test_assert_yields_reports_first_mismatch() {
    assert_yields(from_vec(vec![1, 2, 3]), &[1, 5, 3]);
}

#[test]
#[should_panic(expected = "Error kind mismatch")]
fn test_assert_error_kind_rejects_wrong_kind() {
    assert_error_kind(from_vec(vec![1, 2]).single(), "NotFound");
}

#[test]
#[should_panic(expected = "Missing group")]
fn test_assert_groups_equal_detects_missing_key() {
    let groups = from_vec(vec![1, 2]).group_by(|x| x % 2);
    assert_groups_equal(&groups, &[(1, vec![1]), (7, vec![2])]);
}

#[test]
fn test_assert_all() -> Result<()> {
    assert_all(Enumerable::range(0, 50)?.select(|x| x * 2), |x| x % 2 == 0);
    Ok(())
}

#[test]
fn test_debug_helpers_pass_elements_through() -> Result<()> {
    let out = Enumerable::range(0, 15)?
        .debug_inspect("source")
        .filter(|x| x % 5 == 0)
        .debug_count("after filter")
        .to_list();
    assert_eq!(out, vec![0, 5, 10]);
    Ok(())
}
