use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn range_yields_consecutive_integers() -> Result<()> {
    assert_yields(Enumerable::range(1, 5)?, &[1, 2, 3, 4, 5]);
    assert_yields(Enumerable::range(-2, 3)?, &[-2, -1, 0]);
    Ok(())
}

#[test]
fn range_with_zero_count_is_empty() -> Result<()> {
    assert_eq!(Enumerable::range(42, 0)?.count(), 0);
    Ok(())
}

#[test]
fn range_rejects_negative_count() {
    assert_error_kind(Enumerable::range(0, -1), "InvalidArgument");
}

#[test]
fn range_rejects_overflowing_end() {
    assert_error_kind(Enumerable::range(i64::MAX, 2), "InvalidArgument");
}

#[test]
fn range_reaching_i64_max_is_accepted() -> Result<()> {
    let last = Enumerable::range(i64::MAX - 1, 1)?.single()?;
    assert_eq!(last, i64::MAX - 1);
    Ok(())
}

#[test]
fn repeat_yields_value_count_times() -> Result<()> {
    assert_yields(Enumerable::repeat(7, 3)?, &[7, 7, 7]);
    assert_yields(Enumerable::repeat("x".to_string(), 2)?, &["x".to_string(), "x".to_string()]);
    Ok(())
}

#[test]
fn repeat_zero_is_empty_and_negative_fails() -> Result<()> {
    assert_eq!(Enumerable::repeat('a', 0)?.count(), 0);

    let err = Enumerable::repeat('a', -1).unwrap_err();
    assert_eq!(
        err,
        QueryError::InvalidArgument {
            name: "count",
            reason: "must be >= 0, got -1".to_string(),
        }
    );
    Ok(())
}

#[test]
fn empty_has_no_elements_for_any_terminal() {
    assert!(Enumerable::<i32>::empty().to_list().is_empty());
    assert_eq!(Enumerable::<i32>::empty().count(), 0);
    assert!(!Enumerable::<i32>::empty().any(|_| true));
    assert!(Enumerable::<i32>::empty().all(|_| false));
    assert_eq!(Enumerable::<i32>::empty().first_or_default(), None);
}

#[test]
fn from_vec_and_from_iter_wrap_existing_data() {
    assert_yields(from_vec(vec!["a", "b"]), &["a", "b"]);

    let words = ["x", "y", "z"];
    assert_yields(from_iter(&words), &[&"x", &"y", &"z"]);
    assert_yields(from_iter(words), &["x", "y", "z"]);
}

#[test]
fn collect_and_from_vec_conversions() {
    let collected: Enumerable<'_, u8> = (1..=3).collect();
    assert_yields(collected, &[1, 2, 3]);

    let converted: Enumerable<'_, u8> = vec![4, 5].into();
    assert_yields(converted, &[4, 5]);
}

#[test]
fn collect_is_eager_while_from_iter_stays_lazy() -> Result<()> {
    let eager = PullCounter::new();
    let collected: Enumerable<'_, i32> = eager.wrap(1..=3).into_iter().collect();
    assert_eq!(eager.pulls(), 3);
    assert_yields(collected.take(1)?, &[1]);
    assert_eq!(eager.pulls(), 3);

    let lazy = PullCounter::new();
    let wrapped = from_iter(lazy.wrap(1..=3));
    assert_eq!(lazy.pulls(), 0);
    assert_yields(wrapped.take(1)?, &[1]);
    assert_eq!(lazy.pulls(), 1);
    Ok(())
}

#[test]
fn enumerable_hands_its_producer_to_for_loops() {
    let mut seen = Vec::new();
    for value in from_vec(vec![3, 1, 2]) {
        seen.push(value);
    }
    assert_eq!(seen, vec![3, 1, 2]);

    let mut producer = from_vec(vec![10, 20]).into_iter();
    assert_eq!(producer.next(), Some(10));
    assert_eq!(producer.next(), Some(20));
    assert_eq!(producer.next(), None);
}

#[test]
fn infinite_source_is_usable_when_bounded() -> Result<()> {
    let first_multiples = Enumerable::new(1u64..)
        .filter(|n| n % 7 == 0)
        .take(3)?
        .to_list();
    assert_eq!(first_multiples, vec![7, 14, 21]);
    Ok(())
}
