//! Deferred execution: building a chain pulls nothing, terminals pull only what
//! they need.

use anyhow::Result;
use ironseq::testing::*;

#[test]
fn building_a_chain_pulls_nothing() -> Result<()> {
    let counter = PullCounter::new();
    let inner = vec![1, 2, 3];
    let _chain = counter
        .wrap(1..=100)
        .select(|x| x * 2)
        .filter(|x| x % 3 == 0)
        .skip(1)?
        .take(5)?
        .skip_while(|x| *x < 10)
        .take_while(|x| *x < 1000)
        .select_many(|x| vec![x, x])
        .reverse()
        .join(&inner, |x| x % 4, |i| **i, |x, i| (*x, **i));
    assert_eq!(counter.pulls(), 0);
    Ok(())
}

#[test]
fn take_does_not_over_consume_parent() -> Result<()> {
    let counter = PullCounter::new();
    let out = counter.wrap(0u64..).take(4)?.to_list();
    assert_eq!(out, vec![0, 1, 2, 3]);
    assert_eq!(counter.pulls(), 4);

    let counter = PullCounter::new();
    assert_eq!(counter.wrap(0u64..).take(0)?.count(), 0);
    assert_eq!(counter.pulls(), 0);
    Ok(())
}

#[test]
fn elements_are_pulled_one_per_request() -> Result<()> {
    let counter = PullCounter::new();
    let mut producer = counter.wrap(1..=10).select(|x| x * x).into_iter();
    assert_eq!(counter.pulls(), 0);
    assert_eq!(producer.next(), Some(1));
    assert_eq!(counter.pulls(), 1);
    assert_eq!(producer.next(), Some(4));
    assert_eq!(counter.pulls(), 2);
    Ok(())
}

#[test]
fn reverse_buffers_on_first_pull() {
    let counter = PullCounter::new();
    let mut producer = counter.wrap(vec![1, 2, 3]).reverse().into_iter();
    assert_eq!(counter.pulls(), 0);
    assert_eq!(producer.next(), Some(3));
    assert_eq!(counter.pulls(), 3);
}

#[test]
fn first_and_any_stop_at_the_match() {
    let counter = PullCounter::new();
    assert_eq!(counter.wrap(1u32..).first_where(|x| x % 5 == 0).ok(), Some(5));
    assert_eq!(counter.pulls(), 5);

    let counter = PullCounter::new();
    assert!(counter.wrap(1u32..).any(|x| *x > 2));
    assert_eq!(counter.pulls(), 3);

    let counter = PullCounter::new();
    assert!(!counter.wrap(1u32..).all(|x| *x < 4));
    assert_eq!(counter.pulls(), 4);
}

#[test]
fn element_at_pulls_up_to_index() -> Result<()> {
    let counter = PullCounter::new();
    assert_eq!(counter.wrap(10u32..).element_at(3)?, 13);
    assert_eq!(counter.pulls(), 4);
    Ok(())
}

#[test]
fn single_fails_on_second_match_without_draining() {
    let counter = PullCounter::new();
    assert_error_kind(counter.wrap(1u32..).single_where(|x| x % 2 == 0), "Ambiguous");
    assert_eq!(counter.pulls(), 4);
}

#[test]
fn join_scans_outer_once() {
    let counter = PullCounter::new();
    let inner = vec![1, 1, 2];
    let pairs = counter
        .wrap(vec![1, 2, 3])
        .join(&inner, |o| *o, |i| **i, |o, i| (*o, **i))
        .to_list();
    assert_eq!(pairs, vec![(1, 1), (1, 1), (2, 2)]);
    assert_eq!(counter.pulls(), 3);
}

#[test]
fn select_many_pulls_outer_lazily() -> Result<()> {
    let counter = PullCounter::new();
    let out = counter.wrap(1u64..).select_many(|x| vec![x; 2]).take(3)?.to_list();
    assert_eq!(out, vec![1, 1, 2]);
    assert_eq!(counter.pulls(), 2);
    Ok(())
}
