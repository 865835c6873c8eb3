//! Algebraic properties checked over small ranges of inputs.

use anyhow::Result;
use ironseq::*;

const SIZES: [i64; 6] = [0, 1, 2, 3, 7, 16];

#[test]
fn range_count_and_contents() -> Result<()> {
    for start in [-3i64, 0, 5] {
        for n in SIZES {
            assert_eq!(Enumerable::range(start, n)?.count(), usize::try_from(n)?);
            let expected: Vec<i64> = (start..start + n).collect();
            assert_eq!(Enumerable::range(start, n)?.to_list(), expected);
        }
    }
    Ok(())
}

#[test]
fn repeat_yields_n_copies() -> Result<()> {
    for n in SIZES {
        let out = Enumerable::repeat('v', n)?.to_list();
        assert_eq!(out.len(), usize::try_from(n)?);
        assert!(out.iter().all(|c| *c == 'v'));
    }
    Ok(())
}

#[test]
fn take_count_is_min_of_k_and_length() -> Result<()> {
    for len in SIZES {
        for k in SIZES {
            let taken = Enumerable::range(0, len)?.take(k)?.count();
            assert_eq!(taken, usize::try_from(k.min(len))?);
        }
    }
    Ok(())
}

#[test]
fn skip_then_take_reconstructs_tail() -> Result<()> {
    for len in SIZES {
        let source: Vec<i64> = (0..len).collect();
        for k in 0..=len {
            let tail = from_vec(source.clone()).skip(k)?.take(len - k)?.to_list();
            assert_eq!(tail, source[usize::try_from(k)?..].to_vec());
        }
    }
    Ok(())
}

#[test]
fn select_is_elementwise() -> Result<()> {
    let f = |x: i64| x * x - 1;
    for n in SIZES {
        let mapped = Enumerable::range(-4, n)?.select(f).to_list();
        let expected: Vec<i64> = Enumerable::range(-4, n)?.to_list().into_iter().map(f).collect();
        assert_eq!(mapped, expected);
    }
    Ok(())
}

#[test]
fn filter_then_all_holds_and_never_grows() -> Result<()> {
    let p = |x: &i64| x % 3 == 1;
    for n in SIZES {
        assert!(Enumerable::range(0, n)?.filter(p).all(p));
        assert!(Enumerable::range(0, n)?.filter(p).count() <= Enumerable::range(0, n)?.count());
    }
    Ok(())
}

#[test]
fn double_reverse_is_identity() -> Result<()> {
    for n in SIZES {
        let twice = Enumerable::range(10, n)?.reverse().reverse().to_list();
        assert_eq!(twice, Enumerable::range(10, n)?.to_list());
    }
    Ok(())
}

#[test]
fn select_many_matches_nested_select() -> Result<()> {
    for n in SIZES {
        let flat = Enumerable::range(1, n)?.select_many(|x| 1..=x).to_list();
        let nested: Vec<i64> = Enumerable::range(1, n)?
            .select(|x| (1..=x).collect::<Vec<_>>())
            .to_list()
            .concat();
        assert_eq!(flat, nested);
    }
    Ok(())
}
