use quickcheck::{quickcheck, TestResult};

use crate::source::{from_range, from_vec};
use crate::{Producer, ProducerExt};

#[test]
fn prop_map_is_elementwise_and_length_preserving() {
    fn p(xs: Vec<i64>) -> bool {
        let expected: Vec<i64> = xs.iter().map(|&x| x.wrapping_mul(3)).collect();
        let got = from_vec(xs).map(|x| x.wrapping_mul(3)).collect();
        got == expected
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_filter_yields_the_satisfying_subsequence_in_order() {
    fn p(xs: Vec<i64>) -> bool {
        let expected: Vec<i64> =
            xs.iter().cloned().filter(|x| x % 2 == 0).collect();
        let got = from_vec(xs).filter(|x| x % 2 == 0).collect();
        got == expected
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_filter_count_matches() {
    fn p(xs: Vec<i64>) -> bool {
        let expected = xs.iter().filter(|x| *x % 2 == 0).count();
        from_vec(xs).filter(|x| x % 2 == 0).count() == expected
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_take_never_exceeds_min_of_n_and_len() {
    fn p(xs: Vec<u8>, n: usize) -> bool {
        let expected = n.min(xs.len());
        from_vec(xs).take(n).count() == expected
    }
    quickcheck(p as fn(Vec<u8>, usize) -> bool);
}

#[test]
fn prop_skip_yields_exactly_the_suffix() {
    fn p(xs: Vec<u8>, n: usize) -> bool {
        let expected: Vec<u8> =
            xs.get(n.min(xs.len())..).unwrap_or(&[]).to_vec();
        from_vec(xs).skip(n).collect() == expected
    }
    quickcheck(p as fn(Vec<u8>, usize) -> bool);
}

#[test]
fn prop_chain_is_concatenation() {
    fn p(xs: Vec<u8>, ys: Vec<u8>) -> bool {
        let mut expected = xs.clone();
        expected.extend(ys.iter().cloned());
        from_vec(xs).chain(from_vec(ys)).collect() == expected
    }
    quickcheck(p as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn prop_zip_pairs_align_and_length_is_the_minimum() {
    fn p(xs: Vec<u8>, ys: Vec<u8>) -> bool {
        let n = xs.len().min(ys.len());
        let expected: Vec<(u8, u8)> = xs[..n]
            .iter()
            .cloned()
            .zip(ys[..n].iter().cloned())
            .collect();
        from_vec(xs).zip(from_vec(ys)).collect() == expected
    }
    quickcheck(p as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn prop_enumerate_always_starts_at_zero() {
    fn p(xs: Vec<u8>, skip: usize) -> TestResult {
        // However deep in a chain it sits, a fresh enumerate numbers
        // what reaches it from zero upward.
        let pairs: Vec<(usize, u8)> =
            from_vec(xs.clone()).skip(skip).enumerate().collect();
        for (i, pair) in pairs.iter().enumerate() {
            if pair.0 != i {
                return TestResult::failed();
            }
        }
        TestResult::from_bool(
            pairs.len() == xs.len().saturating_sub(skip),
        )
    }
    quickcheck(p as fn(Vec<u8>, usize) -> TestResult);
}

#[test]
fn prop_collect_respects_order_and_length() {
    fn p(xs: Vec<i64>) -> bool {
        from_vec(xs.clone()).collect() == xs
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_count_equals_len() {
    fn p(xs: Vec<u8>) -> bool {
        let n = xs.len();
        from_vec(xs).count() == n
    }
    quickcheck(p as fn(Vec<u8>) -> bool);
}

#[test]
fn prop_fused_exhaustion_is_permanent() {
    fn p(xs: Vec<u8>) -> bool {
        let mut it = from_vec(xs).fuse();
        while it.next().is_some() {}
        it.next().is_none() && it.next().is_none()
    }
    quickcheck(p as fn(Vec<u8>) -> bool);
}

#[test]
fn prop_partition_preserves_relative_order() {
    fn p(xs: Vec<i64>) -> bool {
        let (yes, no) = from_vec(xs.clone()).partition(|x| *x >= 0);
        let expected_yes: Vec<i64> =
            xs.iter().cloned().filter(|&x| x >= 0).collect();
        let expected_no: Vec<i64> =
            xs.iter().cloned().filter(|&x| x < 0).collect();
        yes == expected_yes && no == expected_no
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_reduce_agrees_with_fold() {
    fn p(xs: Vec<i64>) -> TestResult {
        if xs.is_empty() {
            return TestResult::from_bool(
                from_vec(xs).reduce(|a, b| a.wrapping_add(b)).is_none(),
            );
        }
        let expected = xs[1..]
            .iter()
            .fold(xs[0], |a, &b| a.wrapping_add(b));
        TestResult::from_bool(
            from_vec(xs).reduce(|a, b| a.wrapping_add(b)) == Some(expected),
        )
    }
    quickcheck(p as fn(Vec<i64>) -> TestResult);
}

#[test]
fn prop_two_traversals_of_equal_chains_agree() {
    fn p(xs: Vec<i64>) -> bool {
        let build = |v: Vec<i64>| {
            from_vec(v)
                .map(|x| x.wrapping_mul(2))
                .filter(|x| x % 3 != 0)
                .take(10)
                .collect()
        };
        let a: Vec<i64> = build(xs.clone());
        let b: Vec<i64> = build(xs);
        a == b
    }
    quickcheck(p as fn(Vec<i64>) -> bool);
}

#[test]
fn prop_range_agrees_with_counting() {
    fn p(start: i16, len: u8) -> bool {
        let end = start as i64 + len as i64;
        let expected: Vec<i64> = (start as i64..end).collect();
        from_range(start as i64, end).collect() == expected
    }
    quickcheck(p as fn(i16, u8) -> bool);
}
