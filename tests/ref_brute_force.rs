use std::collections::BTreeSet;

use all_lcs::{AllLcsSolver, Solver};
use proptest::prelude::*;

/// Every subsequence of `s` (as a set, so repeats collapse).
fn all_subsequences(s: &[char]) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    for mask in 0u32..(1u32 << s.len()) {
        let sub: String = s
            .iter()
            .enumerate()
            .filter(|(k, _)| mask & (1 << k) != 0)
            .map(|(_, &c)| c)
            .collect();
        out.insert(sub);
    }
    out
}

fn is_subsequence(z: &str, s: &str) -> bool {
    let mut it = s.chars();
    z.chars().all(|c| it.any(|x| x == c))
}

/// Brute-force All-LCS: all common subsequences, keep the longest.
fn brute_all_lcs(x: &str, y: &str) -> (usize, BTreeSet<String>) {
    let xs: Vec<char> = x.chars().collect();
    let common: Vec<String> = all_subsequences(&xs)
        .into_iter()
        .filter(|z| is_subsequence(z, y))
        .collect();
    let max = common.iter().map(|z| z.chars().count()).max().unwrap_or(0);
    let best = common
        .into_iter()
        .filter(|z| z.chars().count() == max)
        .collect();
    (max, best)
}

fn solved(x: &str, y: &str) -> AllLcsSolver {
    let mut solver = AllLcsSolver::new(x, y);
    solver.solve();
    solver
}

#[test]
fn brute_force_agrees_on_fixed_pairs() {
    for (x, y) in [
        ("ABCBDAB", "BDCABA"),
        ("AGCAT", "GAC"),
        ("", "ANY"),
        ("ABC", "ABC"),
        ("XMJYAUZ", "MZJAWXU"),
        ("BANANA", "ATANA"),
    ] {
        let (len, best) = brute_all_lcs(x, y);
        let solver = solved(x, y);
        assert_eq!(solver.length_of_solution(), Ok(len), "{x} / {y}");
        assert_eq!(solver.all_solutions().unwrap(), best, "{x} / {y}");
    }
}

proptest! {
    #[test]
    fn length_matches_brute_force(a in "[ACGT]{0,8}", b in "[ACGT]{0,8}") {
        let (len, _) = brute_all_lcs(&a, &b);
        prop_assert_eq!(solved(&a, &b).length_of_solution().unwrap(), len);
    }

    #[test]
    fn all_solutions_match_brute_force(a in "[AB]{0,8}", b in "[AB]{0,8}") {
        let (_, best) = brute_all_lcs(&a, &b);
        prop_assert_eq!(solved(&a, &b).all_solutions().unwrap(), best);
    }

    #[test]
    fn all_solutions_match_brute_force_wide_alphabet(a in "[ACGT]{0,7}", b in "[ACGT]{0,7}") {
        let (_, best) = brute_all_lcs(&a, &b);
        prop_assert_eq!(solved(&a, &b).all_solutions().unwrap(), best);
    }
}
