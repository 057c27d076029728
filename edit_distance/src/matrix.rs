use log::trace;
use ndarray::Array2;

use crate::alignment::Alignment;
use crate::ops::Op;

/// One cell of the backtracking tape: the optimal cost to reach this cell,
/// and the operation that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    cost: i64,
    op: Op,
}

/// Fills the `(m+1) x (n+1)` dense tape for the general-cost interface.
///
/// Tie-breaking between equal-cost candidates favours `Del` over `Ins` over
/// `Change`, matching the classical Wagner-Fischer convention.
fn build_matrix_general(
    m: usize,
    n: usize,
    cost_change: impl Fn(usize, usize) -> i64,
    cost_del: impl Fn(usize) -> i64,
    cost_ins: impl Fn(usize) -> i64,
) -> Array2<Entry> {
    let mut matrix = Array2::from_elem(
        (m + 1, n + 1),
        Entry {
            cost: 0,
            op: Op::Del,
        },
    );

    matrix[[0, 0]] = Entry {
        cost: 0,
        op: Op::Del,
    };
    for j in 1..=n {
        matrix[[0, j]] = Entry {
            cost: matrix[[0, j - 1]].cost + cost_ins(j - 1),
            op: Op::Ins,
        };
    }
    for i in 1..=m {
        matrix[[i, 0]] = Entry {
            cost: matrix[[i - 1, 0]].cost + cost_del(i - 1),
            op: Op::Del,
        };
    }

    for i in 1..=m {
        trace!("build_matrix_general: filling row {i}");
        for j in 1..=n {
            let del = matrix[[i - 1, j]].cost + cost_del(i - 1);
            let ins = matrix[[i, j - 1]].cost + cost_ins(j - 1);
            let change = matrix[[i - 1, j - 1]].cost + cost_change(i - 1, j - 1);

            let mut best = Entry {
                cost: del,
                op: Op::Del,
            };
            if ins < best.cost {
                best = Entry {
                    cost: ins,
                    op: Op::Ins,
                };
            }
            if change < best.cost {
                best = Entry {
                    cost: change,
                    op: Op::Change,
                };
            }

            matrix[[i, j]] = best;
        }
    }

    matrix
}

/// Walks the tape from `(m, n)` back to `(0, 0)`, filling `mat_a`/`mat_b` and
/// (if `collect_matches` is set) the list of `Match`-tagged `A`-indices.
fn backtrack(
    matrix: &Array2<Entry>,
    m: usize,
    n: usize,
    collect_matches: bool,
) -> (Vec<Option<usize>>, Vec<Option<usize>>, Vec<usize>) {
    let mut mat_a = vec![None; m];
    let mut mat_b = vec![None; n];
    let mut match_positions = Vec::new();

    let mut i = m;
    let mut j = n;
    while i > 0 || j > 0 {
        let op = if i == 0 {
            Op::Ins
        } else if j == 0 {
            Op::Del
        } else {
            matrix[[i, j]].op
        };

        match op {
            Op::Del => {
                i -= 1;
                mat_a[i] = None;
            }
            Op::Ins => {
                j -= 1;
                mat_b[j] = None;
            }
            Op::Change | Op::Match => {
                i -= 1;
                j -= 1;
                mat_a[i] = Some(j);
                mat_b[j] = Some(i);
                if collect_matches && op == Op::Match {
                    match_positions.push(i);
                }
            }
        }
    }

    (mat_a, mat_b, match_positions)
}

/// Computes the edit distance between two indexed sequences together with a
/// full alignment: for every element of `A` (resp. `B`) that survives,
/// `mat_a[i]`/`mat_b[j]` records its counterpart. Runs in `O(mn)` time and
/// space, since the whole backtracking tape is retained.
pub fn align_general(
    m: usize,
    n: usize,
    cost_change: impl Fn(usize, usize) -> i64,
    cost_del: impl Fn(usize) -> i64,
    cost_ins: impl Fn(usize) -> i64,
) -> Alignment {
    let matrix = build_matrix_general(m, n, cost_change, cost_del, cost_ins);
    let distance = matrix[[m, n]].cost;
    let (mat_a, mat_b, _) = backtrack(&matrix, m, n, false);
    Alignment {
        distance,
        mat_a,
        mat_b,
    }
}

/// Edit distance between two strings under unit costs, together with their
/// longest common subsequence. Matches in the alignment are tagged
/// separately from substitutions so the LCS can be recovered.
pub fn distance_string_full(a: &str, b: &str) -> (i64, String) {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    let mut matrix = build_matrix_general(
        m,
        n,
        |i, j| if a[i] == b[j] { 0 } else { 1 },
        |_| 1,
        |_| 1,
    );
    // Under unit costs the diagonal predecessor is never costlier than the
    // del/ins predecessors when the characters match (it ties at worst), so
    // promoting unconditionally here never contradicts the cost already
    // settled in `matrix[[i, j]].cost` — it only resolves ties in MATCH's
    // favour, same as the spec's backtracking rule.
    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                matrix[[i, j]].op = Op::Match;
            }
        }
    }

    let distance = matrix[[m, n]].cost;
    let (_, _, match_positions) = backtrack(&matrix, m, n, true);

    let matched: Vec<bool> = {
        let mut flags = vec![false; m];
        for idx in match_positions {
            flags[idx] = true;
        }
        flags
    };
    let lcs: String = a
        .iter()
        .zip(matched)
        .filter_map(|(c, is_match)| is_match.then_some(*c))
        .collect();

    (distance, lcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_full_scenarios() {
        let cases = [
            ("abcd", "bcde", 2, "bcd"),
            ("abcde", "", 5, ""),
            ("", "", 0, ""),
            ("abcde", "dabce", 2, "abce"),
            ("abcde", "abfde", 1, "abde"),
            ("abcde", "bfdeg", 3, "bde"),
        ];
        for (a, b, expected_distance, expected_lcs) in cases {
            let (distance, lcs) = distance_string_full(a, b);
            assert_eq!(distance, expected_distance, "a={a:?} b={b:?}");
            assert_eq!(lcs, expected_lcs, "a={a:?} b={b:?}");
        }
    }

    #[test]
    fn match_wins_ties_against_del_and_ins() {
        // At cell (1, 2) of "a" vs "aa", ins and the diagonal match both cost
        // 1; MATCH must win the tie so the LCS comes out as "aa", not "a".
        let (distance, lcs) = distance_string_full("a", "aa");
        assert_eq!(distance, 1);
        assert_eq!(lcs, "a");

        let (distance, lcs) = distance_string_full("aba", "baa");
        assert_eq!(distance, 2);
        assert_eq!(lcs, "aa");
    }

    #[test]
    fn general_alignment_scenarios() {
        let cost_change = |i: usize, j: usize, a: &[char], b: &[char]| -> i64 {
            if a[i] == b[j] { 0 } else { 100 }
        };
        let cost_del = |i: usize| -> i64 { 100 + i as i64 };
        let cost_ins = |j: usize| -> i64 { 110 + j as i64 };

        let run = |a: &str, b: &str| {
            let av: Vec<char> = a.chars().collect();
            let bv: Vec<char> = b.chars().collect();
            align_general(
                av.len(),
                bv.len(),
                |i, j| cost_change(i, j, &av, &bv),
                cost_del,
                cost_ins,
            )
        };

        let a = run("abcd", "bcde");
        assert_eq!(a.distance, 213);
        assert_eq!(
            a.mat_a,
            vec![None, Some(0), Some(1), Some(2)]
        );
        assert_eq!(
            a.mat_b,
            vec![Some(1), Some(2), Some(3), None]
        );

        let a = run("abcde", "abfde");
        assert_eq!(a.distance, 100);
        assert_eq!(
            a.mat_a,
            vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
        assert_eq!(
            a.mat_b,
            vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn general_alignment_with_insertion_at_front() {
        let cost_change = |i: usize, j: usize, a: &[char], b: &[char]| -> i64 {
            if a[i] == b[j] { 0 } else { 100 }
        };
        let cost_del = |i: usize| -> i64 { 100 + i as i64 };
        let cost_ins = |j: usize| -> i64 { 110 + j as i64 };

        let a: Vec<char> = "abcde".chars().collect();
        let b: Vec<char> = "dabce".chars().collect();
        let align = align_general(
            a.len(),
            b.len(),
            |i, j| cost_change(i, j, &a, &b),
            cost_del,
            cost_ins,
        );

        assert_eq!(align.distance, 213);
        assert_eq!(
            align.mat_a,
            vec![Some(1), Some(2), Some(3), None, Some(4)]
        );
        assert_eq!(
            align.mat_b,
            vec![None, Some(0), Some(1), Some(2), Some(4)]
        );
    }

    #[test]
    fn alignment_is_self_consistent() {
        let align = align_general(5, 5, |i, j| if i == j { 0 } else { 7 }, |_| 3, |_| 4);
        assert!(align.is_consistent());
    }
}
