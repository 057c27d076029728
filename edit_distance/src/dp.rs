use log::trace;

/// Computes the edit distance between two indexed sequences of lengths `m`
/// and `n` under caller-supplied, non-negative costs.
///
/// `cost_change(i, j)` is the cost of aligning `A[i]` with `B[j]`, `cost_del(i)`
/// the cost of dropping `A[i]`, and `cost_ins(j)` the cost of emitting `B[j]`.
/// Runs in `O(mn)` time and `O(n)` space: only a single rolling row is kept.
pub fn distance_general(
    m: usize,
    n: usize,
    cost_change: impl Fn(usize, usize) -> i64,
    cost_del: impl Fn(usize) -> i64,
    cost_ins: impl Fn(usize) -> i64,
) -> i64 {
    let mut row = vec![0i64; n + 1];
    for j in 1..=n {
        row[j] = row[j - 1] + cost_ins(j - 1);
    }

    for i in 0..m {
        trace!("distance_general: processing row {i}");
        // `prev` holds row[j - 1] as it was before this row overwrote it,
        // i.e. the diagonal predecessor f(i, j - 1).
        let mut prev = row[0];
        row[0] += cost_del(i);

        for j in 1..=n {
            let del = row[j] + cost_del(i);
            let ins = row[j - 1] + cost_ins(j - 1);
            let change = prev + cost_change(i, j - 1);

            let mut best = del;
            if ins < best {
                best = ins;
            }
            if change < best {
                best = change;
            }

            prev = row[j];
            row[j] = best;
        }
    }

    row[n]
}

/// Edit distance between two strings under unit costs (1 for insert/delete/
/// change, 0 for match), measured in Unicode code points.
pub fn distance_string(a: &str, b: &str) -> i64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_general(
        a.len(),
        b.len(),
        |i, j| if a[i] == b[j] { 0 } else { 1 },
        |_| 1,
        |_| 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(distance_string("abcde", "abcde"), 0);
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(distance_string("abcde", ""), 5);
        assert_eq!(distance_string("", "abcde"), 5);
        assert_eq!(distance_string("", ""), 0);
    }

    #[test]
    fn unit_cost_scenarios() {
        assert_eq!(distance_string("abcd", "bcde"), 2);
        assert_eq!(distance_string("abcde", "dabce"), 2);
        assert_eq!(distance_string("abcde", "abfde"), 1);
        assert_eq!(distance_string("abcde", "bfdeg"), 3);
    }

    #[test]
    fn symmetric_under_unit_costs() {
        let pairs = [("abcd", "bcde"), ("kitten", "sitting"), ("", "xyz")];
        for (a, b) in pairs {
            assert_eq!(distance_string(a, b), distance_string(b, a));
        }
    }

    #[test]
    fn triangle_inequality_holds() {
        let a = "abcdef";
        let b = "xbcdey";
        let c = "xyz";
        assert!(distance_string(a, c) <= distance_string(a, b) + distance_string(b, c));
    }

    #[test]
    fn general_cost_scenarios() {
        let cost_change = |i: usize, j: usize, a: &[char], b: &[char]| -> i64 {
            if a[i] == b[j] { 0 } else { 100 }
        };
        let cost_del = |i: usize| -> i64 { 100 + i as i64 };
        let cost_ins = |j: usize| -> i64 { 110 + j as i64 };

        let cases: [(&str, &str, i64); 3] = [
            ("abcd", "bcde", 213),
            ("abcde", "", 510),
            ("", "abcde", 560),
        ];
        for (a, b, expected) in cases {
            let av: Vec<char> = a.chars().collect();
            let bv: Vec<char> = b.chars().collect();
            let got = distance_general(
                av.len(),
                bv.len(),
                |i, j| cost_change(i, j, &av, &bv),
                cost_del,
                cost_ins,
            );
            assert_eq!(got, expected, "a={a:?} b={b:?}");
        }
    }
}
