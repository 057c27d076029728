/// The result of [`crate::align_general`]: the optimal cost plus the
/// position-level correspondence between `A` and `B`.
///
/// `mat_a[i] == Some(j)` and `mat_b[j] == Some(i)` iff `A[i]` was aligned
/// (changed or matched) with `B[j]`; `None` marks a deleted (resp. inserted)
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub distance: i64,
    pub mat_a: Vec<Option<usize>>,
    pub mat_b: Vec<Option<usize>>,
}

impl Alignment {
    /// Asserts the invariant that the two mappings agree with each other.
    ///
    /// Exposed for callers that want to sanity-check results in tests; not
    /// used internally on the hot path.
    pub fn is_consistent(&self) -> bool {
        self.mat_a.iter().enumerate().all(|(i, &j)| match j {
            Some(j) => self.mat_b.get(j) == Some(&Some(i)),
            None => true,
        })
    }
}
