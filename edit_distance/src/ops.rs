/// A single edit operation recorded while filling the backtracking tape.
///
/// `Match` only ever appears in the string-LCS variant: the general-cost
/// interface collapses matches into [`Op::Change`] at zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Drop an element of `A`.
    Del,
    /// Emit an element of `B` that has no counterpart in `A`.
    Ins,
    /// Align an element of `A` with an element of `B` at non-zero cost.
    Change,
    /// Align equal elements of `A` and `B` at zero cost.
    Match,
}
