//! Board properties that alternating play can never break.
//!
//! The engine re-checks them after each move in debug builds.

mod alternating_counts;
mod exclusive_winner;

pub use alternating_counts::AlternatingCounts;
pub use exclusive_winner::ExclusiveWinner;

/// A property of `S` that every legal move preserves.
pub trait Invariant<S> {
    /// True while the property holds.
    fn holds(state: &S) -> bool;

    /// What the property says, used in violation reports.
    fn description() -> &'static str;

    /// `Some` violation if the property fails for `state`.
    fn check(state: &S) -> Option<InvariantViolation> {
        (!Self::holds(state)).then(|| InvariantViolation {
            description: Self::description(),
        })
    }
}

/// A failed invariant, displayed as its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the failed invariant.
    pub description: &'static str,
}

/// Invariants checked as a group, in declaration order.
pub trait InvariantSet<S> {
    /// Every failed invariant, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [A::check(state), B::check(state)]
            .into_iter()
            .flatten()
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type TicTacToeInvariants = (ExclusiveWinner, AlternatingCounts);
