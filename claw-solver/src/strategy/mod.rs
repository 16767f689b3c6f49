//! Interchangeable strategies for finding a machine's button presses
//!
//! Every strategy answers the same question: given the two buttons and the
//! prize of a [`Machine`], how many times must each button be pressed? The
//! caller picks a strategy through [`StrategyKind`].
//!
//! - [`LinearSystem`] solves the 2×2 system exactly with Cramer's rule. It is
//!   O(1) and stays exact for prizes around 10^13.
//! - [`IntegerProgram`] hands the problem to a MILP solver. It is simpler to
//!   trust on small inputs but does not scale to large prize offsets.

mod integer;
mod linear;

pub use integer::IntegerProgram;
pub use linear::LinearSystem;

use crate::error::SolveError;
use crate::machine::{Machine, Presses};

/// A way of solving a single claw machine.
pub trait TokenCostSolver: Send + Sync {
    /// Short human-readable name, used in logs
    fn name(&self) -> &'static str;

    /// Find the presses that land the claw on the prize.
    ///
    /// # Returns
    /// * `Ok(Presses)` - The unique non-negative integer solution
    /// * `Err(e)` with `e.is_unsolvable()` - The prize cannot be won
    /// * `Err(e)` otherwise - The strategy itself failed
    fn presses(&self, machine: &Machine) -> Result<Presses, SolveError>;

    /// Tokens needed to win the prize.
    ///
    /// Fails with [`SolveError::TokenOverflow`] if the cost does not fit in a
    /// `u64`.
    fn token_cost(&self, machine: &Machine) -> Result<u64, SolveError> {
        self.presses(machine)?
            .cost()
            .ok_or(SolveError::TokenOverflow)
    }
}

/// Selects one of the built-in strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Closed-form solve in exact integer arithmetic
    LinearSystem,
    /// Mixed-integer linear program
    IntegerProgram,
}

impl StrategyKind {
    /// The strategy this kind refers to.
    pub fn solver(self) -> &'static dyn TokenCostSolver {
        match self {
            StrategyKind::LinearSystem => &LinearSystem,
            StrategyKind::IntegerProgram => &IntegerProgram,
        }
    }
}
