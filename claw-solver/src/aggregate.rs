//! Summing token costs over every machine of an input

use rayon::prelude::*;
use tracing::debug;

use crate::error::SolveError;
use crate::machine::Machine;
use crate::strategy::StrategyKind;

/// How machines are evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Evaluation {
    /// One machine after another, in input order (default)
    #[default]
    Sequential,
    /// Machines spread over the current rayon thread pool
    Parallel,
}

/// Outcome of summing over a set of machines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Tokens needed to win every winnable prize
    pub tokens: u64,
    /// Machines whose prize can be won
    pub solved: usize,
    /// Machines skipped because their prize cannot be won
    pub unsolvable: usize,
}

impl Tally {
    /// Total number of machines counted.
    pub fn machines(&self) -> usize {
        self.solved + self.unsolvable
    }

    fn merge(self, other: Tally) -> Result<Tally, SolveError> {
        Ok(Tally {
            tokens: self
                .tokens
                .checked_add(other.tokens)
                .ok_or(SolveError::TokenOverflow)?,
            solved: self.solved + other.solved,
            unsolvable: self.unsolvable + other.unsolvable,
        })
    }
}

/// Applies a prize offset and a strategy to every machine and sums the costs
///
/// Machines that cannot be won count as zero. Any other solve error aborts
/// the whole sum.
///
/// # Example
///
/// ```
/// use claw_solver::{Aggregator, Machine, StrategyKind};
///
/// let machines = [Machine::new((94, 34), (22, 67), (8400, 5400))];
/// let tally = Aggregator::new(StrategyKind::LinearSystem).total(&machines).unwrap();
/// assert_eq!(tally.tokens, 280);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregator {
    strategy: StrategyKind,
    offset: i64,
    evaluation: Evaluation,
}

impl Aggregator {
    /// Sequential aggregator with no prize offset
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            offset: 0,
            evaluation: Evaluation::Sequential,
        }
    }

    /// Move every prize by `offset` on both axes before solving
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    /// Sum the token costs of all winnable machines.
    pub fn total(&self, machines: &[Machine]) -> Result<Tally, SolveError> {
        match self.evaluation {
            Evaluation::Sequential => machines
                .iter()
                .enumerate()
                .map(|(index, machine)| self.evaluate(index, machine))
                .try_fold(Tally::default(), |acc, tally| {
                    tally.and_then(|tally| acc.merge(tally))
                }),
            Evaluation::Parallel => machines
                .par_iter()
                .enumerate()
                .map(|(index, machine)| self.evaluate(index, machine))
                .try_reduce(Tally::default, Tally::merge),
        }
    }

    /// Tally for a single machine.
    fn evaluate(&self, index: usize, machine: &Machine) -> Result<Tally, SolveError> {
        let shifted = machine
            .with_offset(self.offset)
            .ok_or(SolveError::OffsetOverflow {
                index,
                offset: self.offset,
            })?;
        let solver = self.strategy.solver();

        match solver.presses(&shifted) {
            Ok(presses) => {
                let cost = presses.cost().ok_or(SolveError::TokenOverflow)?;
                debug!(
                    index,
                    strategy = solver.name(),
                    a = presses.a,
                    b = presses.b,
                    cost,
                    "prize won"
                );
                Ok(Tally {
                    tokens: cost,
                    solved: 1,
                    unsolvable: 0,
                })
            }
            Err(e) if e.is_unsolvable() => {
                debug!(index, strategy = solver.name(), reason = %e, "prize skipped");
                Ok(Tally {
                    tokens: 0,
                    solved: 0,
                    unsolvable: 1,
                })
            }
            Err(e) => Err(e),
        }
    }
}
