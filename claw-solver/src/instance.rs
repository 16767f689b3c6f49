//! Parsed puzzle input with timing information

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::aggregate::{Aggregator, Tally};
use crate::error::{ParseError, SolveError};
use crate::machine::Machine;
use crate::parser;

/// Result from solving a part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Tokens and machine counts
    pub tally: Tally,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Machines parsed from one input, ready to be solved any number of times
///
/// # Example
///
/// ```
/// use claw_solver::{ClawContraption, PuzzleInstance};
///
/// let input = "Button A: X+94, Y+34\nButton B: X+22, Y+67\nPrize: X=8400, Y=5400\n";
/// let instance = PuzzleInstance::new(input).unwrap();
/// let result = instance.solve(&ClawContraption::aggregator(1).unwrap()).unwrap();
/// assert_eq!(result.tally.tokens, 280);
/// println!("parse took {}, solve took {}", instance.parse_duration(), result.duration());
/// ```
pub struct PuzzleInstance {
    machines: Vec<Machine>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl PuzzleInstance {
    /// Parse `input`, recording parse timing.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let machines = parser::parse_machines(input)?;
        let parse_end = Utc::now();
        debug!(machines = machines.len(), "parsed input");

        Ok(Self {
            machines,
            parse_start,
            parse_end,
        })
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Solve with `aggregator`, recording solve timing.
    pub fn solve(&self, aggregator: &Aggregator) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let tally = aggregator.total(&self.machines)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            tally,
            solve_start,
            solve_end,
        })
    }

    pub fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    pub fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    /// Convenience: get parse duration as TimeDelta
    pub fn parse_duration(&self) -> TimeDelta {
        self.parse_end - self.parse_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_timings_are_ordered() {
        let instance = PuzzleInstance::new("A: X+2, Y+1\nB: X+1, Y+2\nP: X=3, Y=3\n").unwrap();
        assert!(instance.parse_start() <= instance.parse_end());
        assert!(instance.parse_duration() >= TimeDelta::zero());

        let result = instance
            .solve(&Aggregator::new(StrategyKind::LinearSystem))
            .unwrap();
        assert!(result.duration() >= TimeDelta::zero());
        assert_eq!(result.tally.tokens, 4);
    }

    #[test]
    fn test_solving_twice_is_stable() {
        let instance = PuzzleInstance::new("A: X+2, Y+1\nB: X+1, Y+2\nP: X=3, Y=3\n").unwrap();
        let aggregator = Aggregator::new(StrategyKind::IntegerProgram);
        let first = instance.solve(&aggregator).unwrap();
        let second = instance.solve(&aggregator).unwrap();
        assert_eq!(first.tally, second.tally);
    }
}
