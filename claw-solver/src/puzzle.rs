//! The two parts of the claw contraption puzzle

use crate::aggregate::Aggregator;
use crate::error::{ParseError, PuzzleError};
use crate::machine::Machine;
use crate::parser;
use crate::strategy::StrategyKind;

/// Prize offset used by part 2
pub const PART_2_OFFSET: i64 = 10_000_000_000_000;

/// Claw contraption puzzle
///
/// - Part 1: prizes as given, solved as an integer program.
/// - Part 2: every prize moved by [`PART_2_OFFSET`], solved as a linear system.
pub struct ClawContraption;

impl ClawContraption {
    /// Number of parts this puzzle has
    pub const PARTS: u8 = 2;

    /// Parse the puzzle input.
    pub fn parse(input: &str) -> Result<Vec<Machine>, ParseError> {
        parser::parse_machines(input)
    }

    /// Default aggregator for a part.
    ///
    /// # Returns
    /// * `Ok(Aggregator)` - Offset and strategy for the part
    /// * `Err(PuzzleError::PartOutOfRange)` - `part` is not 1 or 2
    pub fn aggregator(part: u8) -> Result<Aggregator, PuzzleError> {
        match part {
            1 => Ok(Aggregator::new(StrategyKind::IntegerProgram)),
            2 => Ok(Aggregator::new(StrategyKind::LinearSystem).with_offset(PART_2_OFFSET)),
            _ => Err(PuzzleError::PartOutOfRange(part)),
        }
    }

    /// Parse and solve one part with its default aggregator.
    pub fn solve_part(input: &str, part: u8) -> Result<u64, PuzzleError> {
        let aggregator = Self::aggregator(part)?;
        let machines = Self::parse(input)?;
        Ok(aggregator.total(&machines)?.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    #[test]
    fn test_part_1_example() {
        assert_eq!(ClawContraption::solve_part(EXAMPLE, 1).unwrap(), 480);
    }

    #[test]
    fn test_part_2_example() {
        assert_eq!(
            ClawContraption::solve_part(EXAMPLE, 2).unwrap(),
            875_318_608_908
        );
    }

    #[test]
    fn test_part_out_of_range() {
        for part in [0, 3, 255] {
            assert!(matches!(
                ClawContraption::solve_part(EXAMPLE, part),
                Err(PuzzleError::PartOutOfRange(p)) if p == part
            ));
        }
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            ClawContraption::solve_part("Button A: X+1\n", 1),
            Err(PuzzleError::Parse(_))
        ));
    }
}
