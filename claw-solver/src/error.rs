//! Error types for parsing and solving claw machines

use std::num::ParseIntError;
use thiserror::Error;

/// Error type for parsing puzzle input
///
/// Line numbers are 1-based and refer to the whole input, not the block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line does not look like `<label>: X<+|=><int>, Y<+|=><int>`
    #[error("line {line}: expected `<label>: X<+|=><int>, Y<+|=><int>`, found {text:?}")]
    InvalidFormat { line: usize, text: String },
    /// A machine block does not have exactly three lines
    #[error("machine starting at line {line} has {found} line(s), expected 3")]
    LineCount { line: usize, found: usize },
    /// A coordinate does not fit in an `i64`
    #[error("line {line}: invalid coordinate: {source}")]
    InvalidNumber {
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Error type for solving a single machine
///
/// Most variants mean "this prize cannot be won" and are skipped by the
/// aggregator; see [`SolveError::is_unsolvable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The button vectors are linearly dependent
    #[error("buttons are linearly dependent, no unique solution")]
    Singular,
    /// The unique real solution is not integral
    #[error("no integer solution")]
    Fractional,
    /// The unique solution needs a negative number of presses
    #[error("solution requires negative presses")]
    NegativePresses,
    /// The integer program has no feasible point
    #[error("integer program is infeasible")]
    Infeasible,
    /// The unique solution is integral and non-negative but exceeds `u64`
    #[error("solution needs more than {} presses of a button", u64::MAX)]
    PressesOverflow,
    /// A token count does not fit in a `u64`
    #[error("token count overflows u64")]
    TokenOverflow,
    /// Adding the prize offset overflowed
    #[error("prize offset {offset} overflows machine {index}")]
    OffsetOverflow { index: usize, offset: i64 },
    /// The MILP backend failed for a reason other than infeasibility
    #[error("MILP backend failed: {0}")]
    Backend(String),
}

impl SolveError {
    /// Whether this error only means the prize cannot be won.
    pub fn is_unsolvable(&self) -> bool {
        matches!(
            self,
            SolveError::Singular
                | SolveError::Fractional
                | SolveError::NegativePresses
                | SolveError::Infeasible
        )
    }
}

/// Error type for running a puzzle part
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
    /// The requested part number is out of range
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
}
