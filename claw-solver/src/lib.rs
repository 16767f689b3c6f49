//! Claw Contraption Solver Library
//!
//! Finds the cheapest way to win the prizes of a list of claw machines. Each
//! machine has two buttons that move the claw by a fixed vector and a prize at
//! some position. Pressing A costs 3 tokens, pressing B costs 1 token; the
//! claw must land exactly on the prize.
//!
//! # Overview
//!
//! This library provides:
//! - A parser for the puzzle text format
//! - Two interchangeable strategies behind the [`TokenCostSolver`] trait
//! - An [`Aggregator`] that sums costs over all machines, optionally offsetting
//!   every prize and evaluating machines in parallel
//! - A [`PuzzleInstance`] that records parse and solve timings
//!
//! # Quick Example
//!
//! ```
//! use claw_solver::{Aggregator, ClawContraption, StrategyKind};
//!
//! let input = "\
//! Button A: X+94, Y+34
//! Button B: X+22, Y+67
//! Prize: X=8400, Y=5400
//!
//! Button A: X+26, Y+66
//! Button B: X+67, Y+21
//! Prize: X=12748, Y=12176
//! ";
//!
//! let machines = ClawContraption::parse(input).unwrap();
//! let tally = Aggregator::new(StrategyKind::LinearSystem)
//!     .total(&machines)
//!     .unwrap();
//! assert_eq!(tally.tokens, 280);
//! assert_eq!(tally.unsolvable, 1);
//! ```
//!
//! # Strategies
//!
//! Two buttons and a prize form a 2×2 linear system. When the buttons are
//! linearly independent it has exactly one real solution, and the prize can
//! be won iff that solution is a pair of non-negative integers.
//!
//! - [`LinearSystem`] solves the system in exact integer arithmetic.
//! - [`IntegerProgram`] minimises the token cost with a MILP solver.
//!
//! Both reject machines with dependent buttons ([`SolveError::Singular`])
//! instead of picking one of infinitely many answers.

mod aggregate;
mod error;
mod instance;
mod machine;
mod parser;
mod puzzle;
mod strategy;

// Re-export public API
pub use aggregate::{Aggregator, Evaluation, Tally};
pub use error::{ParseError, PuzzleError, SolveError};
pub use instance::{PuzzleInstance, SolveResult};
pub use machine::{BUTTON_A_COST, BUTTON_B_COST, Machine, Presses, Vec2};
pub use parser::parse_machines;
pub use puzzle::{ClawContraption, PART_2_OFFSET};
pub use strategy::{IntegerProgram, LinearSystem, StrategyKind, TokenCostSolver};
