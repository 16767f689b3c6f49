//! Mixed-integer formulation solved by a general MILP backend

use good_lp::{
    Expression, ResolutionError, Solution, SolverModel, constraint, default_solver, variable,
    variables,
};
use tracing::trace;

use super::TokenCostSolver;
use crate::error::SolveError;
use crate::machine::{BUTTON_A_COST, BUTTON_B_COST, Machine, Presses};

/// Distance from an integer below which a solver value is rounded
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Minimises `3a + b` subject to `a·A + b·B = P`, `a, b ≥ 0` integer.
///
/// Singular machines are rejected up front: the program would happily pick
/// the cheapest of infinitely many solutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerProgram;

impl TokenCostSolver for IntegerProgram {
    fn name(&self) -> &'static str {
        "integer-program"
    }

    fn presses(&self, machine: &Machine) -> Result<Presses, SolveError> {
        if machine.determinant() == 0 {
            return Err(SolveError::Singular);
        }

        let mut vars = variables!();
        let a = vars.add(variable().integer().min(0));
        let b = vars.add(variable().integer().min(0));

        let objective: Expression = BUTTON_A_COST as f64 * a + BUTTON_B_COST as f64 * b;
        let (ax, ay) = (machine.button_a.x as f64, machine.button_a.y as f64);
        let (bx, by) = (machine.button_b.x as f64, machine.button_b.y as f64);
        let (px, py) = (machine.prize.x as f64, machine.prize.y as f64);
        trace!(%machine, "building integer program");

        let solution = vars
            .minimise(objective)
            .using(default_solver)
            .with(constraint!(ax * a + bx * b == px))
            .with(constraint!(ay * a + by * b == py))
            .solve()
            .map_err(|e| match e {
                ResolutionError::Infeasible => SolveError::Infeasible,
                other => SolveError::Backend(other.to_string()),
            })?;

        let presses = Presses {
            a: round_presses(solution.value(a))?,
            b: round_presses(solution.value(b))?,
        };
        // Rounding a float can land next to the prize; only exact hits count.
        if machine.reaches(presses) {
            Ok(presses)
        } else {
            Err(SolveError::Fractional)
        }
    }
}

/// Round a solver value that is within tolerance of a non-negative integer.
fn round_presses(value: f64) -> Result<u64, SolveError> {
    let rounded = value.round();
    if (value - rounded).abs() > INTEGRALITY_TOLERANCE {
        return Err(SolveError::Fractional);
    }
    if rounded < 0.0 {
        return Err(SolveError::NegativePresses);
    }
    if rounded >= u64::MAX as f64 {
        return Err(SolveError::PressesOverflow);
    }
    Ok(rounded as u64)
}
