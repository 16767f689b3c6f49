//! Closed-form solve via Cramer's rule

use super::TokenCostSolver;
use crate::error::SolveError;
use crate::machine::{Machine, Presses, Vec2};

/// Solves `[[Ax, Bx], [Ay, By]] · [a, b] = [Px, Py]` directly.
///
/// All arithmetic is exact (`i128`), so "is the result an integer" is a
/// divisibility check rather than a rounding tolerance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSystem;

impl TokenCostSolver for LinearSystem {
    fn name(&self) -> &'static str {
        "linear-system"
    }

    fn presses(&self, machine: &Machine) -> Result<Presses, SolveError> {
        let determinant = machine.determinant();
        if determinant == 0 {
            return Err(SolveError::Singular);
        }

        let Vec2 { x: ax, y: ay } = machine.button_a;
        let Vec2 { x: bx, y: by } = machine.button_b;
        let Vec2 { x: px, y: py } = machine.prize;
        let (ax, ay, bx, by, px, py) = (
            i128::from(ax),
            i128::from(ay),
            i128::from(bx),
            i128::from(by),
            i128::from(px),
            i128::from(py),
        );

        let numerator_a = px * by - bx * py;
        let numerator_b = ax * py - px * ay;
        if numerator_a % determinant != 0 || numerator_b % determinant != 0 {
            return Err(SolveError::Fractional);
        }

        let a = numerator_a / determinant;
        let b = numerator_b / determinant;
        match (u64::try_from(a), u64::try_from(b)) {
            (Ok(a), Ok(b)) => Ok(Presses { a, b }),
            _ if a < 0 || b < 0 => Err(SolveError::NegativePresses),
            _ => Err(SolveError::PressesOverflow),
        }
    }
}
