//! Claw machine data model

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser;

/// Tokens spent per press of button A
pub const BUTTON_A_COST: u64 = 3;
/// Tokens spent per press of button B
pub const BUTTON_B_COST: u64 = 1;

/// A 2-D integer vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: i64,
    pub y: i64,
}

impl Vec2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Add `offset` to both coordinates, `None` on overflow.
    pub fn checked_offset(self, offset: i64) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(offset)?,
            y: self.y.checked_add(offset)?,
        })
    }
}

impl From<(i64, i64)> for Vec2 {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// One claw machine: two buttons and a prize location
///
/// Pressing button A moves the claw by `button_a`, pressing button B moves it
/// by `button_b`. The prize is won when the claw sits exactly on `prize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Machine {
    pub button_a: Vec2,
    pub button_b: Vec2,
    pub prize: Vec2,
}

impl Machine {
    pub fn new(
        button_a: impl Into<Vec2>,
        button_b: impl Into<Vec2>,
        prize: impl Into<Vec2>,
    ) -> Self {
        Self {
            button_a: button_a.into(),
            button_b: button_b.into(),
            prize: prize.into(),
        }
    }

    /// The same machine with the prize moved by `offset` on both axes.
    ///
    /// Returns `None` if a coordinate overflows.
    pub fn with_offset(&self, offset: i64) -> Option<Self> {
        Some(Self {
            prize: self.prize.checked_offset(offset)?,
            ..*self
        })
    }

    /// Determinant of the `[[Ax, Bx], [Ay, By]]` button matrix.
    ///
    /// Zero means the buttons move the claw along the same line.
    pub fn determinant(&self) -> i128 {
        let Vec2 { x: ax, y: ay } = self.button_a;
        let Vec2 { x: bx, y: by } = self.button_b;
        i128::from(ax) * i128::from(by) - i128::from(bx) * i128::from(ay)
    }

    /// Whether `presses` lands the claw exactly on the prize.
    pub fn reaches(&self, presses: Presses) -> bool {
        let a = i128::from(presses.a);
        let b = i128::from(presses.b);
        a * i128::from(self.button_a.x) + b * i128::from(self.button_b.x)
            == i128::from(self.prize.x)
            && a * i128::from(self.button_a.y) + b * i128::from(self.button_b.y)
                == i128::from(self.prize.y)
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Button A: X+{}, Y+{}", self.button_a.x, self.button_a.y)?;
        writeln!(f, "Button B: X+{}, Y+{}", self.button_b.x, self.button_b.y)?;
        write!(f, "Prize: X={}, Y={}", self.prize.x, self.prize.y)
    }
}

impl FromStr for Machine {
    type Err = ParseError;

    /// Parse a single three-line machine block.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<(usize, &str)> = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();
        parser::parse_block(&lines)
    }
}

/// Number of presses of each button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Presses {
    pub a: u64,
    pub b: u64,
}

impl Presses {
    pub const fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Tokens spent on these presses, `None` if the count overflows `u64`.
    pub fn cost(&self) -> Option<u64> {
        self.a
            .checked_mul(BUTTON_A_COST)?
            .checked_add(self.b.checked_mul(BUTTON_B_COST)?)
    }
}
