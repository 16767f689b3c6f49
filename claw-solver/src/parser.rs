//! Puzzle input parsing
//!
//! Input is a list of machine blocks separated by blank lines:
//!
//! ```text
//! Button A: X+94, Y+34
//! Button B: X+22, Y+67
//! Prize: X=8400, Y=5400
//! ```
//!
//! Lines are matched positionally (A, B, prize); labels are not checked.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::error::ParseError;
use crate::machine::{Machine, Vec2};

static VECTOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^:]+:\s*X[+=](?P<x>\d+),\s*Y[+=](?P<y>\d+)$").unwrap()
});

/// Parse every machine in the input.
pub fn parse_machines(input: &str) -> Result<Vec<Machine>, ParseError> {
    let blocks = input
        .lines()
        .enumerate()
        .chunk_by(|&(_, line)| line.trim().is_empty());

    let mut machines = Vec::new();
    for (blank, block) in &blocks {
        if blank {
            continue;
        }
        let lines: Vec<(usize, &str)> = block.collect();
        machines.push(parse_block(&lines)?);
    }
    Ok(machines)
}

/// Parse one block of `(zero-based line index, line)` pairs.
pub(crate) fn parse_block(lines: &[(usize, &str)]) -> Result<Machine, ParseError> {
    match lines {
        [a, b, prize] => Ok(Machine {
            button_a: parse_vector(*a)?,
            button_b: parse_vector(*b)?,
            prize: parse_vector(*prize)?,
        }),
        _ => Err(ParseError::LineCount {
            line: lines.first().map_or(1, |&(index, _)| index + 1),
            found: lines.len(),
        }),
    }
}

fn parse_vector((index, line): (usize, &str)) -> Result<Vec2, ParseError> {
    let line_no = index + 1;
    let captures = VECTOR_LINE
        .captures(line.trim())
        .ok_or_else(|| ParseError::InvalidFormat {
            line: line_no,
            text: line.to_string(),
        })?;

    let coordinate = |name: &str| {
        captures[name]
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidNumber {
                line: line_no,
                source,
            })
    };

    Ok(Vec2 {
        x: coordinate("x")?,
        y: coordinate("y")?,
    })
}
