//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use claw_solver::{Evaluation, StrategyKind};
use std::path::PathBuf;

/// Strategy used to solve each machine
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// Exact closed-form solve of the 2x2 system
    Linear,
    /// Integer program handed to a MILP solver (small prizes only)
    Integer,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => StrategyKind::LinearSystem,
            StrategyArg::Integer => StrategyKind::IntegerProgram,
        }
    }
}

/// Machine evaluation mode
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum EvaluationArg {
    /// Solve machines one after another (default)
    #[default]
    Sequential,
    /// Solve machines on a rayon thread pool
    Parallel,
}

impl From<EvaluationArg> for Evaluation {
    fn from(arg: EvaluationArg) -> Self {
        match arg {
            EvaluationArg::Sequential => Evaluation::Sequential,
            EvaluationArg::Parallel => Evaluation::Parallel,
        }
    }
}

/// Claw contraption token counter
#[derive(Parser, Debug)]
#[command(
    name = "claw",
    about = "Count the tokens needed to win every claw machine prize",
    version
)]
pub struct Args {
    /// Puzzle part: 1 (prizes as given) or 2 (prizes moved by 10^13)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Input basename; `<INPUT>.txt` is read from the input directory
    pub input: String,

    /// Directory holding the input file [env: CLAW_INPUT_DIR, default: .]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Override the part's solving strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Override the part's prize offset
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Evaluation mode: sequential or parallel
    #[arg(long, value_enum, default_value = "sequential")]
    pub evaluation: EvaluationArg,

    /// Number of threads for parallel evaluation
    #[arg(long)]
    pub threads: Option<usize>,

    /// Verbose mode - follow the answer with counts, strategy and timings
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["claw", "1", "example"]).unwrap();
        assert_eq!(args.part, 1);
        assert_eq!(args.input, "example");
        assert_eq!(args.strategy, None);
        assert_eq!(args.evaluation, EvaluationArg::Sequential);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "claw",
            "2",
            "input",
            "--input-dir",
            "/tmp/claw",
            "--strategy",
            "integer",
            "--offset",
            "5",
            "--evaluation",
            "parallel",
            "--threads",
            "3",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.input_dir, Some(PathBuf::from("/tmp/claw")));
        assert_eq!(args.strategy, Some(StrategyArg::Integer));
        assert_eq!(args.offset, Some(5));
        assert_eq!(args.evaluation, EvaluationArg::Parallel);
        assert_eq!(args.threads, Some(3));
        assert!(args.verbose);
    }

    #[test]
    fn test_part_out_of_range_rejected() {
        assert!(Args::try_parse_from(["claw", "3", "example"]).is_err());
        assert!(Args::try_parse_from(["claw", "0", "example"]).is_err());
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(Args::try_parse_from(["claw", "1"]).is_err());
    }
}
