//! Reads the input and runs the configured part

use crate::config::Config;
use crate::error::CliError;
use chrono::TimeDelta;
use claw_solver::{Evaluation, PuzzleInstance, SolveResult, StrategyKind};
use std::fs;
use tracing::info;

/// Result of running one part on one input
pub struct PartReport {
    pub part: u8,
    pub strategy: StrategyKind,
    pub parse_duration: TimeDelta,
    pub result: SolveResult,
}

impl PartReport {
    /// Tokens needed to win every winnable prize
    pub fn tokens(&self) -> u64 {
        self.result.tally.tokens
    }
}

/// Read the input file and solve the configured part
pub fn execute(config: &Config) -> Result<PartReport, CliError> {
    let input = fs::read_to_string(&config.input_path).map_err(|source| CliError::Io {
        path: config.input_path.clone(),
        source,
    })?;

    let instance = PuzzleInstance::new(&input)?;
    let aggregator = &config.aggregator;
    info!(
        path = %config.input_path.display(),
        machines = instance.machines().len(),
        part = config.part,
        strategy = ?aggregator.strategy(),
        offset = aggregator.offset(),
        "solving"
    );

    let result = match aggregator.evaluation() {
        Evaluation::Sequential => instance.solve(aggregator)?,
        Evaluation::Parallel => {
            let thread_pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.thread_count)
                .build()?;
            thread_pool.install(|| instance.solve(aggregator))?
        }
    };
    info!(
        tokens = result.tally.tokens,
        solved = result.tally.solved,
        unsolvable = result.tally.unsolvable,
        "solved"
    );

    Ok(PartReport {
        part: config.part,
        strategy: aggregator.strategy(),
        parse_duration: instance.parse_duration(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, EvaluationArg, StrategyArg};
    use std::io::Write;
    use tempfile::TempDir;

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

    fn input_dir(contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join("example.txt")).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        dir
    }

    fn args(part: u8, dir: &TempDir) -> Args {
        Args {
            part,
            input: "example".to_string(),
            input_dir: Some(dir.path().to_path_buf()),
            strategy: None,
            offset: None,
            evaluation: EvaluationArg::Sequential,
            threads: None,
            verbose: false,
        }
    }

    #[test]
    fn test_part_1_example() {
        let dir = input_dir(EXAMPLE);
        let config = Config::from_args(args(1, &dir)).unwrap();
        let report = execute(&config).unwrap();
        assert_eq!(report.tokens(), 480);
        assert_eq!(report.strategy, StrategyKind::IntegerProgram);
        assert_eq!(report.result.tally.solved, 2);
    }

    #[test]
    fn test_part_2_example() {
        let dir = input_dir(EXAMPLE);
        let config = Config::from_args(args(2, &dir)).unwrap();
        assert_eq!(execute(&config).unwrap().tokens(), 875_318_608_908);
    }

    #[test]
    fn test_parallel_with_strategy_override() {
        let dir = input_dir(EXAMPLE);
        let mut args = args(1, &dir);
        args.strategy = Some(StrategyArg::Linear);
        args.evaluation = EvaluationArg::Parallel;
        args.threads = Some(2);
        let config = Config::from_args(args).unwrap();
        let report = execute(&config).unwrap();
        assert_eq!(report.tokens(), 480);
        assert_eq!(report.strategy, StrategyKind::LinearSystem);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_args(args(1, &dir)).unwrap();
        assert!(matches!(execute(&config), Err(CliError::Io { .. })));
    }

    #[test]
    fn test_malformed_input() {
        let dir = input_dir("Button A: X+94, Y+34\nPrize: X=8400, Y=5400\n");
        let config = Config::from_args(args(1, &dir)).unwrap();
        assert!(matches!(
            execute(&config),
            Err(CliError::Puzzle(claw_solver::PuzzleError::Parse(_)))
        ));
    }
}
