//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use claw_solver::{Aggregator, ClawContraption, Evaluation};
use std::path::{Path, PathBuf};

/// Environment variable naming the default input directory
pub const INPUT_DIR_ENV: &str = "CLAW_INPUT_DIR";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Part being solved
    pub part: u8,
    /// Full path of the input file
    pub input_path: PathBuf,
    /// Offset, strategy and evaluation mode for the part
    pub aggregator: Aggregator,
    /// Number of threads for parallel evaluation
    pub thread_count: usize,
    /// Print the descriptive report line instead of the bare total
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, falling back to the environment for the
    /// input directory.
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let env_dir = std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from);
        Self::resolve(args, env_dir)
    }

    fn resolve(args: Args, env_dir: Option<PathBuf>) -> Result<Self, CliError> {
        if args.input.trim().is_empty() {
            return Err(CliError::Config("input name must not be empty".to_string()));
        }
        if args.threads == Some(0) {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        let input_dir = args
            .input_dir
            .or(env_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let input_path = input_dir.join(input_file_name(&args.input));

        let mut aggregator = ClawContraption::aggregator(args.part)?
            .with_evaluation(Evaluation::from(args.evaluation));
        if let Some(strategy) = args.strategy {
            aggregator = aggregator.with_strategy(strategy.into());
        }
        if let Some(offset) = args.offset {
            aggregator = aggregator.with_offset(offset);
        }

        Ok(Config {
            part: args.part,
            input_path,
            aggregator,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            verbose: args.verbose,
        })
    }
}

/// `<name>.txt`, unless `name` already carries the extension
fn input_file_name(name: &str) -> String {
    if Path::new(name).extension().is_some_and(|ext| ext == "txt") {
        name.to_string()
    } else {
        format!("{}.txt", name)
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EvaluationArg, StrategyArg};
    use claw_solver::{PART_2_OFFSET, StrategyKind};

    fn args(part: u8, input: &str) -> Args {
        Args {
            part,
            input: input.to_string(),
            input_dir: None,
            strategy: None,
            offset: None,
            evaluation: EvaluationArg::Sequential,
            threads: None,
            verbose: false,
        }
    }

    #[test]
    fn test_input_file_name() {
        assert_eq!(input_file_name("example"), "example.txt");
        assert_eq!(input_file_name("example.txt"), "example.txt");
        assert_eq!(input_file_name("day.13"), "day.13.txt");
    }

    #[test]
    fn test_part_defaults() {
        let part_1 = Config::resolve(args(1, "input"), None).unwrap();
        assert_eq!(part_1.input_path, PathBuf::from("./input.txt"));
        assert_eq!(part_1.aggregator.strategy(), StrategyKind::IntegerProgram);
        assert_eq!(part_1.aggregator.offset(), 0);
        assert!(!part_1.verbose);

        let part_2 = Config::resolve(args(2, "input"), None).unwrap();
        assert_eq!(part_2.aggregator.strategy(), StrategyKind::LinearSystem);
        assert_eq!(part_2.aggregator.offset(), PART_2_OFFSET);
    }

    #[test]
    fn test_input_dir_precedence() {
        let from_env = Config::resolve(args(1, "example"), Some("/env".into())).unwrap();
        assert_eq!(from_env.input_path, PathBuf::from("/env/example.txt"));

        let mut explicit = args(1, "example");
        explicit.input_dir = Some("/cli".into());
        let from_cli = Config::resolve(explicit, Some("/env".into())).unwrap();
        assert_eq!(from_cli.input_path, PathBuf::from("/cli/example.txt"));
    }

    #[test]
    fn test_overrides() {
        let mut overridden = args(2, "example");
        overridden.strategy = Some(StrategyArg::Integer);
        overridden.offset = Some(0);
        overridden.evaluation = EvaluationArg::Parallel;
        overridden.threads = Some(2);
        overridden.verbose = true;

        let config = Config::resolve(overridden, None).unwrap();
        assert_eq!(config.aggregator.strategy(), StrategyKind::IntegerProgram);
        assert_eq!(config.aggregator.offset(), 0);
        assert_eq!(config.aggregator.evaluation(), Evaluation::Parallel);
        assert_eq!(config.thread_count, 2);
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::resolve(args(1, "  "), None),
            Err(CliError::Config(_))
        ));

        let mut zero_threads = args(1, "example");
        zero_threads.threads = Some(0);
        assert!(matches!(
            Config::resolve(zero_threads, None),
            Err(CliError::Config(_))
        ));
    }
}
