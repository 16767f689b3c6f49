//! Output formatting for part results

use crate::executor::PartReport;
use chrono::TimeDelta;

/// Output formatter for part results
pub struct OutputFormatter {
    verbose: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Format and print a report
    pub fn print_report(&self, report: &PartReport) {
        println!("{}", self.format_report(report));
    }

    /// The bare answer, unless verbose mode asks for counts and timings too
    pub fn format_report(&self, report: &PartReport) -> String {
        if !self.verbose {
            return report.tokens().to_string();
        }

        let tally = &report.result.tally;
        format!(
            "Part {}: {} ({}/{} prizes, {}, parse: {}, solve: {})",
            report.part,
            tally.tokens,
            tally.solved,
            tally.machines(),
            report.strategy.solver().name(),
            format_duration(report.parse_duration),
            format_duration(report.result.duration()),
        )
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use claw_solver::{SolveResult, StrategyKind, Tally};

    fn report() -> PartReport {
        let start = Utc.with_ymd_and_hms(2024, 12, 13, 6, 0, 0).unwrap();
        PartReport {
            part: 1,
            strategy: StrategyKind::IntegerProgram,
            parse_duration: TimeDelta::microseconds(42),
            result: SolveResult {
                tally: Tally {
                    tokens: 480,
                    solved: 2,
                    unsolvable: 2,
                },
                solve_start: start,
                solve_end: start + TimeDelta::microseconds(1_500),
            },
        }
    }

    #[test]
    fn test_default_prints_answer_only() {
        assert_eq!(OutputFormatter::new(false).format_report(&report()), "480");
    }

    #[test]
    fn test_verbose_report() {
        assert_eq!(
            OutputFormatter::new(true).format_report(&report()),
            "Part 1: 480 (2/4 prizes, integer-program, parse: 42µs, solve: 1.50ms)"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::milliseconds(12)), "12.00ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2_500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
