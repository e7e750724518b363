use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use countdown::{Solver, SolverConfig, parse_digits, parse_target_range, shortest, verify_solution};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the countdown numbers puzzle
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every arithmetic expression over a set of numbers that hits a target")]
#[command(version)]
#[command(group(ArgGroup::new("goal").required(true).args(["target", "target_range"])))]
pub struct CliArgs {
    /// Comma-separated list of numbers to use, e.g. 25,50,75,100,3,6
    #[arg(short, long)]
    pub digits: String,

    /// Exact target value to solve for
    #[arg(short, long)]
    pub target: Option<i64>,

    /// Inclusive target range to count solutions for, e.g. 100,999
    #[arg(short = 'r', long)]
    pub target_range: Option<String>,

    /// Run on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// What the user asked for
pub enum Goal {
    Target(i64),
    Range(i64, i64),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digits: Vec<i64>,
    pub goal: Goal,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let digits = parse_digits(&args.digits).context("--digits invalid")?;

    let goal = match (args.target, args.target_range.as_deref()) {
        (_, Some(range)) => {
            let (low, high) = parse_target_range(range).context("--target-range invalid")?;
            Goal::Range(low, high)
        }
        (Some(target), None) => Goal::Target(target),
        (None, None) => anyhow::bail!("--target or --target-range must be provided"),
    };

    let solver = if args.sequential {
        SolverConfig::sequential()
    } else {
        SolverConfig::default()
    };

    Ok(CliConfig {
        digits,
        goal,
        solver,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new(config.solver);

    match config.goal {
        Goal::Range(low, high) => {
            for (target, count) in solver.count_solutions(low, high, &config.digits) {
                println!("{}: {} solutions found", target, count);
            }
            Ok(())
        }
        Goal::Target(target) => {
            info!(
                "Searching for expressions using digits {:?} that equal {}",
                config.digits, target
            );

            let solutions = solver.search(target, &config.digits);
            if solutions.is_empty() {
                warn!("No matching expression found");
                println!("no solution found :(");
                return Ok(());
            }

            for (i, solution) in solutions.iter().enumerate() {
                let result = verify_solution(solution, target).context("result is invalid")?;
                println!("{}: {} = {}", i, result, solution);
            }

            let best = shortest(&solutions).context("Failed to get shortest solution")?;
            println!("Shortest solution: {}", best);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(target: Option<i64>, target_range: Option<&str>) -> CliArgs {
        CliArgs {
            digits: "24,8,10,20,5,15".to_string(),
            target,
            target_range: target_range.map(str::to_string),
            sequential: false,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let result = CliArgs::try_parse_from(["countdown", "-d", "5,5", "-t", "10"]);
        assert!(result.is_ok());
        if let Ok(args) = result {
            assert_eq!(args.digits, "5,5");
            assert_eq!(args.target, Some(10));
            assert!(args.target_range.is_none());
            assert!(!args.sequential);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_requires_a_goal() {
        let result = CliArgs::try_parse_from(["countdown", "--digits", "1,2,3"]);
        assert!(result.is_err());

        let result = CliArgs::try_parse_from([
            "countdown",
            "--digits",
            "1,2,3",
            "--target",
            "6",
            "--target-range",
            "1,10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_for_target() {
        let result = config_from_args(args(Some(497), None));
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.digits, vec![24, 8, 10, 20, 5, 15]);
            assert!(matches!(config.goal, Goal::Target(497)));
            assert!(config.solver.parallel);
        }
    }

    #[test]
    fn test_config_for_range() {
        let result = config_from_args(args(None, Some("20,10")));
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert!(matches!(config.goal, Goal::Range(10, 20)));
        }
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(config_from_args(args(None, Some("0,10"))).is_err());
        assert!(config_from_args(args(None, None)).is_err());

        let mut bad_digits = args(Some(10), None);
        bad_digits.digits = "1,x".to_string();
        assert!(config_from_args(bad_digits).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
