//! Command-line flags shared by the window app and the headless runner.

use clap::Args;
use crate::application::SimulationConfig;
use crate::domain::{BoundaryMode, DEFAULT_DENSITY, DEFAULT_TICK_RATE, Pattern, StepStrategy, presets};

#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Grid width in cells
    #[arg(long, default_value_t = 75)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 75)]
    pub height: usize,

    /// Generations per second (1..=60)
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    pub rate: u32,

    /// Percent of cells alive after randomizing (0..=100)
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: u8,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Treat cells beyond the edge as dead instead of wrapping around
    #[arg(long)]
    pub clamped: bool,

    /// Row evaluation: serial | parallel | auto
    #[arg(long, default_value = "auto", value_parser = parse_strategy)]
    pub strategy: StepStrategy,
}

impl SimulationArgs {
    pub fn to_config(&self) -> SimulationConfig {
        let boundary = if self.clamped {
            BoundaryMode::Clamped
        } else {
            BoundaryMode::Wrapped
        };
        SimulationConfig::default()
            .with_size(self.width, self.height)
            .with_tick_rate(self.rate)
            .with_density(self.density)
            .with_boundary(boundary)
            .with_strategy(self.strategy)
            .with_seed(self.seed)
    }
}

pub fn parse_strategy(name: &str) -> Result<StepStrategy, String> {
    StepStrategy::from_name(name).ok_or_else(|| {
        let known: Vec<_> = StepStrategy::all()
            .iter()
            .map(|s| format!("  {:<9} {}", s.name(), s.description()))
            .collect();
        format!("unknown strategy '{}', expected one of:\n{}", name, known.join("\n"))
    })
}

pub fn parse_pattern(name: &str) -> Result<&'static Pattern, String> {
    presets::by_name(name).ok_or_else(|| {
        let known: Vec<_> = presets::ALL
            .iter()
            .map(|p| format!("  {:<20} {}", p.name, p.description))
            .collect();
        format!("unknown pattern '{}', expected one of:\n{}", name, known.join("\n"))
    })
}

/// Parse an `x,y` cell position
pub fn parse_position(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let coord = |v: &str| v.trim().parse::<i32>().map_err(|e| format!("bad coordinate '{}': {}", v, e));
    Ok((coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        sim: SimulationArgs,
    }

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = TestCli::try_parse_from(["life"]).unwrap();
        let config = cli.sim.to_config();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let cli = TestCli::try_parse_from([
            "life", "--width", "20", "--height", "10", "--rate", "5", "--density", "50",
            "--seed", "9", "--clamped", "--strategy", "parallel",
        ])
        .unwrap();
        let config = cli.sim.to_config();
        assert_eq!((config.width, config.height), (20, 10));
        assert_eq!(config.tick_rate, 5);
        assert_eq!(config.density, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.boundary, BoundaryMode::Clamped);
        assert_eq!(config.strategy, StepStrategy::Parallel);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(TestCli::try_parse_from(["life", "--strategy", "gpu"]).is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3,4"), Ok((3, 4)));
        assert_eq!(parse_position(" -1 , 2"), Ok((-1, 2)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a,b").is_err());
    }

    #[test]
    fn test_parse_pattern() {
        assert_eq!(parse_pattern("glider").unwrap().name, "Glider");
        let err = parse_pattern("spaceship").unwrap_err();
        assert!(err.contains("Gosper Glider Gun"));
        assert!(err.contains("Oscillator (period 15)"));
    }

    #[test]
    fn test_parse_strategy_lists_choices() {
        assert_eq!(parse_strategy("Serial"), Ok(StepStrategy::Serial));
        let err = parse_strategy("gpu").unwrap_err();
        assert!(err.contains("unknown strategy 'gpu'"));
        assert!(err.contains("Rows spread over the rayon pool"));
    }
}
