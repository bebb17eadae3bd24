use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::algorithms::Strategy;
use crate::scenarios::Scenario;

/// Upper bound on random map cells and on the output buffer length.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Built-in scenario to run, or "all".
    #[arg(long, default_value = "all")]
    pub scenario: String,

    /// Frontier strategy: breadth_first, best_first or all.
    #[arg(long, default_value = "breadth_first")]
    pub strategy: String,

    /// Override the output buffer capacity of every scenario.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Run a randomly generated map instead of the built-in ones.
    #[arg(long, default_value_t = false)]
    pub random: bool,

    #[arg(long, default_value_t = 12)]
    pub width: i32,

    #[arg(long, default_value_t = 12)]
    pub height: i32,

    #[arg(long, default_value_t = 0.25)]
    pub wall_density: f64,

    /// Seed for --random; drawn from entropy when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the summary table.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,

    /// List the built-in scenarios and exit.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Config {
    pub fn strategies(&self) -> Result<Vec<Strategy>> {
        if self.strategy == "all" {
            return Ok(Strategy::ALL.to_vec());
        }
        let strategy = self
            .strategy
            .parse::<Strategy>()
            .with_context(|| format!("invalid --strategy '{}'", self.strategy))?;
        Ok(vec![strategy])
    }

    pub fn scenarios(&self) -> Result<Vec<Scenario>> {
        let mut scenarios = if self.random {
            if !(0.0..=1.0).contains(&self.wall_density) {
                bail!("--wall-density must be within 0..=1, got {}", self.wall_density);
            }
            let cells = usize::try_from(self.width)
                .ok()
                .zip(usize::try_from(self.height).ok())
                .and_then(|(width, height)| width.checked_mul(height));
            match cells {
                Some(cells) if cells <= MAX_CELLS => {}
                _ => bail!(
                    "--width {} x --height {} must be non-negative and hold at most {MAX_CELLS} cells",
                    self.width,
                    self.height
                ),
            }
            let seed = self.seed.unwrap_or_else(rand::random);
            vec![Scenario::random(self.width, self.height, self.wall_density, seed)]
        } else if self.scenario == "all" {
            Scenario::builtin()
        } else {
            match Scenario::by_name(&self.scenario) {
                Some(scenario) => vec![scenario],
                None => bail!("unknown scenario '{}', try --list", self.scenario),
            }
        };

        if let Some(capacity) = self.capacity {
            if capacity > MAX_CELLS {
                bail!("--capacity {capacity} exceeds the limit of {MAX_CELLS}");
            }
            for scenario in &mut scenarios {
                scenario.capacity = capacity;
            }
        }
        Ok(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("grid_pathfinder").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_run_every_builtin_breadth_first() {
        let config = parse(&[]);
        assert_eq!(config.strategies().unwrap(), vec![Strategy::BreadthFirst]);
        assert_eq!(config.scenarios().unwrap().len(), Scenario::builtin().len());
    }

    #[test]
    fn all_strategies_and_capacity_override() {
        let config = parse(&["--strategy", "all", "--scenario", "open_5x5", "--capacity", "3"]);
        assert_eq!(config.strategies().unwrap(), Strategy::ALL.to_vec());
        let scenarios = config.scenarios().unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].capacity, 3);
    }

    #[test]
    fn random_uses_seed() {
        let config = parse(&["--random", "--width", "9", "--height", "7", "--seed", "5"]);
        let scenarios = config.scenarios().unwrap();
        assert_eq!(scenarios, vec![Scenario::random(9, 7, 0.25, 5)]);
    }

    #[test]
    fn bad_names_are_errors() {
        assert!(parse(&["--strategy", "dfs"]).strategies().is_err());
        assert!(parse(&["--scenario", "missing"]).scenarios().is_err());
        assert!(parse(&["--random", "--wall-density", "1.5"]).scenarios().is_err());
    }

    #[test]
    fn oversized_random_maps_are_errors() {
        assert!(parse(&["--random", "--width", "70000", "--height", "70000", "--seed", "1"])
            .scenarios()
            .is_err());
        assert!(parse(&["--random", "--width", "50000", "--height", "50000"])
            .scenarios()
            .is_err());
        assert!(parse(&["--random", "--width", "4097", "--height", "4096"])
            .scenarios()
            .is_err());
    }

    #[test]
    fn oversized_capacity_is_an_error() {
        let huge = usize::MAX.to_string();
        assert!(parse(&["--scenario", "open_5x5", "--capacity", huge.as_str()])
            .scenarios()
            .is_err());
        assert!(parse(&["--scenario", "open_5x5", "--capacity", "16777216"])
            .scenarios()
            .is_ok());
    }
}
