use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_pathfinder::config::Config;
use grid_pathfinder::runner::{print_comparison_results, print_result, run_scenario};
use grid_pathfinder::scenarios::Scenario;

fn main() -> Result<()> {
    let config = Config::parse();

    let default_directive = if config.quiet {
        "grid_pathfinder=warn"
    } else {
        "grid_pathfinder=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    if config.list {
        for scenario in Scenario::builtin() {
            println!(
                "{:<20} {}x{}  {:?} -> {:?}  capacity {}",
                scenario.name,
                scenario.width,
                scenario.height,
                scenario.start,
                scenario.target,
                scenario.capacity
            );
        }
        return Ok(());
    }

    let strategies = config.strategies()?;
    let scenarios = config.scenarios()?;

    if !config.quiet {
        println!("Starting grid pathfinder...");
        println!(
            "Scenarios: {}, Strategies: {}",
            scenarios.len(),
            strategies
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    let mut results = Vec::with_capacity(scenarios.len() * strategies.len());
    for scenario in &scenarios {
        for &strategy in &strategies {
            let result = run_scenario(scenario, strategy);
            if !config.quiet {
                print_result(scenario, &result);
            }
            results.push(result);
        }
    }

    if config.quiet || results.len() > 1 {
        print_comparison_results(&results);
    }

    let failures = results.iter().filter(|r| r.verification_failed()).count();
    if failures > 0 {
        bail!("{} reported path(s) failed replay", failures);
    }
    Ok(())
}
