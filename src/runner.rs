use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::algorithms::Strategy;
use crate::error::PathViolation;
use crate::grid::{Grid, Position};
use crate::scenarios::Scenario;
use crate::search::{Pathfinder, SearchOutcome};
use crate::statistics::SearchStats;
use crate::verify::{replay_path, shortest_path_len};

#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub scenario: String,
    pub strategy: Strategy,
    pub outcome: SearchOutcome,
    pub steps: i32,
    pub path: Vec<i32>,
    /// Shortest length from the reference search, ignoring capacity.
    pub optimal: Option<usize>,
    /// Replay check of the reported path; `None` when nothing was reported.
    pub verification: Option<Result<(), PathViolation>>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl ScenarioResult {
    pub fn found(&self) -> bool {
        self.steps >= 0
    }

    pub fn verification_failed(&self) -> bool {
        matches!(self.verification, Some(Err(_)))
    }

    /// Whether the reported length matches the reference optimum.
    pub fn is_optimal(&self) -> Option<bool> {
        match (self.found(), self.optimal) {
            (true, Some(optimal)) => Some(self.steps as usize == optimal),
            _ => None,
        }
    }
}

/// Runs one scenario with one strategy, then checks the answer by replay and
/// against the reference search.
pub fn run_scenario(scenario: &Scenario, strategy: Strategy) -> ScenarioResult {
    let mut out = vec![0; scenario.capacity];
    let query = scenario.query();

    let started = Instant::now();
    let report = Pathfinder::new(strategy).search(&query, &mut out);
    let elapsed = started.elapsed();

    let steps = report.step_count();
    let grid = Grid::for_start(&scenario.cells, scenario.width, scenario.height, scenario.start).ok();
    let optimal = grid
        .as_ref()
        .and_then(|grid| shortest_path_len(grid, scenario.start, scenario.target));

    let (path, verification) = match (&grid, usize::try_from(steps)) {
        (Some(grid), Ok(steps)) => {
            let verdict = replay_path(grid, scenario.start, scenario.target, &out, steps);
            if let Err(violation) = &verdict {
                warn!(scenario = %scenario.name, %strategy, %violation, "reported path failed replay");
            }
            (out[..steps].to_vec(), Some(verdict))
        }
        _ => (Vec::new(), None),
    };

    info!(
        scenario = %scenario.name,
        %strategy,
        steps,
        ?optimal,
        elapsed_us = elapsed.as_micros() as u64,
        "scenario complete"
    );

    ScenarioResult {
        scenario: scenario.name.clone(),
        strategy,
        outcome: report.outcome,
        steps,
        path,
        optimal,
        verification,
        stats: report.stats,
        elapsed,
    }
}

/// Prints one result the way a console harness would: the step count and
/// buffer contents, then the map with the path drawn over it.
pub fn print_result(scenario: &Scenario, result: &ScenarioResult) {
    println!("============{} ({})============", scenario.name, result.strategy);
    match &result.outcome {
        SearchOutcome::Found { steps } => println!("Steps {}", steps),
        SearchOutcome::Exhausted => println!("No path exists."),
        SearchOutcome::Rejected(rejection) => println!("No path exists. ({})", rejection),
    }
    for index in &result.path {
        println!("{}", index);
    }

    if let Ok(grid) = Grid::for_start(&scenario.cells, scenario.width, scenario.height, scenario.start) {
        let mut overlay: Vec<(Position, char)> = result
            .path
            .iter()
            .map(|&index| (grid.to_position(index as usize), '*'))
            .collect();
        overlay.push((scenario.start, 'S'));
        overlay.push((scenario.target, 'G'));
        print!("{}", grid.render(&overlay));
    }

    match result.optimal {
        Some(optimal) => println!("Reference shortest path: {}", optimal),
        None => println!("Reference shortest path: none"),
    }
    if let Some(Err(violation)) = &result.verification {
        println!("Replay FAILED: {}", violation);
    }
    print!("{}", result.stats);
    println!("Search time: {:.2?}", result.elapsed);
    println!();
}

/// Prints every result in a single table.
pub fn print_comparison_results(results: &[ScenarioResult]) {
    println!("\n=== RESULTS ===");
    println!();
    println!(
        "{:<20} {:<14} {:<6} {:<8} {:<8} {:<8} {:<10} {:<12}",
        "Scenario", "Strategy", "Steps", "Optimal", "Replay", "Created", "Expanded", "Time"
    );
    println!("{}", "-".repeat(92));

    for result in results {
        let steps = if result.found() {
            result.steps.to_string()
        } else {
            "none".to_string()
        };
        let optimal = result
            .optimal
            .map_or_else(|| "none".to_string(), |o| o.to_string());
        let replay = match &result.verification {
            Some(Ok(())) => "✓",
            Some(Err(_)) => "✗",
            None => "-",
        };
        println!(
            "{:<20} {:<14} {:<6} {:<8} {:<8} {:<8} {:<10} {:<12}",
            result.scenario,
            result.strategy.name(),
            steps,
            optimal,
            replay,
            result.stats.nodes_created,
            result.stats.nodes_expanded,
            format!("{:.2?}", result.elapsed)
        );
    }

    println!();
    let found = results.iter().filter(|r| r.found()).count();
    let optimal = results.iter().filter(|r| r.is_optimal() == Some(true)).count();
    println!("Paths found: {}/{}", found, results.len());
    println!("Matching reference length: {}/{}", optimal, found);

    for strategy in Strategy::ALL {
        let runs: Vec<_> = results.iter().filter(|r| r.strategy == strategy).collect();
        if runs.is_empty() {
            continue;
        }
        let expanded: usize = runs.iter().map(|r| r.stats.nodes_expanded).sum();
        let total: Duration = runs.iter().map(|r| r.elapsed).sum();
        println!(
            "{}: {} runs, {} nodes expanded, {:.2?} total",
            strategy,
            runs.len(),
            expanded,
            total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_result_is_verified_and_optimal() {
        let scenario = Scenario::by_name("corridor_4x4").unwrap();
        let result = run_scenario(&scenario, Strategy::BreadthFirst);
        assert_eq!(result.steps, 6);
        assert_eq!(result.path, vec![4, 8, 12, 13, 14, 15]);
        assert_eq!(result.optimal, Some(6));
        assert_eq!(result.verification, Some(Ok(())));
        assert_eq!(result.is_optimal(), Some(true));
    }

    #[test]
    fn hollow_center_reports_no_path() {
        let scenario = Scenario::by_name("hollow_center_5x5").unwrap();
        let result = run_scenario(&scenario, Strategy::BestFirst);
        assert!(!result.found());
        assert!(result.path.is_empty());
        assert_eq!(result.verification, None);
        assert_eq!(result.optimal, None);
        assert_eq!(result.is_optimal(), None);
    }
}
