use grid_pathfinder::scenarios::Scenario;
use grid_pathfinder::verify::replay_path;
use grid_pathfinder::{find_path, find_path_with, Grid, Strategy, NO_PATH_EXISTS};

fn run(name: &str, strategy: Strategy) -> (i32, Vec<i32>) {
    let scenario = Scenario::by_name(name).expect("scenario exists");
    let mut out = vec![0; scenario.capacity];
    let steps = find_path_with(
        strategy,
        scenario.start.x,
        scenario.start.y,
        scenario.target.x,
        scenario.target.y,
        &scenario.cells,
        scenario.width,
        scenario.height,
        &mut out,
    );
    let written = usize::try_from(steps).map_or_else(|_| Vec::new(), |n| out[..n].to_vec());
    (steps, written)
}

#[test]
fn corridor_matches_documented_path() {
    assert_eq!(
        run("corridor_4x4", Strategy::BreadthFirst),
        (6, vec![4, 8, 12, 13, 14, 15])
    );
}

#[test]
fn ascii_grid_behaves_like_numeric_grid() {
    assert_eq!(
        run("ascii_corridor_4x4", Strategy::BreadthFirst),
        run("corridor_4x4", Strategy::BreadthFirst)
    );
    assert_eq!(
        run("ascii_corridor_4x4", Strategy::BestFirst),
        run("corridor_4x4", Strategy::BestFirst)
    );
}

#[test]
fn open_grid_from_the_middle_uses_left_first_tie_break() {
    assert_eq!(
        run("middle_out_5x5", Strategy::BreadthFirst),
        (4, vec![11, 10, 5, 0])
    );
}

#[test]
fn hollow_center_target_is_isolated() {
    for strategy in Strategy::ALL {
        assert_eq!(run("hollow_center_5x5", strategy), (NO_PATH_EXISTS, vec![]));
    }
}

#[test]
fn breadth_first_sample_maps() {
    let expected: &[(&str, i32, &[i32])] = &[
        ("complex_5x5", 8, &[13, 14, 9, 4, 3, 2, 1, 0]),
        ("zigzag_5x5", 8, &[1, 6, 11, 12, 17, 18, 23, 24]),
        ("open_5x5", 8, &[1, 2, 3, 4, 9, 14, 19, 24]),
        ("reverse_5x5", 8, &[23, 22, 21, 20, 15, 10, 5, 0]),
        ("winding_5x4", 8, &[5, 10, 11, 12, 17, 18, 19, 14]),
        ("widening_6x6", 9, &[1, 2, 3, 9, 15, 16, 17, 11, 5]),
        ("complex_8x8", 11, &[1, 2, 3, 4, 5, 13, 21, 20, 19, 18, 26]),
    ];
    for &(name, steps, path) in expected {
        assert_eq!(
            run(name, Strategy::BreadthFirst),
            (steps, path.to_vec()),
            "{name}"
        );
    }
}

#[test]
fn best_first_sample_maps() {
    let expected: &[(&str, i32, &[i32])] = &[
        ("open_5x5", 8, &[1, 6, 7, 12, 13, 18, 19, 24]),
        ("middle_out_5x5", 4, &[11, 6, 5, 0]),
        ("reverse_5x5", 8, &[23, 18, 17, 16, 11, 6, 5, 0]),
        ("complex_8x8", 11, &[1, 2, 3, 4, 5, 13, 21, 20, 19, 18, 26]),
    ];
    for &(name, steps, path) in expected {
        assert_eq!(run(name, Strategy::BestFirst), (steps, path.to_vec()), "{name}");
    }
}

#[test]
fn every_sample_replays_for_both_strategies() {
    for scenario in Scenario::builtin() {
        let grid = Grid::for_start(&scenario.cells, scenario.width, scenario.height, scenario.start)
            .expect("well-formed scenario");
        for strategy in Strategy::ALL {
            let (steps, path) = run(&scenario.name, strategy);
            if steps == NO_PATH_EXISTS {
                continue;
            }
            assert_eq!(
                replay_path(&grid, scenario.start, scenario.target, &path, path.len()),
                Ok(()),
                "{} {}",
                scenario.name,
                strategy
            );
        }
    }
}

#[test]
fn complex_5x5_needs_its_whole_buffer() {
    let scenario = Scenario::by_name("complex_5x5").unwrap();
    let mut exact = vec![0; 8];
    let mut short = vec![0; 7];
    let s = scenario.start;
    let t = scenario.target;
    let w = scenario.width;
    let h = scenario.height;

    assert_eq!(find_path(s.x, s.y, t.x, t.y, &scenario.cells, w, h, &mut exact), 8);
    assert_eq!(
        find_path(s.x, s.y, t.x, t.y, &scenario.cells, w, h, &mut short),
        NO_PATH_EXISTS
    );
}
