use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::Position;
use crate::search::Query;

/// A sample map together with the query to run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<u8>,
    pub start: Position,
    pub target: Position,
    pub capacity: usize,
}

impl Scenario {
    fn fixed(
        name: &str,
        width: i32,
        height: i32,
        cells: &[u8],
        start: (i32, i32),
        target: (i32, i32),
        capacity: usize,
    ) -> Self {
        Scenario {
            name: name.to_string(),
            width,
            height,
            cells: cells.to_vec(),
            start: Position::new(start.0, start.1),
            target: Position::new(target.0, target.1),
            capacity,
        }
    }

    pub fn query(&self) -> Query<'_> {
        Query {
            start: self.start,
            target: self.target,
            cells: &self.cells,
            width: self.width,
            height: self.height,
        }
    }

    /// The built-in sample maps.
    pub fn builtin() -> Vec<Scenario> {
        vec![
            Scenario::fixed(
                "corridor_4x4",
                4,
                4,
                &[
                    1, 1, 0, 1, //
                    1, 0, 1, 0, //
                    1, 0, 1, 0, //
                    1, 1, 1, 1, //
                ],
                (0, 0),
                (3, 3),
                20,
            ),
            Scenario::fixed(
                "complex_5x5",
                5,
                5,
                &[
                    1, 1, 1, 1, 1, //
                    1, 0, 0, 0, 1, //
                    1, 0, 1, 1, 1, //
                    1, 0, 0, 1, 0, //
                    1, 1, 1, 1, 0, //
                ],
                (2, 2),
                (0, 0),
                8,
            ),
            Scenario::fixed(
                "hollow_center_5x5",
                5,
                5,
                &[
                    1, 1, 1, 1, 1, //
                    1, 0, 0, 0, 1, //
                    1, 0, 1, 0, 1, //
                    1, 0, 0, 0, 1, //
                    1, 1, 1, 1, 1, //
                ],
                (0, 0),
                (2, 2),
                12,
            ),
            Scenario::fixed(
                "zigzag_5x5",
                5,
                5,
                &[
                    1, 1, 0, 0, 1, //
                    0, 1, 0, 0, 1, //
                    1, 1, 1, 0, 0, //
                    1, 0, 1, 1, 0, //
                    1, 0, 1, 1, 1, //
                ],
                (0, 0),
                (4, 4),
                12,
            ),
            Scenario::fixed("open_5x5", 5, 5, &[1; 25], (0, 0), (4, 4), 12),
            Scenario::fixed("middle_out_5x5", 5, 5, &[1; 25], (2, 2), (0, 0), 12),
            Scenario::fixed(
                "reverse_5x5",
                5,
                5,
                &[
                    1, 1, 0, 1, 1, //
                    1, 1, 0, 1, 1, //
                    1, 1, 0, 1, 1, //
                    1, 1, 1, 1, 1, //
                    1, 1, 1, 1, 1, //
                ],
                (4, 4),
                (0, 0),
                12,
            ),
            Scenario::fixed(
                "winding_5x4",
                5,
                4,
                &[
                    1, 0, 1, 1, 1, //
                    1, 0, 1, 0, 1, //
                    1, 1, 1, 0, 1, //
                    0, 0, 1, 1, 1, //
                ],
                (0, 0),
                (4, 2),
                12,
            ),
            Scenario::fixed(
                "widening_6x6",
                6,
                6,
                &[
                    1, 1, 1, 1, 0, 1, //
                    1, 0, 0, 1, 0, 1, //
                    1, 0, 1, 1, 1, 1, //
                    1, 1, 1, 1, 1, 0, //
                    1, 0, 1, 1, 1, 0, //
                    1, 0, 1, 1, 1, 0, //
                ],
                (0, 0),
                (5, 0),
                20,
            ),
            Scenario::fixed(
                "complex_8x8",
                8,
                8,
                &[
                    1, 1, 1, 1, 1, 1, 1, 1, //
                    1, 0, 0, 0, 0, 1, 1, 1, //
                    1, 0, 1, 1, 1, 1, 1, 1, //
                    1, 0, 1, 0, 1, 1, 1, 1, //
                    1, 0, 0, 0, 1, 1, 1, 1, //
                    1, 1, 1, 1, 1, 1, 1, 1, //
                    1, 1, 1, 1, 1, 1, 1, 1, //
                    1, 1, 1, 1, 1, 1, 1, 1, //
                ],
                (0, 0),
                (2, 3),
                200,
            ),
            Scenario::fixed(
                "ascii_corridor_4x4",
                4,
                4,
                b"1101\
                  1010\
                  1010\
                  1111",
                (0, 0),
                (3, 3),
                20,
            ),
        ]
    }

    pub fn by_name(name: &str) -> Option<Scenario> {
        Scenario::builtin().into_iter().find(|s| s.name == name)
    }

    /// Random occupancy map with start in the top-left quadrant and target in
    /// the bottom-right one. Both are always left open.
    ///
    /// Callers bound `width * height`; see [`crate::config::MAX_CELLS`].
    pub fn random(width: i32, height: i32, wall_density: f64, seed: u64) -> Scenario {
        let mut rng = StdRng::seed_from_u64(seed);
        let width = width.max(2);
        let height = height.max(2);
        let density = wall_density.clamp(0.0, 1.0);

        let start = Position::new(rng.gen_range(0..width / 2), rng.gen_range(0..height / 2));
        let target = Position::new(
            rng.gen_range(width / 2..width),
            rng.gen_range(height / 2..height),
        );

        let row = width as usize;
        let cell_count = row * height as usize;
        let mut cells: Vec<u8> = (0..cell_count)
            .map(|_| u8::from(!rng.gen_bool(density)))
            .collect();
        cells[start.y as usize * row + start.x as usize] = 1;
        cells[target.y as usize * row + target.x as usize] = 1;

        let walls = cells.iter().filter(|&&c| c == 0).count();
        debug!(width, height, walls, seed, ?start, ?target, "generated random map");

        Scenario {
            name: format!("random_{width}x{height}_{seed}"),
            width,
            height,
            cells,
            start,
            target,
            capacity: cell_count,
        }
    }
}
