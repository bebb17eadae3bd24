use crate::error::Rejection;

/// Byte a character grid uses for an open cell.
pub const ASCII_WALKABLE: u8 = b'1';
/// Byte a numeric occupancy grid uses for an open cell.
pub const NUMERIC_WALKABLE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(&self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn squared_distance(&self, other: Position) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Orthogonal moves, listed in expansion order.
///
/// The order decides which of several equally short paths is reported, so it
/// must never change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Picks the walkable marker for a query from the byte found at the start cell.
///
/// Grids written with ASCII digits use `'1'` for open cells, plain occupancy
/// grids use `1`.
pub fn resolve_walkable_marker(sample: u8) -> u8 {
    if sample == b'0' || sample == b'1' {
        ASCII_WALKABLE
    } else {
        NUMERIC_WALKABLE
    }
}

/// Read-only view over a caller-owned, row-major occupancy grid.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    cells: &'a [u8],
    width: i32,
    height: i32,
    walkable: u8,
}

impl<'a> Grid<'a> {
    /// Wraps `cells` after checking it really is `width * height` bytes.
    pub fn new(cells: &'a [u8], width: i32, height: i32, walkable: u8) -> Result<Self, Rejection> {
        if width <= 0 || height <= 0 {
            return Err(Rejection::InvalidDimensions { width, height });
        }
        let expected = match (width as usize).checked_mul(height as usize) {
            Some(cells) if cells <= i32::MAX as usize => cells,
            _ => return Err(Rejection::GridTooLarge { width, height }),
        };
        if cells.len() != expected {
            return Err(Rejection::GridSizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Grid {
            cells,
            width,
            height,
            walkable,
        })
    }

    /// Builds the grid for a query, resolving the walkable marker from the
    /// byte under `start`.
    pub fn for_start(cells: &'a [u8], width: i32, height: i32, start: Position) -> Result<Self, Rejection> {
        let mut grid = Grid::new(cells, width, height, NUMERIC_WALKABLE)?;
        if !grid.in_bounds(start) {
            return Err(Rejection::StartOutOfBounds(start));
        }
        grid.walkable = resolve_walkable_marker(grid.cells[grid.to_index(start)]);
        Ok(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn walkable_marker(&self) -> u8 {
        self.walkable
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn to_index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    pub fn to_position(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[self.to_index(pos)] == self.walkable
    }

    /// Walkable orthogonal neighbours of `pos`, in expansion order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |direction| pos.step(direction))
            .filter(move |next| self.is_walkable(*next))
    }

    pub fn walkable_neighbor_count(&self, pos: Position) -> usize {
        self.neighbors(pos).count()
    }

    /// Renders the grid with `#` for blocked cells, `.` for open ones and
    /// the given overlay characters on top.
    pub fn render(&self, overlay: &[(Position, char)]) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                let marked = overlay.iter().rev().find(|(p, _)| *p == pos).map(|(_, c)| *c);
                let c = match marked {
                    Some(c) => c,
                    None if self.is_walkable(pos) => '.',
                    None => '#',
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN_3X2: [u8; 6] = [1, 1, 1, 1, 0, 1];

    #[test]
    fn marker_follows_start_cell_convention() {
        assert_eq!(resolve_walkable_marker(b'0'), b'1');
        assert_eq!(resolve_walkable_marker(b'1'), b'1');
        assert_eq!(resolve_walkable_marker(0), 1);
        assert_eq!(resolve_walkable_marker(1), 1);
        assert_eq!(resolve_walkable_marker(b'x'), 1);
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(&OPEN_3X2, 3, 2, 1).unwrap();
        assert_eq!(grid.to_index(Position::new(0, 0)), 0);
        assert_eq!(grid.to_index(Position::new(2, 0)), 2);
        assert_eq!(grid.to_index(Position::new(1, 1)), 4);
        assert_eq!(grid.to_position(5), Position::new(2, 1));
    }

    #[test]
    fn grids_past_i32_indices_are_rejected() {
        assert_eq!(
            Grid::new(&[], 70_000, 70_000, 1).unwrap_err(),
            Rejection::GridTooLarge {
                width: 70_000,
                height: 70_000
            }
        );
        assert_eq!(
            Grid::new(&[], i32::MAX, 2, 1).unwrap_err(),
            Rejection::GridTooLarge {
                width: i32::MAX,
                height: 2
            }
        );
        assert!(matches!(
            Grid::new(&[], 46_340, 46_340, 1),
            Err(Rejection::GridSizeMismatch { .. })
        ));
    }

    #[test]
    fn out_of_bounds_is_never_walkable() {
        let grid = Grid::new(&OPEN_3X2, 3, 2, 1).unwrap();
        assert!(!grid.is_walkable(Position::new(-1, 0)));
        assert!(!grid.is_walkable(Position::new(3, 0)));
        assert!(!grid.is_walkable(Position::new(0, 2)));
        assert!(!grid.is_walkable(Position::new(1, 1)));
        assert!(grid.is_walkable(Position::new(2, 1)));
    }

    #[test]
    fn neighbors_come_out_left_right_up_down() {
        let cells = [1u8; 9];
        let grid = Grid::new(&cells, 3, 3, 1).unwrap();
        let got: Vec<_> = grid.neighbors(Position::new(1, 1)).collect();
        assert_eq!(
            got,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
        assert_eq!(grid.walkable_neighbor_count(Position::new(0, 0)), 2);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            Grid::new(&OPEN_3X2, 0, 2, 1),
            Err(Rejection::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::new(&OPEN_3X2, 2, 2, 1),
            Err(Rejection::GridSizeMismatch { expected: 4, actual: 6 })
        ));
    }

    #[test]
    fn for_start_resolves_ascii_marker() {
        let cells = *b"1011";
        let grid = Grid::for_start(&cells[..], 2, 2, Position::new(0, 0)).unwrap();
        assert_eq!(grid.walkable_marker(), b'1');
        assert!(grid.is_walkable(Position::new(0, 1)));
        assert!(!grid.is_walkable(Position::new(1, 0)));
        assert!(matches!(
            Grid::for_start(&cells[..], 2, 2, Position::new(5, 0)),
            Err(Rejection::StartOutOfBounds(_))
        ));
    }

    #[test]
    fn render_marks_overlay() {
        let grid = Grid::new(&OPEN_3X2, 3, 2, 1).unwrap();
        let text = grid.render(&[(Position::new(0, 0), 'S'), (Position::new(2, 1), 'G')]);
        assert_eq!(text, "S..\n.#G\n");
    }
}
