//! Perfect maze generation (recursive backtracker) and rasterization.
//!
//! The builder carves a spanning tree over a `width x height` grid of cells and
//! turns it into a `(2*height+1) x (2*width+1)` grid of walls (`1`) and paths (`0`)
//! that can be drawn tile by tile.
use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Raster value for a solid tile.
pub const WALL: u8 = 1;
/// Raster value for an open tile.
pub const PATH: u8 = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidWidth(i32),
    InvalidHeight(i32),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidWidth(w) => {
                write!(f, "width out of range ({w}). Expected greater than 0")
            }
            MazeError::InvalidHeight(h) => {
                write!(f, "height out of range ({h}). Expected greater than 0")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// One node of the logical grid. Only the bottom and right walls are stored;
/// the top and left walls belong to the neighbours above and to the left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub bottom: bool,
    pub right: bool,
    visited: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self { x, y, bottom: true, right: true, visited: false }
    }
}

/// The `width x height` logical grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Carves a perfect maze with the given random source.
    /// Returns the grid and the number of walls removed.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> (Self, usize) {
        let mut grid = Self::new(width, height);
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut carved = 0;

        // start as close to the centre as possible
        let mut current = ((width - 1) / 2, (height - 1) / 2);
        grid.cell_mut(current.0, current.1).visited = true;

        loop {
            if let Some(next) = grid.choose_neighbour(current, rng) {
                grid.cell_mut(next.0, next.1).visited = true;
                grid.remove_wall(current, next);
                carved += 1;
                stack.push(current);
                current = next;
            } else if let Some(prev) = stack.pop() {
                current = prev;
            } else {
                break;
            }
        }

        (grid, carved)
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * self.width + x]
    }

    // Horizontal candidates go in first, but the pick is a single uniform choice
    // over the whole list.
    fn choose_neighbour<R: Rng + ?Sized>(&self, (cx, cy): (usize, usize), rng: &mut R) -> Option<(usize, usize)> {
        let mut unvisited: Vec<(usize, usize)> = Vec::with_capacity(4);
        if cx > 0 && !self.cell(cx - 1, cy).visited {
            unvisited.push((cx - 1, cy));
        }
        if cx + 1 < self.width && !self.cell(cx + 1, cy).visited {
            unvisited.push((cx + 1, cy));
        }
        if cy > 0 && !self.cell(cx, cy - 1).visited {
            unvisited.push((cx, cy - 1));
        }
        if cy + 1 < self.height && !self.cell(cx, cy + 1).visited {
            unvisited.push((cx, cy + 1));
        }
        unvisited.choose(rng).copied()
    }

    fn remove_wall(&mut self, (cx, cy): (usize, usize), (nx, ny): (usize, usize)) {
        if nx + 1 == cx {
            self.cell_mut(nx, ny).right = false;
        } else if cx + 1 == nx {
            self.cell_mut(cx, cy).right = false;
        } else if ny + 1 == cy {
            self.cell_mut(nx, ny).bottom = false;
        } else if cy + 1 == ny {
            self.cell_mut(cx, cy).bottom = false;
        }
    }

    /// Turns the logical grid into the wall/path raster. Pure: no randomness.
    pub fn rasterize(&self) -> MazeGrid {
        let columns = self.width * 2 + 1;
        let rows = self.height * 2 + 1;
        let mut tiles = Vec::with_capacity(rows * columns);

        tiles.resize(columns, WALL);
        for y in 0..self.height {
            tiles.push(WALL);
            for x in 0..self.width {
                tiles.push(PATH);
                tiles.push(if self.cell(x, y).right { WALL } else { PATH });
            }
            tiles.push(WALL);
            for x in 0..self.width {
                tiles.push(if self.cell(x, y).bottom { WALL } else { PATH });
                tiles.push(WALL);
            }
        }

        MazeGrid { rows, columns, tiles }
    }
}

/// Rasterized maze: `1` is a wall, `0` a path. Indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    rows: usize,
    columns: usize,
    tiles: Vec<u8>,
}

impl MazeGrid {
    /// Builds a grid from literal rows. All rows must have the same length.
    pub fn from_rows<const C: usize>(rows: &[[u8; C]]) -> Self {
        let tiles = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { rows: rows.len(), columns: C, tiles }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn columns(&self) -> usize { self.columns }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.tiles[row * self.columns..(row + 1) * self.columns]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.columns)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows {
            return None;
        }
        Some(self.tiles[y as usize * self.columns + x as usize])
    }

    /// Out of bounds counts as wall.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(PATH)
    }
}

/// Owns the random source and the most recently built raster grid.
pub struct MazeBuilder<R: Rng> {
    rng: R,
    width: usize,
    height: usize,
    grid: Option<MazeGrid>,
    passages_carved: usize,
}

impl<R: Rng> MazeBuilder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, width: 0, height: 0, grid: None, passages_carved: 0 }
    }

    /// Generates a new maze, replacing the previous one.
    /// Invalid dimensions leave the builder untouched.
    pub fn build(&mut self, width: i32, height: i32) -> Result<&MazeGrid, MazeError> {
        if width <= 0 {
            return Err(MazeError::InvalidWidth(width));
        }
        if height <= 0 {
            return Err(MazeError::InvalidHeight(height));
        }

        let (cells, carved) = CellGrid::generate(width as usize, height as usize, &mut self.rng);
        debug!("maze {width}x{height}: {carved} passages carved");

        self.width = cells.width();
        self.height = cells.height();
        self.passages_carved = carved;
        Ok(self.grid.insert(cells.rasterize()))
    }

    pub fn grid(&self) -> Option<&MazeGrid> { self.grid.as_ref() }

    /// `2 * height + 1`, or 0 before the first build.
    pub fn grid_rows(&self) -> usize {
        self.grid.as_ref().map_or(0, MazeGrid::rows)
    }

    /// `2 * width + 1`, or 0 before the first build.
    pub fn grid_columns(&self) -> usize {
        self.grid.as_ref().map_or(0, MazeGrid::columns)
    }

    pub fn dimensions(&self) -> (usize, usize) { (self.width, self.height) }
    pub fn passages_carved(&self) -> usize { self.passages_carved }

    pub fn rng_mut(&mut self) -> &mut R { &mut self.rng }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    fn builder(seed: u64) -> MazeBuilder<StdRng> {
        MazeBuilder::new(StdRng::seed_from_u64(seed))
    }

    fn open_cells(grid: &MazeGrid) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..grid.rows() as i32 {
            for x in 0..grid.columns() as i32 {
                if grid.is_open(x, y) { out.push((x, y)); }
            }
        }
        out
    }

    fn reachable_from(grid: &MazeGrid, start: (i32, i32)) -> usize {
        let mut seen = vec![false; grid.rows() * grid.columns()];
        let mut queue = VecDeque::from([start]);
        seen[start.1 as usize * grid.columns() + start.0 as usize] = true;
        let mut count = 0;
        while let Some((x, y)) = queue.pop_front() {
            count += 1;
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let (nx, ny) = (x + dx, y + dy);
                if grid.is_open(nx, ny) {
                    let idx = ny as usize * grid.columns() + nx as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
        count
    }

    #[test]
    fn every_open_tile_is_connected() {
        for (seed, w, h) in [(1, 1, 1), (2, 2, 2), (3, 7, 4), (4, 12, 9), (5, 1, 10), (6, 10, 1)] {
            let mut b = builder(seed);
            let grid = b.build(w, h).unwrap().clone();
            let open = open_cells(&grid);
            assert_eq!(reachable_from(&grid, open[0]), open.len(), "{w}x{h} not connected");
        }
    }

    #[test]
    fn carves_a_spanning_tree() {
        for (seed, w, h) in [(11, 1, 1), (12, 3, 3), (13, 8, 5), (14, 16, 16)] {
            let mut b = builder(seed);
            let grid = b.build(w, h).unwrap().clone();
            let cells = (w * h) as usize;
            assert_eq!(b.passages_carved(), cells - 1);

            // cells + carved edges are all open tiles; a tree has exactly n-1 edges
            assert_eq!(open_cells(&grid).len(), cells + cells - 1);
        }
    }

    #[test]
    fn border_is_solid() {
        let mut b = builder(21);
        let grid = b.build(9, 6).unwrap();
        let last_row = grid.rows() - 1;
        let last_col = grid.columns() - 1;
        assert!(grid.row(0).iter().all(|&t| t == WALL));
        assert!(grid.row(last_row).iter().all(|&t| t == WALL));
        for row in grid.rows_iter() {
            assert_eq!(row[0], WALL);
            assert_eq!(row[last_col], WALL);
        }
    }

    #[test]
    fn corners_are_walls_and_centres_are_open() {
        let mut b = builder(22);
        let grid = b.build(6, 5).unwrap();
        for y in 0..grid.rows() as i32 {
            for x in 0..grid.columns() as i32 {
                if x % 2 == 0 && y % 2 == 0 {
                    assert_eq!(grid.get(x, y), Some(WALL));
                }
                if x % 2 == 1 && y % 2 == 1 {
                    assert_eq!(grid.get(x, y), Some(PATH));
                }
            }
        }
    }

    #[test]
    fn rasterize_is_pure() {
        let mut rng = StdRng::seed_from_u64(31);
        let (cells, _) = CellGrid::generate(7, 3, &mut rng);
        assert_eq!(cells.rasterize(), cells.rasterize());
    }

    #[test]
    fn dimensions_follow_request() {
        let mut b = builder(41);
        assert_eq!(b.grid_rows(), 0);
        assert_eq!(b.grid_columns(), 0);
        for (w, h) in [(1, 1), (2, 5), (5, 2), (13, 8)] {
            b.build(w, h).unwrap();
            assert_eq!(b.grid_rows(), (2 * h + 1) as usize);
            assert_eq!(b.grid_columns(), (2 * w + 1) as usize);
            assert_eq!(b.dimensions(), (w as usize, h as usize));
        }
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let mut b = builder(51);
        let before = b.build(3, 3).unwrap().clone();

        assert_eq!(b.build(0, 5).unwrap_err(), MazeError::InvalidWidth(0));
        assert_eq!(b.build(5, 0).unwrap_err(), MazeError::InvalidHeight(0));
        assert_eq!(b.build(-1, -1).unwrap_err(), MazeError::InvalidWidth(-1));

        assert_eq!(b.grid(), Some(&before));
        assert_eq!(b.grid_rows(), 7);
        assert_eq!(b.passages_carved(), 8);
    }

    #[test]
    fn two_by_one_matches_logical_grid() {
        let seed = 61;
        let mut b = builder(seed);
        let grid = b.build(2, 1).unwrap().clone();

        let (cells, carved) = CellGrid::generate(2, 1, &mut StdRng::seed_from_u64(seed));
        assert_eq!(carved, 1);
        assert_eq!(cells.rasterize(), grid);

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.row(0), &[1, 1, 1, 1, 1]);
        assert_eq!(grid.row(2), &[1, 1, 1, 1, 1]);
        assert!(!cells.cell(0, 0).right);
        assert_eq!(grid.row(1), &[1, 0, 0, 0, 1]);
    }

    #[test]
    fn wall_removal_follows_offset() {
        let mut grid = CellGrid::new(2, 2);
        grid.remove_wall((1, 0), (0, 0));
        assert!(!grid.cell(0, 0).right);
        grid.remove_wall((0, 1), (0, 0));
        assert!(!grid.cell(0, 0).bottom);
        grid.remove_wall((0, 1), (1, 1));
        assert!(!grid.cell(0, 1).right);
        grid.remove_wall((1, 0), (1, 1));
        assert!(!grid.cell(1, 0).bottom);
        assert!(grid.cell(1, 1).right && grid.cell(1, 1).bottom);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = builder(71).build(10, 10).unwrap().clone();
        let b = builder(71).build(10, 10).unwrap().clone();
        assert_eq!(a, b);
    }

    #[test]
    fn neighbour_choice_is_uniform() {
        // From the centre of a 3x3 grid all four neighbours are candidates.
        let grid = CellGrid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(81);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let n = grid.choose_neighbour((1, 1), &mut rng).unwrap();
            let idx = match n {
                (0, 1) => 0,
                (2, 1) => 1,
                (1, 0) => 2,
                (1, 2) => 3,
                other => panic!("unexpected neighbour {other:?}"),
            };
            counts[idx] += 1;
        }
        for c in counts {
            assert!((800..1200).contains(&c), "skewed choice: {counts:?}");
        }
    }
}
