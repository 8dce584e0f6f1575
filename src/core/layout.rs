//! Where a maze sits on screen, plus its start and goal tiles.
use crate::core::maze::MazeGrid;

/// Pixels left between neighbouring wall tiles.
pub const WALL_GAP: i32 = 1;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Produced alongside every built maze and handed to the renderer and the walker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    pub wall_separation: i32,
    pub wall_size: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub start: Position,
    pub goal: Position,
}

impl MazeLayout {
    /// Fits a `rows x columns` raster into the screen, centred.
    pub fn fit(rows: usize, columns: usize, screen_w: i32, screen_h: i32) -> Self {
        let rows = rows as i32;
        let columns = columns as i32;
        let wall_separation = (screen_h / rows).min(screen_w / columns);
        Self {
            wall_separation,
            wall_size: wall_separation - WALL_GAP,
            offset_x: (screen_w - columns * wall_separation + WALL_GAP) / 2,
            offset_y: (screen_h - rows * wall_separation + WALL_GAP) / 2,
            // bottom-left and top-right cells
            start: Position::new(1, rows - 2),
            goal: Position::new(columns - 2, 1),
        }
    }

    pub fn for_grid(grid: &MazeGrid, screen_w: i32, screen_h: i32) -> Self {
        Self::fit(grid.rows(), grid.columns(), screen_w, screen_h)
    }

    pub fn to_screen(&self, pos: Position) -> (i32, i32) {
        (
            pos.x * self.wall_separation + self.offset_x,
            pos.y * self.wall_separation + self.offset_y,
        )
    }
}
