//! Maze player: steps one tile at a time through open raster tiles.
use crate::core::layout::Position;
use crate::core::maze::MazeGrid;
use crate::pad::Buttons;

/// Pause after a step so a held direction does not fly through the maze.
pub const MOVEMENT_SLEEP: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct MazePlayer {
    pub pos: Position,
    cooldown: f32,
}

impl MazePlayer {
    pub fn new(pos: Position) -> Self {
        Self { pos, cooldown: 0.0 }
    }

    pub fn place(&mut self, pos: Position) {
        self.pos = pos;
        self.cooldown = 0.0;
    }

    /// Applies held directions in L, R, U, D order. Returns true if the player moved.
    pub fn update(&mut self, maze: &MazeGrid, buttons: &Buttons, dt: f32) -> bool {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if self.cooldown > 0.0 {
            return false;
        }

        let mut moved = false;
        let steps = [
            (buttons.left, -1, 0),
            (buttons.right, 1, 0),
            (buttons.up, 0, -1),
            (buttons.down, 0, 1),
        ];
        for (held, dx, dy) in steps {
            if held && maze.is_open(self.pos.x + dx, self.pos.y + dy) {
                self.pos.x += dx;
                self.pos.y += dy;
                moved = true;
            }
        }

        if moved {
            self.cooldown = MOVEMENT_SLEEP;
        }
        moved
    }

    pub fn is_at(&self, pos: Position) -> bool {
        self.pos == pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::Button;

    fn corridor() -> MazeGrid {
        MazeGrid::from_rows(&[
            [1, 1, 1, 1, 1],
            [1, 0, 0, 0, 1],
            [1, 0, 1, 1, 1],
            [1, 1, 1, 1, 1],
        ])
    }

    #[test]
    fn walls_block_movement() {
        let maze = corridor();
        let mut p = MazePlayer::new(Position::new(1, 1));
        assert!(!p.update(&maze, &Buttons::default().with(Button::Up), 0.016));
        assert!(!p.update(&maze, &Buttons::default().with(Button::Left), 0.016));
        assert_eq!(p.pos, Position::new(1, 1));
    }

    #[test]
    fn cooldown_spaces_out_steps() {
        let maze = corridor();
        let right = Buttons::default().with(Button::Right);
        let mut p = MazePlayer::new(Position::new(1, 1));

        assert!(p.update(&maze, &right, 0.016));
        assert_eq!(p.pos, Position::new(2, 1));

        // still cooling down
        assert!(!p.update(&maze, &right, 0.05));
        assert_eq!(p.pos, Position::new(2, 1));
        assert!(!p.update(&maze, &right, 0.04));

        assert!(p.update(&maze, &right, 0.016));
        assert_eq!(p.pos, Position::new(3, 1));
    }

    #[test]
    fn each_held_direction_gets_a_try() {
        let maze = corridor();
        let held = Buttons::default().with(Button::Left).with(Button::Down);
        let mut p = MazePlayer::new(Position::new(2, 1));
        assert!(p.update(&maze, &held, 0.016));
        assert_eq!(p.pos, Position::new(1, 2));
    }
}
