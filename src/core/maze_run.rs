//! Random maze game: each completed maze leads to a larger one.
use log::info;
use rand::Rng;

use crate::core::layout::MazeLayout;
use crate::core::maze::{MazeBuilder, MazeError, MazeGrid};
use crate::core::player::MazePlayer;
use crate::pad::Buttons;

pub const MIN_MAZE_WIDTH: i32 = 2;
pub const MAX_MAZE_WIDTH: i32 = 5;
pub const MIN_MAZE_HEIGHT: i32 = 2;
pub const MAX_MAZE_HEIGHT: i32 = 5;
/// Extra cells per level on each axis.
pub const DIFFICULTY_SCALE: f32 = 0.5;

pub fn difficulty(level: u32) -> i32 {
    (level as f32 * DIFFICULTY_SCALE) as i32
}

pub struct MazeRun<R: Rng> {
    builder: MazeBuilder<R>,
    grid: MazeGrid,
    layout: MazeLayout,
    pub player: MazePlayer,
    level: u32,
    complete: bool,
    screen: (i32, i32),
}

impl<R: Rng> MazeRun<R> {
    /// Builds the level 0 maze for a screen of the given size.
    pub fn new(rng: R, screen_w: i32, screen_h: i32) -> Result<Self, MazeError> {
        let mut builder = MazeBuilder::new(rng);
        let (grid, layout) = Self::build_level(&mut builder, 0, screen_w, screen_h)?;
        Ok(Self {
            builder,
            grid,
            player: MazePlayer::new(layout.start),
            layout,
            level: 0,
            complete: false,
            screen: (screen_w, screen_h),
        })
    }

    fn build_level(
        builder: &mut MazeBuilder<R>,
        level: u32,
        screen_w: i32,
        screen_h: i32,
    ) -> Result<(MazeGrid, MazeLayout), MazeError> {
        let extra = difficulty(level);
        let width = builder.rng_mut().gen_range(MIN_MAZE_WIDTH..MAX_MAZE_WIDTH) + extra;
        let height = builder.rng_mut().gen_range(MIN_MAZE_HEIGHT..MAX_MAZE_HEIGHT) + extra;
        let grid = builder.build(width, height)?.clone();
        let layout = MazeLayout::for_grid(&grid, screen_w, screen_h);
        info!("level {level}: {width}x{height} maze, {}px tiles", layout.wall_separation);
        Ok((grid, layout))
    }

    /// Moves the player, or waits for `+` once the goal is reached.
    pub fn update(&mut self, buttons: &Buttons, dt: f32) -> Result<(), MazeError> {
        if !self.complete {
            self.player.update(&self.grid, buttons, dt);
            if self.player.is_at(self.layout.goal) {
                info!("level {} complete", self.level);
                self.complete = true;
            }
        } else if buttons.plus {
            self.next_level()?;
        }
        Ok(())
    }

    pub fn next_level(&mut self) -> Result<(), MazeError> {
        let level = self.level + 1;
        let (grid, layout) = Self::build_level(&mut self.builder, level, self.screen.0, self.screen.1)?;
        self.grid = grid;
        self.layout = layout;
        self.level = level;
        self.complete = false;
        self.player.place(layout.start);
        Ok(())
    }

    pub fn grid(&self) -> &MazeGrid { &self.grid }
    pub fn layout(&self) -> &MazeLayout { &self.layout }
    pub fn level(&self) -> u32 { self.level }
    pub fn is_complete(&self) -> bool { self.complete }
    pub fn builder(&self) -> &MazeBuilder<R> { &self.builder }
}
