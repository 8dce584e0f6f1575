//! Maze games: the hand-drawn maze and endless random levels.
use rand::Rng;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::fixed_maze::FixedMaze;
use crate::core::maze_run::MazeRun;
use crate::demos::{Demo, DemoError};
use crate::pad::Gamepad;
use crate::render::framebuffer::Framebuffer;
use crate::render::maze_view::{draw_fixed_maze, draw_random_maze};

pub struct FixedMazeDemo<P: Gamepad> {
    pad: P,
    game: FixedMaze,
}

impl<P: Gamepad> FixedMazeDemo<P> {
    pub fn new(pad: P) -> Self {
        Self { pad, game: FixedMaze::new() }
    }

    pub fn game(&self) -> &FixedMaze { &self.game }
}

impl<P: Gamepad> Demo for FixedMazeDemo<P> {
    fn update(&mut self, dt: f32) -> Result<(), DemoError> {
        let buttons = self.pad.read_buttons()?;
        self.game.update(&buttons, dt);
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        draw_fixed_maze(fb, &self.game);
    }

    fn shutdown(&mut self) {
        let _ = self.pad.clear_leds();
    }
}

pub struct RandomMazeDemo<P: Gamepad, R: Rng> {
    pad: P,
    run: MazeRun<R>,
}

impl<P: Gamepad, R: Rng> RandomMazeDemo<P, R> {
    pub fn new(pad: P, rng: R) -> Result<Self, DemoError> {
        let run = MazeRun::new(rng, SCREEN_WIDTH, SCREEN_HEIGHT)?;
        Ok(Self { pad, run })
    }

    pub fn run(&self) -> &MazeRun<R> { &self.run }
}

impl<P: Gamepad, R: Rng> Demo for RandomMazeDemo<P, R> {
    fn update(&mut self, dt: f32) -> Result<(), DemoError> {
        let buttons = self.pad.read_buttons()?;
        self.run.update(&buttons, dt)?;
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        let run = &self.run;
        draw_random_maze(fb, run.grid(), run.layout(), run.player.pos, run.level(), run.is_complete());
    }

    fn shutdown(&mut self) {
        let _ = self.pad.clear_leds();
    }
}
