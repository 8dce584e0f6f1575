//! One `Demo` per program: pads in, frames out.
//!
//! Re-exports:
//! - `read_all`: print every button
//! - `led_wave`: wave across the LEDs
//! - `pad_detect`: hot-plug status of all four addresses
//! - `arena`: four-player arena
//! - `maze`: fixed maze and random maze games

pub mod read_all;
pub mod led_wave;
pub mod pad_detect;
pub mod arena;
pub mod maze;

use std::fmt;

use crate::core::maze::MazeError;
use crate::pad::{Gamepad, PadConnector, PadError};
use crate::render::framebuffer::Framebuffer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DemoError {
    Pad(PadError),
    Maze(MazeError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Pad(e) => e.fmt(f),
            DemoError::Maze(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DemoError::Pad(e) => Some(e),
            DemoError::Maze(e) => Some(e),
        }
    }
}

impl From<PadError> for DemoError {
    fn from(e: PadError) -> Self {
        DemoError::Pad(e)
    }
}

impl From<MazeError> for DemoError {
    fn from(e: MazeError) -> Self {
        DemoError::Maze(e)
    }
}

pub trait Demo {
    /// Advances by `dt` seconds. An error ends the run.
    fn update(&mut self, dt: f32) -> Result<(), DemoError>;
    fn draw(&mut self, fb: &mut Framebuffer);
    /// Leaves the hardware tidy. Errors are swallowed; the pad may be gone.
    fn shutdown(&mut self) {}
}

/// Fires once every `period` seconds of accumulated frame time.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    period: f32,
    elapsed: f32,
}

impl Ticker {
    /// The first `tick` fires immediately.
    pub fn new(period: f32) -> Self {
        Self { period, elapsed: period }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        let is_done = self.elapsed >= self.period;
        if is_done {
            self.elapsed = 0.0;
        }
        is_done
    }
}

/// Opens the single pad a one-player demo needs.
pub fn connect_one<C: PadConnector>(connector: &mut C, address: u8) -> Result<C::Pad, PadError> {
    let pad = connector.connect(address)?;
    log::info!("QwSTPad {:#04x}: connected", pad.address());
    Ok(pad)
}
