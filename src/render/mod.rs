//! Display side: framebuffer, pens and per-demo drawing.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer with the display's drawing calls
//! - `palette`: RGB565 pens
//! - `maze_view`: fixed and random maze frames
//! - `arena_view`: arena frame
//! - `pad_view`: simulated pad strip under the display

pub mod framebuffer;
pub mod palette;
pub mod maze_view;
pub mod arena_view;
pub mod pad_view;
