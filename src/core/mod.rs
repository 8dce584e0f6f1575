//! Game and demo logic, free of windowing.
//!
//! Re-exports:
//! - `maze`: perfect maze generation and rasterization
//! - `layout`: screen placement, start and goal of a maze
//! - `player`: tile-stepping maze player
//! - `maze_run`: random maze levels
//! - `fixed_maze`: the hand-drawn maze
//! - `arena`: four-player arena
//! - `led_wave`: LED wave sequence
//! - `pad_registry`: pad hot-plug tracking

pub mod maze;
pub mod layout;
pub mod player;
pub mod maze_run;
pub mod fixed_maze;
pub mod arena;
pub mod led_wave;
pub mod pad_registry;
