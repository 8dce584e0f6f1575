//! QwSTPad demos on a simulated handheld: a 320x240 display and up to four
//! pads on one bus.

pub mod config;
pub mod logger;
pub mod pad;
pub mod core;
pub mod render;
pub mod demos;
