//! Device constants and per-run settings.

/// Pico Display 2.0 resolution.
pub const SCREEN_WIDTH: i32 = 320;
pub const SCREEN_HEIGHT: i32 = 240;

/// Window pixels per display pixel unless overridden on the command line.
pub const DEFAULT_SCALE: i32 = 3;

/// Height of the simulated pad strip drawn under the display, in window pixels.
pub const PAD_STRIP_HEIGHT: i32 = 72;

/// ~60 FPS
pub const FRAME_MS: u64 = 16;

pub const BRIGHTNESS: f32 = 1.0;

/// Seconds between prints in the read-all demo.
pub const READ_ALL_PERIOD: f32 = 0.1;
/// Seconds between LED updates in the LED wave demo.
pub const LED_WAVE_PERIOD: f32 = 0.2;
/// Seconds between connection checks in the pad detect demo.
pub const PAD_DETECT_PERIOD: f32 = 0.2;

/// Everything the demos need to know about this run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub seed: u64,
    pub scale: i32,
    pub pads: usize,
}

impl Settings {
    pub fn window_size(&self) -> (i32, i32) {
        (SCREEN_WIDTH * self.scale, SCREEN_HEIGHT * self.scale + PAD_STRIP_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_leaves_room_for_the_pad_strip() {
        let s = Settings { seed: 0, scale: 2, pads: 1 };
        assert_eq!(s.window_size(), (640, 480 + PAD_STRIP_HEIGHT));
    }
}
