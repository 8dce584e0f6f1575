//! Runs a wave across the pad's LEDs.
use log::debug;

use crate::config::LED_WAVE_PERIOD;
use crate::core::led_wave::LedWave;
use crate::demos::{Demo, DemoError, Ticker};
use crate::pad::{Gamepad, NUM_LEDS};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette;

pub struct LedWaveDemo<P: Gamepad> {
    pad: P,
    wave: LedWave,
    ticker: Ticker,
    /// Mirror of what has been written, for the on-screen copy.
    leds: u8,
}

impl<P: Gamepad> LedWaveDemo<P> {
    /// Starts from dark LEDs.
    pub fn new(mut pad: P) -> Result<Self, DemoError> {
        pad.clear_leds()?;
        Ok(Self { pad, wave: LedWave::default(), ticker: Ticker::new(LED_WAVE_PERIOD), leds: 0 })
    }

    pub fn leds(&self) -> u8 { self.leds }
}

impl<P: Gamepad> Demo for LedWaveDemo<P> {
    fn update(&mut self, dt: f32) -> Result<(), DemoError> {
        if self.ticker.tick(dt) {
            let (led, on) = self.wave.step(&mut self.pad)?;
            debug!("led {led} -> {on}");
            let bit = 1 << (led - 1);
            if on { self.leds |= bit } else { self.leds &= !bit }
        }
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        fb.set_pen(palette::BLACK);
        fb.clear();

        let (width, height) = fb.bounds();
        let spacing = width / (NUM_LEDS as i32 + 1);
        for led in 0..NUM_LEDS {
            let lit = self.leds & (1 << led) != 0;
            let x = spacing * (led as i32 + 1);
            fb.set_pen(if lit { palette::GREEN } else { palette::GREY });
            fb.circle(x, height / 2, 20);
            fb.set_pen(palette::WHITE);
            fb.text(format!("{}", led + 1), x - 4, height / 2 + 30, 2);
        }
    }

    fn shutdown(&mut self) {
        let _ = self.pad.clear_leds();
        self.leds = 0;
    }
}
