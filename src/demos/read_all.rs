//! Prints the state of every button ten times a second.
use std::fmt::Write;

use crate::config::READ_ALL_PERIOD;
use crate::demos::{Demo, DemoError, Ticker};
use crate::pad::{Buttons, Gamepad};
use crate::render::framebuffer::{FONT_HEIGHT, Framebuffer};
use crate::render::palette;

/// `U = 0, L = 1, ...` with the trailing separator kept.
pub fn format_buttons(buttons: &Buttons) -> String {
    let mut line = String::new();
    for (button, pressed) in buttons.iter() {
        let _ = write!(line, "{} = {}, ", button.label(), pressed as u8);
    }
    line
}

pub struct ReadAll<P: Gamepad> {
    pad: P,
    ticker: Ticker,
    buttons: Buttons,
}

impl<P: Gamepad> ReadAll<P> {
    pub fn new(pad: P) -> Self {
        Self { pad, ticker: Ticker::new(READ_ALL_PERIOD), buttons: Buttons::default() }
    }

    pub fn buttons(&self) -> &Buttons { &self.buttons }
}

impl<P: Gamepad> Demo for ReadAll<P> {
    fn update(&mut self, dt: f32) -> Result<(), DemoError> {
        if self.ticker.tick(dt) {
            self.buttons = self.pad.read_buttons()?;
            println!("{}", format_buttons(&self.buttons));
        }
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        fb.set_pen(palette::BLACK);
        fb.clear();

        let scale = 2;
        for (row, (button, pressed)) in self.buttons.iter().enumerate() {
            let y = 10 + row as i32 * (FONT_HEIGHT * scale + 4);
            fb.set_pen(if pressed { palette::GREEN } else { palette::GREY });
            fb.rectangle(10, y, FONT_HEIGHT * scale, FONT_HEIGHT * scale);
            fb.set_pen(palette::WHITE);
            fb.text(format!("{} = {}", button.label(), pressed as u8), 40, y, scale);
        }
    }

    fn shutdown(&mut self) {
        let _ = self.pad.clear_leds();
    }
}
