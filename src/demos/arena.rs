//! Up to four players turning, driving and shooting in one arena.
use log::info;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::arena::Arena;
use crate::demos::{Demo, DemoError};
use crate::pad::{ADDRESSES, Buttons, Gamepad, PadConnector, PadError};
use crate::render::arena_view::draw_arena;
use crate::render::framebuffer::Framebuffer;

pub struct ArenaDemo<P: Gamepad> {
    pads: Vec<P>,
    arena: Arena,
    buttons: Vec<Buttons>,
}

impl<P: Gamepad> ArenaDemo<P> {
    /// One player per pad that answers now. Pads plugged in later are ignored.
    pub fn connect<C: PadConnector<Pad = P>>(connector: &mut C) -> Result<Self, PadError> {
        let mut pads = Vec::new();
        let mut indices = Vec::new();
        for (i, &address) in ADDRESSES.iter().enumerate() {
            match connector.connect(address) {
                Ok(pad) => {
                    info!("P{}: Connected", i + 1);
                    pads.push(pad);
                    indices.push(i);
                }
                Err(_) => info!("P{}: Not Connected", i + 1),
            }
        }
        if pads.is_empty() {
            return Err(PadError::NotConnected(ADDRESSES[0]));
        }

        Ok(Self {
            buttons: vec![Buttons::default(); pads.len()],
            arena: Arena::new(&indices, SCREEN_WIDTH, SCREEN_HEIGHT),
            pads,
        })
    }

    pub fn arena(&self) -> &Arena { &self.arena }
}

impl<P: Gamepad> Demo for ArenaDemo<P> {
    fn update(&mut self, _dt: f32) -> Result<(), DemoError> {
        for (pad, buttons) in self.pads.iter_mut().zip(self.buttons.iter_mut()) {
            *buttons = pad.read_buttons()?;
        }
        self.arena.update(&self.buttons);
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        draw_arena(fb, &self.arena);
        self.arena.clear_hits();
    }

    fn shutdown(&mut self) {
        for pad in &mut self.pads {
            let _ = pad.clear_leds();
        }
    }
}
