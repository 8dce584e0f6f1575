//! Shows which of the four addresses have a pad, tolerating hot-plugging.
use crate::config::PAD_DETECT_PERIOD;
use crate::core::pad_registry::PadRegistry;
use crate::demos::{Demo, DemoError, Ticker};
use crate::pad::{ADDRESSES, PadConnector};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette;

pub struct PadDetect<C: PadConnector> {
    registry: PadRegistry<C>,
    ticker: Ticker,
    status: String,
}

impl<C: PadConnector> PadDetect<C> {
    pub fn new(connector: C) -> Self {
        Self { registry: PadRegistry::new(connector), ticker: Ticker::new(PAD_DETECT_PERIOD), status: String::new() }
    }

    pub fn status(&self) -> &str { &self.status }
}

impl<C: PadConnector> Demo for PadDetect<C> {
    /// Never fails: lost pads are dropped and retried on later polls.
    fn update(&mut self, dt: f32) -> Result<(), DemoError> {
        if self.ticker.tick(dt) {
            self.status = self.registry.poll();
            println!("QwSTPads: {}", self.status);
        }
        Ok(())
    }

    fn draw(&mut self, fb: &mut Framebuffer) {
        fb.set_pen(palette::BLACK);
        fb.clear();

        fb.set_pen(palette::WHITE);
        fb.text("QwSTPads", 10, 10, 3);
        for (i, &address) in ADDRESSES.iter().enumerate() {
            let y = 50 + i as i32 * 40;
            let connected = self.registry.is_connected(address);
            fb.set_pen(if connected { palette::PLAYER_COLOURS[i] } else { palette::GREY });
            fb.rectangle(10, y, 24, 24);
            fb.set_pen(palette::WHITE);
            let label = if connected { format!("{address:#04x}") } else { "----".to_string() };
            fb.text(label, 50, y + 4, 2);
        }
    }

    fn shutdown(&mut self) {
        self.registry.shutdown();
    }
}
