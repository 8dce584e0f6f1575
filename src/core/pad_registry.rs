//! Hot-plug tracking for up to four pads on one bus.
use std::fmt::Write;

use log::{debug, info};

use crate::pad::{ADDRESSES, Gamepad, PadConnector};

pub struct PadRegistry<C: PadConnector> {
    connector: C,
    pads: [Option<C::Pad>; 4],
    /// LED state used to prove a registered pad still answers.
    active: bool,
}

impl<C: PadConnector> PadRegistry<C> {
    pub fn new(connector: C) -> Self {
        Self { connector, pads: [None, None, None, None], active: false }
    }

    /// One pass over every address: confirm registered pads, try to open the rest.
    /// Returns the status line, e.g. `0x21 ---- 0x25 ----`.
    pub fn poll(&mut self) -> String {
        let mut line = String::new();
        for (slot, &address) in self.pads.iter_mut().zip(ADDRESSES.iter()) {
            match slot {
                Some(pad) => {
                    let alive = if self.active {
                        let code = pad.address_code();
                        pad.set_leds(code)
                    } else {
                        pad.clear_leds()
                    };
                    if let Err(e) = alive {
                        info!("{e}");
                        *slot = None;
                    }
                }
                None => match self.connector.connect(address) {
                    Ok(pad) => {
                        info!("QwSTPad {address:#04x}: connected");
                        *slot = Some(pad);
                    }
                    Err(e) => debug!("{e}"),
                },
            }

            if slot.is_some() {
                let _ = write!(line, "{address:#04x} ");
            } else {
                line.push_str("---- ");
            }
        }
        self.active = !self.active;
        line.truncate(line.trim_end().len());
        line
    }

    pub fn is_connected(&self, address: u8) -> bool {
        ADDRESSES
            .iter()
            .position(|&a| a == address)
            .is_some_and(|i| self.pads[i].is_some())
    }

    /// Turns off the LEDs of every pad still registered, ignoring failures.
    pub fn shutdown(&mut self) {
        for pad in self.pads.iter_mut().flatten() {
            let _ = pad.clear_leds();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::mock::MockBus;

    #[test]
    fn tracks_plug_and_unplug() {
        let bus = MockBus::with_connected(&[0, 2]);
        let mut reg = PadRegistry::new(bus.clone());

        assert_eq!(reg.poll(), "0x21 ---- 0x25 ----");
        assert!(reg.is_connected(0x21));
        assert!(!reg.is_connected(0x23));

        bus.set_connected(1, true);
        bus.set_connected(2, false);
        assert_eq!(reg.poll(), "0x21 0x23 ---- ----");
        assert!(!reg.is_connected(0x25));
    }

    #[test]
    fn registered_pads_blink_their_address_code() {
        let bus = MockBus::with_connected(&[1]);
        let mut reg = PadRegistry::new(bus.clone());

        reg.poll(); // connects, active was false
        reg.poll(); // active: show code
        assert_eq!(bus.leds(1), 0b0010);
        reg.poll(); // inactive: clear
        assert_eq!(bus.leds(1), 0);
        reg.poll();
        assert_eq!(bus.leds(1), 0b0010);

        reg.shutdown();
        assert_eq!(bus.leds(1), 0);
    }

    #[test]
    fn shutdown_ignores_lost_pads() {
        let bus = MockBus::with_connected(&[0]);
        let mut reg = PadRegistry::new(bus.clone());
        reg.poll();
        bus.set_connected(0, false);
        reg.shutdown();
        assert_eq!(reg.poll(), "---- ---- ---- ----");
    }
}
