//! Wave pattern across a pad's four LEDs.
use crate::pad::{Gamepad, NUM_LEDS, PadError};

/// Lights LEDs 1 to 4 one after another, then turns them off in the same order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedWave {
    led: u8,
    active: bool,
}

impl Default for LedWave {
    fn default() -> Self {
        Self { led: 1, active: true }
    }
}

impl LedWave {
    /// Writes the next LED and advances. Returns the LED and the state it was set to.
    pub fn step<P: Gamepad + ?Sized>(&mut self, pad: &mut P) -> Result<(u8, bool), PadError> {
        let written = (self.led, self.active);
        pad.set_led(self.led, self.active)?;

        self.led += 1;
        if self.led > NUM_LEDS {
            self.led = 1;
            self.active = !self.active;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::PadConnector;
    use crate::pad::mock::MockBus;

    #[test]
    fn fills_then_empties() {
        let mut bus = MockBus::with_connected(&[0]);
        let mut pad = bus.connect(0x21).unwrap();
        let mut wave = LedWave::default();

        let written: Vec<(u8, bool)> = (0..9).map(|_| wave.step(&mut pad).unwrap()).collect();
        assert_eq!(
            written,
            vec![
                (1, true), (2, true), (3, true), (4, true),
                (1, false), (2, false), (3, false), (4, false),
                (1, true),
            ]
        );
        let leds = bus.slots.borrow()[0].led_writes.clone();
        assert_eq!(leds, vec![0b0001, 0b0011, 0b0111, 0b1111, 0b1110, 0b1100, 0b1000, 0b0000, 0b0001]);
    }

    #[test]
    fn failed_write_does_not_advance() {
        let mut bus = MockBus::with_connected(&[0]);
        let mut pad = bus.connect(0x21).unwrap();
        let mut wave = LedWave::default();
        wave.step(&mut pad).unwrap();

        bus.set_connected(0, false);
        assert_eq!(wave.step(&mut pad), Err(PadError::Disconnected(0x21)));
        bus.set_connected(0, true);
        assert_eq!(wave.step(&mut pad), Ok((2, true)));
    }
}
