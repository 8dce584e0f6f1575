//! QwSTPad capability: button record, pad traits and errors.
//!
//! Re-exports:
//! - `sim`: simulated I2C bus driven by keyboard keys and host gamepads

pub mod sim;

use std::fmt;

/// Bus addresses a QwSTPad can be jumpered to, in player order.
pub const ADDRESSES: [u8; 4] = [0x21, 0x23, 0x25, 0x27];
pub const DEFAULT_ADDRESS: u8 = ADDRESSES[0];
pub const NUM_LEDS: u8 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PadError {
    /// Nothing answered at the address when connecting.
    NotConnected(u8),
    /// A pad that was connected stopped answering.
    Disconnected(u8),
    /// LEDs are numbered 1 to `NUM_LEDS`.
    InvalidLed(u8),
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadError::NotConnected(addr) => write!(f, "no QwSTPad at {addr:#04x}"),
            PadError::Disconnected(addr) => write!(f, "QwSTPad at {addr:#04x} disconnected"),
            PadError::InvalidLed(led) => {
                write!(f, "led out of range ({led}). Expected 1 to {NUM_LEDS}")
            }
        }
    }
}

impl std::error::Error for PadError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Left,
    Right,
    Down,
    A,
    B,
    X,
    Y,
    Plus,
    Minus,
}

impl Button {
    pub const ALL: [Button; 10] = [
        Button::Up,
        Button::Left,
        Button::Right,
        Button::Down,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::Plus,
        Button::Minus,
    ];

    /// Label printed on the pad.
    pub fn label(self) -> char {
        match self {
            Button::Up => 'U',
            Button::Left => 'L',
            Button::Right => 'R',
            Button::Down => 'D',
            Button::A => 'A',
            Button::B => 'B',
            Button::X => 'X',
            Button::Y => 'Y',
            Button::Plus => '+',
            Button::Minus => '-',
        }
    }
}

/// Snapshot of every button on one pad.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Buttons {
    pub up: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub a: bool,
    pub b: bool,
    pub x: bool,
    pub y: bool,
    pub plus: bool,
    pub minus: bool,
}

impl Buttons {
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Down => self.down,
            Button::A => self.a,
            Button::B => self.b,
            Button::X => self.x,
            Button::Y => self.y,
            Button::Plus => self.plus,
            Button::Minus => self.minus,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        let slot = match button {
            Button::Up => &mut self.up,
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
            Button::Down => &mut self.down,
            Button::A => &mut self.a,
            Button::B => &mut self.b,
            Button::X => &mut self.x,
            Button::Y => &mut self.y,
            Button::Plus => &mut self.plus,
            Button::Minus => &mut self.minus,
        };
        *slot = pressed;
    }

    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Button, bool)> + '_ {
        Button::ALL.into_iter().map(|b| (b, self.is_pressed(b)))
    }

    pub fn any(&self) -> bool {
        self.iter().any(|(_, pressed)| pressed)
    }
}

/// LED pattern that identifies the pad at `address`: bit `i` for `ADDRESSES[i]`.
pub fn address_code(address: u8) -> u8 {
    address_index(address).map_or(0, |i| 1 << i)
}

pub fn address_index(address: u8) -> Option<usize> {
    ADDRESSES.iter().position(|&a| a == address)
}

pub trait Gamepad {
    fn address(&self) -> u8;
    fn read_buttons(&mut self) -> Result<Buttons, PadError>;
    /// `led` is 1-based.
    fn set_led(&mut self, led: u8, on: bool) -> Result<(), PadError>;
    /// Bit 0 drives LED 1.
    fn set_leds(&mut self, bits: u8) -> Result<(), PadError>;

    fn clear_leds(&mut self) -> Result<(), PadError> {
        self.set_leds(0)
    }

    fn address_code(&self) -> u8 {
        address_code(self.address())
    }
}

/// Opens pads on a bus.
pub trait PadConnector {
    type Pad: Gamepad;
    fn connect(&mut self, address: u8) -> Result<Self::Pad, PadError>;
}

pub(crate) fn check_led(led: u8) -> Result<u8, PadError> {
    if (1..=NUM_LEDS).contains(&led) {
        Ok(1 << (led - 1))
    } else {
        Err(PadError::InvalidLed(led))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory pads for exercising the demos without a window.
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default, Debug)]
    pub struct MockSlot {
        pub connected: bool,
        pub buttons: Buttons,
        /// Consumed one per read before falling back to `buttons`.
        pub script: VecDeque<Buttons>,
        pub leds: u8,
        pub led_writes: Vec<u8>,
    }

    #[derive(Clone, Default)]
    pub struct MockBus {
        pub slots: Rc<RefCell<[MockSlot; 4]>>,
    }

    impl MockBus {
        pub fn with_connected(indices: &[usize]) -> Self {
            let bus = MockBus::default();
            for &i in indices {
                bus.slots.borrow_mut()[i].connected = true;
            }
            bus
        }

        pub fn set_connected(&self, index: usize, connected: bool) {
            self.slots.borrow_mut()[index].connected = connected;
        }

        pub fn press(&self, index: usize, buttons: Buttons) {
            self.slots.borrow_mut()[index].buttons = buttons;
        }

        pub fn leds(&self, index: usize) -> u8 {
            self.slots.borrow()[index].leds
        }
    }

    pub struct MockPad {
        bus: MockBus,
        index: usize,
    }

    impl MockPad {
        fn slot<T>(&self, f: impl FnOnce(&mut MockSlot) -> T) -> Result<T, PadError> {
            let mut slots = self.bus.slots.borrow_mut();
            let slot = &mut slots[self.index];
            if !slot.connected {
                return Err(PadError::Disconnected(ADDRESSES[self.index]));
            }
            Ok(f(slot))
        }
    }

    impl Gamepad for MockPad {
        fn address(&self) -> u8 { ADDRESSES[self.index] }

        fn read_buttons(&mut self) -> Result<Buttons, PadError> {
            self.slot(|s| s.script.pop_front().unwrap_or(s.buttons))
        }

        fn set_led(&mut self, led: u8, on: bool) -> Result<(), PadError> {
            let bit = check_led(led)?;
            self.slot(|s| {
                if on { s.leds |= bit } else { s.leds &= !bit }
                s.led_writes.push(s.leds);
            })
        }

        fn set_leds(&mut self, bits: u8) -> Result<(), PadError> {
            self.slot(|s| {
                s.leds = bits & 0x0F;
                s.led_writes.push(s.leds);
            })
        }
    }

    impl PadConnector for MockBus {
        type Pad = MockPad;

        fn connect(&mut self, address: u8) -> Result<MockPad, PadError> {
            let index = address_index(address).ok_or(PadError::NotConnected(address))?;
            if !self.slots.borrow()[index].connected {
                return Err(PadError::NotConnected(address));
            }
            Ok(MockPad { bus: self.clone(), index })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_codes_are_one_hot() {
        assert_eq!(address_code(0x21), 0b0001);
        assert_eq!(address_code(0x23), 0b0010);
        assert_eq!(address_code(0x25), 0b0100);
        assert_eq!(address_code(0x27), 0b1000);
        assert_eq!(address_code(0x42), 0);
    }

    #[test]
    fn led_numbers_are_checked() {
        assert_eq!(check_led(1), Ok(0b0001));
        assert_eq!(check_led(4), Ok(0b1000));
        assert_eq!(check_led(0), Err(PadError::InvalidLed(0)));
        assert_eq!(check_led(5), Err(PadError::InvalidLed(5)));
    }

    #[test]
    fn buttons_iterate_in_pad_order() {
        let b = Buttons::default().with(Button::Left).with(Button::Plus);
        let labels: String = b.iter().map(|(btn, _)| btn.label()).collect();
        assert_eq!(labels, "ULRDABXY+-");
        let pressed: Vec<Button> = b.iter().filter(|(_, p)| *p).map(|(btn, _)| btn).collect();
        assert_eq!(pressed, vec![Button::Left, Button::Plus]);
        assert!(b.any());
        assert!(!Buttons::default().any());
    }
}
