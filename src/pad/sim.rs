//! Simulated I2C bus: four pad slots fed from the keyboard and host gamepads.
//!
//! Each slot answers at one of `ADDRESSES`. F1-F4 plug and unplug the slots so
//! connection handling can be exercised without hardware.
use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use raylib::prelude::*;

use super::{ADDRESSES, Button, Buttons, Gamepad, PadConnector, PadError, address_index, check_led};

const HOTPLUG_KEYS: [KeyboardKey; 4] = [
    KeyboardKey::KEY_F1,
    KeyboardKey::KEY_F2,
    KeyboardKey::KEY_F3,
    KeyboardKey::KEY_F4,
];

// Order matches `Button::ALL`: U L R D A B X Y + -
const KEYMAPS: [[KeyboardKey; 10]; 4] = [
    [
        KeyboardKey::KEY_W,
        KeyboardKey::KEY_A,
        KeyboardKey::KEY_D,
        KeyboardKey::KEY_S,
        KeyboardKey::KEY_E,
        KeyboardKey::KEY_Q,
        KeyboardKey::KEY_R,
        KeyboardKey::KEY_F,
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
    ],
    [
        KeyboardKey::KEY_I,
        KeyboardKey::KEY_J,
        KeyboardKey::KEY_L,
        KeyboardKey::KEY_K,
        KeyboardKey::KEY_O,
        KeyboardKey::KEY_U,
        KeyboardKey::KEY_P,
        KeyboardKey::KEY_H,
        KeyboardKey::KEY_NINE,
        KeyboardKey::KEY_ZERO,
    ],
    [
        KeyboardKey::KEY_UP,
        KeyboardKey::KEY_LEFT,
        KeyboardKey::KEY_RIGHT,
        KeyboardKey::KEY_DOWN,
        KeyboardKey::KEY_RIGHT_SHIFT,
        KeyboardKey::KEY_RIGHT_CONTROL,
        KeyboardKey::KEY_ENTER,
        KeyboardKey::KEY_BACKSPACE,
        KeyboardKey::KEY_EQUAL,
        KeyboardKey::KEY_MINUS,
    ],
    [
        KeyboardKey::KEY_KP_8,
        KeyboardKey::KEY_KP_4,
        KeyboardKey::KEY_KP_6,
        KeyboardKey::KEY_KP_5,
        KeyboardKey::KEY_KP_9,
        KeyboardKey::KEY_KP_7,
        KeyboardKey::KEY_KP_1,
        KeyboardKey::KEY_KP_3,
        KeyboardKey::KEY_KP_ADD,
        KeyboardKey::KEY_KP_SUBTRACT,
    ],
];

const PAD_BUTTONS: [GamepadButton; 10] = [
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_UP,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_LEFT,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_LEFT_FACE_DOWN,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_UP,
    GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_LEFT,
    GamepadButton::GAMEPAD_BUTTON_MIDDLE_RIGHT,
    GamepadButton::GAMEPAD_BUTTON_MIDDLE_LEFT,
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotState {
    pub connected: bool,
    pub buttons: Buttons,
    pub leds: u8,
}

/// Cheap handle to the shared bus; clones see the same slots.
#[derive(Clone, Default)]
pub struct SimBus {
    slots: Rc<RefCell<[SlotState; 4]>>,
}

impl SimBus {
    /// Plugs in the first `count` slots.
    pub fn new(count: usize) -> Self {
        let bus = SimBus::default();
        for slot in bus.slots.borrow_mut().iter_mut().take(count) {
            slot.connected = true;
        }
        bus
    }

    pub fn slot(&self, index: usize) -> SlotState {
        self.slots.borrow()[index]
    }

    pub fn snapshot(&self) -> [SlotState; 4] {
        *self.slots.borrow()
    }

    pub fn set_connected(&self, index: usize, connected: bool) {
        let mut slots = self.slots.borrow_mut();
        let slot = &mut slots[index];
        if slot.connected != connected {
            info!("bus: {:#04x} {}", ADDRESSES[index], if connected { "plugged in" } else { "unplugged" });
        }
        slot.connected = connected;
        if !connected {
            slot.buttons = Buttons::default();
            slot.leds = 0;
        }
    }

    pub fn set_buttons(&self, index: usize, buttons: Buttons) {
        self.slots.borrow_mut()[index].buttons = buttons;
    }

    /// Reads the keyboard and host gamepads into the slots. Call once per frame.
    pub fn sample(&self, rl: &RaylibHandle) {
        for index in 0..ADDRESSES.len() {
            if rl.is_key_pressed(HOTPLUG_KEYS[index]) {
                let connected = self.slot(index).connected;
                self.set_connected(index, !connected);
            }
            if !self.slot(index).connected {
                continue;
            }

            let gamepad = index as i32;
            let has_gamepad = rl.is_gamepad_available(gamepad);
            let mut buttons = Buttons::default();
            for (i, button) in Button::ALL.into_iter().enumerate() {
                let pressed = rl.is_key_down(KEYMAPS[index][i])
                    || (has_gamepad && rl.is_gamepad_button_down(gamepad, PAD_BUTTONS[i]));
                buttons.set(button, pressed);
            }
            self.set_buttons(index, buttons);
        }
    }
}

impl PadConnector for SimBus {
    type Pad = SimPad;

    fn connect(&mut self, address: u8) -> Result<SimPad, PadError> {
        let index = address_index(address).ok_or(PadError::NotConnected(address))?;
        if !self.slot(index).connected {
            return Err(PadError::NotConnected(address));
        }
        Ok(SimPad { bus: self.clone(), index })
    }
}

/// One pad on the simulated bus.
pub struct SimPad {
    bus: SimBus,
    index: usize,
}

impl SimPad {
    fn with_slot<T>(&self, f: impl FnOnce(&mut SlotState) -> T) -> Result<T, PadError> {
        let mut slots = self.bus.slots.borrow_mut();
        let slot = &mut slots[self.index];
        if !slot.connected {
            return Err(PadError::Disconnected(ADDRESSES[self.index]));
        }
        Ok(f(slot))
    }
}

impl Gamepad for SimPad {
    fn address(&self) -> u8 {
        ADDRESSES[self.index]
    }

    fn read_buttons(&mut self) -> Result<Buttons, PadError> {
        self.with_slot(|s| s.buttons)
    }

    fn set_led(&mut self, led: u8, on: bool) -> Result<(), PadError> {
        let bit = check_led(led)?;
        self.with_slot(|s| if on { s.leds |= bit } else { s.leds &= !bit })
    }

    fn set_leds(&mut self, bits: u8) -> Result<(), PadError> {
        self.with_slot(|s| s.leds = bits & 0x0F)
    }
}
