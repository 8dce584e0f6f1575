//! Strip under the display showing each simulated pad: address, LEDs, held buttons.
use raylib::prelude::*;

use crate::pad::sim::SlotState;
use crate::pad::{ADDRESSES, NUM_LEDS};

const LED_ON: Color = Color::new(40, 255, 90, 255);
const LED_OFF: Color = Color::new(30, 50, 35, 255);
const PANEL: Color = Color::new(28, 28, 34, 255);
const UNPLUGGED: Color = Color::new(90, 90, 90, 255);

/// Text shown for the held buttons of a slot, e.g. `L A +`.
pub fn held_label(state: &SlotState) -> String {
    state
        .buttons
        .iter()
        .filter(|(_, held)| *held)
        .map(|(b, _)| b.label().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn draw_pad_strip(d: &mut RaylibDrawHandle, slots: &[SlotState; 4], top: i32, width: i32, height: i32) {
    let panel_w = width / slots.len() as i32;
    for (i, state) in slots.iter().enumerate() {
        let x = i as i32 * panel_w;
        d.draw_rectangle(x + 2, top + 2, panel_w - 4, height - 4, PANEL);

        let title = format!("F{} {:#04x}", i + 1, ADDRESSES[i]);
        let title_colour = if state.connected { Color::WHITE } else { UNPLUGGED };
        d.draw_text(&title, x + 10, top + 8, 20, title_colour);

        if !state.connected {
            d.draw_text("unplugged", x + 10, top + 36, 20, UNPLUGGED);
            continue;
        }

        for led in 0..NUM_LEDS {
            let lit = state.leds & (1 << led) != 0;
            let cx = x + panel_w - 20 - (NUM_LEDS - 1 - led) as i32 * 18;
            d.draw_circle(cx, top + 18, 6.0, if lit { LED_ON } else { LED_OFF });
        }
        d.draw_text(&held_label(state), x + 10, top + 40, 20, Color::YELLOW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::{Button, Buttons};

    #[test]
    fn held_buttons_are_listed_in_pad_order() {
        let state = SlotState {
            connected: true,
            buttons: Buttons::default().with(Button::Plus).with(Button::Left),
            leds: 0,
        };
        assert_eq!(held_label(&state), "L +");
        assert_eq!(held_label(&SlotState::default()), "");
    }
}
