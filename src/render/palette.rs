//! Display pens. The device takes RGB565 with the two bytes swapped, so the
//! constants below are the raw values the display expects.
use raylib::prelude::Color;

/// Decodes a byte-swapped RGB565 value to an opaque colour.
pub const fn from_rgb565_swapped(raw: u16) -> Color {
    let v = raw.swap_bytes();
    let r = ((v >> 11) & 0x1F) as u8;
    let g = ((v >> 5) & 0x3F) as u8;
    let b = (v & 0x1F) as u8;
    Color::new((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2), 255)
}

pub const WHITE: Color = from_rgb565_swapped(65535);
pub const BLACK: Color = from_rgb565_swapped(0);
pub const CYAN: Color = from_rgb565_swapped(65287);
pub const MAGENTA: Color = from_rgb565_swapped(8184);
pub const YELLOW: Color = from_rgb565_swapped(57599);
pub const GREEN: Color = from_rgb565_swapped(57351);
pub const RED: Color = from_rgb565_swapped(248);
pub const BLUE: Color = from_rgb565_swapped(7936);
pub const GREY: Color = Color::new(115, 115, 115, 255);

// maze colours
pub const PLAYER: Color = from_rgb565_swapped(11751);
pub const WALL: Color = from_rgb565_swapped(65147);
pub const PATH: Color = from_rgb565_swapped(54585);

/// Arena colour per pad slot.
pub const PLAYER_COLOURS: [Color; 4] = [GREEN, MAGENTA, CYAN, BLUE];

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(c: Color) -> (u8, u8, u8) {
        (c.r, c.g, c.b)
    }

    #[test]
    fn primaries_decode() {
        assert_eq!(rgb(WHITE), (255, 255, 255));
        assert_eq!(rgb(BLACK), (0, 0, 0));
        assert_eq!(rgb(RED), (255, 0, 0));
        assert_eq!(rgb(GREEN), (0, 255, 0));
        assert_eq!(rgb(BLUE), (0, 0, 255));
        assert_eq!(rgb(CYAN), (0, 255, 255));
        assert_eq!(rgb(MAGENTA), (255, 0, 255));
        assert_eq!(rgb(YELLOW), (255, 255, 0));
    }

    #[test]
    fn maze_player_matches_its_pen() {
        // created on the device as pen (227, 231, 110)
        let (r, g, b) = rgb(PLAYER);
        assert!(r.abs_diff(227) <= 8 && g.abs_diff(231) <= 8 && b.abs_diff(110) <= 8);
    }
}
