//! Drawing for the arena game.
use crate::core::arena::{Arena, ArenaPlayer, GRID_SPACING};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette;

pub fn draw_arena(fb: &mut Framebuffer, arena: &Arena) {
    fb.set_pen(palette::BLACK);
    fb.clear();

    // dotted background grid
    let (width, height) = fb.bounds();
    fb.set_pen(palette::GREY);
    for x in (0..width).step_by(GRID_SPACING as usize) {
        for y in (0..height).step_by(GRID_SPACING as usize) {
            fb.pixel(x, y);
        }
    }

    for player in &arena.players {
        draw_player(fb, player);
    }
}

fn draw_player(fb: &mut Framebuffer, p: &ArenaPlayer) {
    let colour = palette::PLAYER_COLOURS[p.index];
    let (x, y) = (p.x as i32, p.y as i32);
    let size = p.size as i32;

    fb.set_pen(palette::WHITE);
    fb.circle(x, y, size);
    fb.set_pen(if p.was_hit { palette::RED } else { palette::BLACK });
    fb.circle(x, y, size - 1);

    fb.set_pen(colour);
    let (px, py) = p.pointer();
    fb.line(x, y, px as i32, py as i32);

    for shot in &p.projectiles {
        fb.pixel(shot.x as i32, shot.y as i32);
    }

    fb.text(format!("P{}: {}", p.index + 1, p.score), 5 + p.index as i32 * 80, 227, 2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_players_flash_red() {
        let mut arena = Arena::new(&[0, 2], 320, 240);
        arena.players[1].was_hit = true;
        let mut fb = Framebuffer::new(320, 240);
        draw_arena(&mut fb, &arena);

        // heading line starts at the centre, so probe just off it
        assert_eq!(fb.get_pixel(30, 55), Some(palette::BLACK));
        assert_eq!(fb.get_pixel(30, 205), Some(palette::RED));
        assert_eq!(fb.get_pixel(30 - 10, 50), Some(palette::WHITE));

        let scores: Vec<&str> = fb.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(scores, vec!["P1: 0", "P3: 0"]);
        assert_eq!(fb.texts[1].x, 165);
    }
}
