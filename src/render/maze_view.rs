//! Drawing for both maze games.
use raylib::prelude::Color;

use crate::core::fixed_maze::{self, FixedMaze};
use crate::core::layout::{MazeLayout, Position};
use crate::core::maze::{MazeGrid, WALL};
use crate::render::framebuffer::Framebuffer;
use crate::render::palette;

pub const WALL_SHADOW: i32 = 2;
pub const TEXT_SHADOW: i32 = 2;

/// Every wall tile as a shadow plus a top.
pub fn draw_walls(fb: &mut Framebuffer, grid: &MazeGrid, layout: &MazeLayout) {
    for (row, tiles) in grid.rows_iter().enumerate() {
        for (col, &tile) in tiles.iter().enumerate() {
            if tile != WALL {
                continue;
            }
            let (x, y) = layout.to_screen(Position::new(col as i32, row as i32));

            fb.set_pen(palette::BLACK);
            fb.rectangle(x + WALL_SHADOW, y + WALL_SHADOW, layout.wall_size, layout.wall_size);

            fb.set_pen(palette::WALL);
            fb.rectangle(x, y, layout.wall_size, layout.wall_size);
        }
    }
}

pub fn draw_tile(fb: &mut Framebuffer, layout: &MazeLayout, pos: Position, pen: Color) {
    let (x, y) = layout.to_screen(pos);
    fb.set_pen(pen);
    fb.rectangle(x, y, layout.wall_size, layout.wall_size);
}

/// Full frame for the random maze game.
pub fn draw_random_maze(
    fb: &mut Framebuffer,
    grid: &MazeGrid,
    layout: &MazeLayout,
    player: Position,
    level: u32,
    complete: bool,
) {
    fb.set_pen(palette::PATH);
    fb.clear();

    draw_walls(fb, grid, layout);
    draw_tile(fb, layout, layout.start, palette::RED);
    draw_tile(fb, layout, layout.goal, palette::GREEN);
    draw_tile(fb, layout, player, palette::PLAYER);

    fb.set_pen(palette::WHITE);
    fb.shadowed_text(&format!("Lvl: {level}"), 2, 2, 1, TEXT_SHADOW);

    if complete {
        draw_banner(fb, Some("Press + to continue"));
    }
}

/// Full frame for the fixed maze game. Tiles are a fixed 10 px.
pub fn draw_fixed_maze(fb: &mut Framebuffer, game: &FixedMaze) {
    let tile = fixed_maze::TILE;
    let layout = MazeLayout {
        wall_separation: tile,
        wall_size: tile - 1,
        offset_x: 0,
        offset_y: 0,
        start: fixed_maze::START,
        goal: fixed_maze::GOAL,
    };

    fb.set_pen(palette::PATH);
    fb.clear();
    draw_walls(fb, game.grid(), &layout);
    draw_tile(fb, &layout, game.player.pos, palette::PLAYER);
    draw_tile(fb, &layout, layout.goal, palette::GREEN);

    if game.is_complete() {
        draw_banner(fb, None);
    }
}

fn draw_banner(fb: &mut Framebuffer, hint: Option<&str>) {
    let (width, _) = fb.bounds();

    fb.set_pen(palette::BLACK);
    fb.rectangle(4, 94, width, 50);
    fb.set_pen(palette::PLAYER);
    fb.rectangle(0, 90, width, 50);

    fb.set_pen(palette::WHITE);
    match hint {
        Some(hint) => {
            fb.shadowed_text("Maze Complete!", width / 6, 96, 3, TEXT_SHADOW);
            fb.shadowed_text(hint, width / 6 + 10, 120, 2, TEXT_SHADOW);
        }
        None => fb.shadowed_text("Maze Complete!", width / 6, 105, 3, TEXT_SHADOW),
    }
}
