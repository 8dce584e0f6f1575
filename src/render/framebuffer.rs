//! CPU framebuffer with the handheld display's drawing calls.
//!
//! Shapes are rasterized into `color_buffer`; text is queued and drawn by raylib
//! on top when the frame is presented.
use raylib::prelude::*;

use crate::render::palette;

/// Height in pixels of one line of text at scale 1.
pub const FONT_HEIGHT: i32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub scale: i32,
    pub color: Color,
}

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub pen: Color,
    pub texts: Vec<TextRun>,
    backlight: f32,
    bytes: Vec<u8>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![palette::BLACK; size],
            width,
            height,
            pen: palette::WHITE,
            texts: Vec::new(),
            backlight: 0.0,
            bytes: Vec::with_capacity(size * 4),
        }
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    #[inline] pub fn set_pen(&mut self, c: Color) { self.pen = c; }
    #[inline] pub fn backlight(&self) -> f32 { self.backlight }

    pub fn set_backlight(&mut self, level: f32) {
        self.backlight = level.clamp(0.0, 1.0);
    }

    /// Fills the whole screen with the pen and drops queued text.
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.pen);
        self.texts.clear();
    }

    #[inline]
    pub fn pixel(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = self.pen;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            return Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize]);
        }
        None
    }

    /// Filled rectangle, clipped to the screen.
    pub fn rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let (sw, sh) = self.bounds();
        let x0 = x.clamp(0, sw);
        let y0 = y.clamp(0, sh);
        let x1 = (x + w).clamp(x0, sw);
        let y1 = (y + h).clamp(y0, sh);
        for py in y0..y1 {
            let row = (py as u32 * self.width) as usize;
            self.color_buffer[row + x0 as usize..row + x1 as usize].fill(self.pen);
        }
    }

    /// Filled circle.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32) {
        let r2 = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r2 {
                    self.pixel(cx + dx, cy + dy);
                }
            }
        }
    }

    /// Bresenham integer line.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn text(&mut self, text: impl Into<String>, x: i32, y: i32, scale: i32) {
        self.texts.push(TextRun { text: text.into(), x, y, scale, color: self.pen });
    }

    /// Text with a black drop shadow offset by `shadow` pixels.
    pub fn shadowed_text(&mut self, text: &str, x: i32, y: i32, scale: i32, shadow: i32) {
        let pen = self.pen;
        self.set_pen(palette::BLACK);
        self.text(text, x + shadow, y + shadow, scale);
        self.set_pen(pen);
        self.text(text, x, y, scale);
    }

    /// Copies the pixels into a persistent texture as RGBA8.
    pub fn upload_to_texture(&mut self, tex: &mut Texture2D) {
        self.bytes.clear();
        for c in &self.color_buffer {
            self.bytes.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        let _ = tex.update_texture(&self.bytes);
    }

    /// Draws the uploaded texture and queued text at `scale` window pixels per pixel.
    pub fn present(&self, d: &mut RaylibDrawHandle, tex: &Texture2D, scale: i32) {
        let level = (self.backlight * 255.0) as u8;
        let tint = Color::new(level, level, level, 255);
        d.draw_texture_ex(tex, Vector2::zero(), 0.0, scale as f32, tint);

        if self.backlight <= 0.0 {
            return;
        }
        for run in &self.texts {
            let c = run.color;
            let lit = |v: u8| (v as f32 * self.backlight) as u8;
            d.draw_text(
                &run.text,
                run.x * scale,
                run.y * scale,
                FONT_HEIGHT * run.scale * scale,
                Color::new(lit(c.r), lit(c.g), lit(c.b), c.a),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(fb: &Framebuffer, c: Color) -> usize {
        fb.color_buffer.iter().filter(|&&p| p == c).count()
    }

    #[test]
    fn rectangle_is_clipped() {
        let mut fb = Framebuffer::new(20, 10);
        fb.set_pen(palette::RED);
        fb.rectangle(-5, -5, 10, 10);
        assert_eq!(count(&fb, palette::RED), 25);
        fb.rectangle(18, 8, 10, 10);
        assert_eq!(count(&fb, palette::RED), 29);
        fb.rectangle(30, 30, 5, 5);
        assert_eq!(count(&fb, palette::RED), 29);
    }

    #[test]
    fn clear_fills_and_drops_text() {
        let mut fb = Framebuffer::new(4, 4);
        fb.text("hi", 0, 0, 1);
        fb.set_pen(palette::PATH);
        fb.clear();
        assert_eq!(count(&fb, palette::PATH), 16);
        assert!(fb.texts.is_empty());
    }

    #[test]
    fn line_hits_both_ends() {
        let mut fb = Framebuffer::new(10, 10);
        fb.set_pen(palette::GREEN);
        fb.line(1, 1, 8, 4);
        assert_eq!(fb.get_pixel(1, 1), Some(palette::GREEN));
        assert_eq!(fb.get_pixel(8, 4), Some(palette::GREEN));
        assert_eq!(count(&fb, palette::GREEN), 8);
    }

    #[test]
    fn circle_stays_within_radius() {
        let mut fb = Framebuffer::new(30, 30);
        fb.circle(15, 15, 3);
        assert_eq!(fb.get_pixel(15, 12), Some(palette::WHITE));
        assert_eq!(fb.get_pixel(18, 18), Some(palette::BLACK));
        // partially off screen is fine
        fb.circle(0, 0, 5);
        assert_eq!(fb.get_pixel(0, 0), Some(palette::WHITE));
    }

    #[test]
    fn shadowed_text_queues_shadow_first() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pen(palette::WHITE);
        fb.shadowed_text("Lvl: 0", 2, 2, 1, 2);
        assert_eq!(fb.texts.len(), 2);
        assert_eq!((fb.texts[0].x, fb.texts[0].color), (4, palette::BLACK));
        assert_eq!((fb.texts[1].x, fb.texts[1].color), (2, palette::WHITE));
        assert_eq!(fb.pen, palette::WHITE);
    }
}
