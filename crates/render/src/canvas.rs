//! Clipped raster primitives over an RGB image buffer.

use image::{Rgb, RgbImage};

use crate::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self { image: RgbImage::from_pixel(width, height, background) }
    }

    #[cfg(test)]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb<u8>> {
        let (x, y) = self.clip(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    fn clip(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.image.width())?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.image.height())?;
        Some((x, y))
    }

    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if let Some((x, y)) = self.clip(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64, color: Rgb<u8>) {
        for py in y..y + height {
            for px in x..x + width {
                self.put(px, py, color);
            }
        }
    }

    /// Horizontal stroke covering `x0..x1`, centred on row `y`.
    pub fn hline(&mut self, x0: i64, x1: i64, y: i64, thickness: u32, color: Rgb<u8>) {
        let thickness = i64::from(thickness);
        self.fill_rect(x0, y - thickness / 2, x1 - x0, thickness, color);
    }

    /// Vertical stroke covering `y0..y1`, centred on column `x`.
    pub fn vline(&mut self, x: i64, y0: i64, y1: i64, thickness: u32, color: Rgb<u8>) {
        let thickness = i64::from(thickness);
        self.fill_rect(x - thickness / 2, y0, thickness, y1 - y0, color);
    }

    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: u32, color: Rgb<u8>) {
        let radius = i64::from(radius);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`. Characters without a glyph
    /// leave a blank slot.
    pub fn draw_text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
        let step = i64::from(scale);
        let advance = i64::from(GLYPH_WIDTH + 1) * step;
        for (index, ch) in text.chars().enumerate() {
            let Some(rows) = glyph(ch) else {
                continue;
            };
            let gx = x + index as i64 * advance;
            for (row, bits) in rows.iter().enumerate().take(GLYPH_HEIGHT as usize) {
                for column in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - column)) != 0 {
                        self.fill_rect(
                            gx + i64::from(column) * step,
                            y + row as i64 * step,
                            step,
                            step,
                            color,
                        );
                    }
                }
            }
        }
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn drawing_outside_the_canvas_is_clipped() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.fill_rect(-2, -2, 3, 3, BLACK);
        canvas.put(10, 10, BLACK);
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(WHITE));
        assert_eq!(canvas.pixel(-1, 0), None);
    }

    #[test]
    fn strokes_are_centred_on_their_line() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.hline(2, 8, 5, 2, BLACK);
        assert_eq!(canvas.pixel(2, 4), Some(BLACK));
        assert_eq!(canvas.pixel(7, 5), Some(BLACK));
        assert_eq!(canvas.pixel(8, 5), Some(WHITE));
        assert_eq!(canvas.pixel(4, 6), Some(WHITE));

        canvas.vline(1, 0, 3, 1, BLACK);
        assert_eq!(canvas.pixel(1, 2), Some(BLACK));
        assert_eq!(canvas.pixel(1, 3), Some(WHITE));
    }

    #[test]
    fn circles_fill_their_radius_only() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.fill_circle(10, 10, 3, BLACK);
        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
        assert_eq!(canvas.pixel(13, 10), Some(BLACK));
        assert_eq!(canvas.pixel(13, 13), Some(WHITE));
        assert_eq!(canvas.pixel(10, 14), Some(WHITE));
    }

    #[test]
    fn text_uses_glyph_bits() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.draw_text(0, 0, "1", 1, BLACK);
        // '1' has its top row centred and a full bottom bar.
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(1, 0), Some(BLACK));
        assert_eq!(canvas.pixel(0, 4), Some(BLACK));
        assert_eq!(canvas.pixel(2, 4), Some(BLACK));
    }
}
