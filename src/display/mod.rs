mod corners;
mod font;
mod pixel_buffer;
mod rotate;
#[cfg(feature = "window")]
mod window;

pub use corners::clean_corners;
pub use font::{draw_char, draw_text, text_width, DotMatrix, GlyphDrawer, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use pixel_buffer::PixelBuffer;
pub use rotate::{interpolate, rotate, sample_bilinear};
#[cfg(feature = "window")]
pub use window::{Display, InputEvent, RenderTarget};

pub const BLACK: (u8, u8, u8) = (0, 0, 0);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

/// An addressable 24-bit RGB drawing surface.
///
/// `get_pixel` and `set_pixel` are checked: coordinates outside
/// `[0, width) x [0, height)` are a caller bug and panic. Line drawing and
/// compositing clip to the surface instead.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Change the dimensions. Existing contents are not preserved.
    fn resize(&mut self, width: u32, height: u32);

    fn get_pixel(&self, x: i32, y: i32) -> (u8, u8, u8);

    fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8);

    /// Current pen position
    fn pen(&self) -> (i32, i32);

    /// Place the pen without drawing
    fn move_to(&mut self, x: i32, y: i32);

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i32 && y < self.height() as i32
    }

    /// Fill the whole surface with one color
    fn fill(&mut self, r: u8, g: u8, b: u8) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                self.set_pixel(x, y, r, g, b);
            }
        }
    }

    /// Draw a line from the pen to `(x, y)` and leave the pen there.
    ///
    /// Bresenham; pixels outside the surface are skipped.
    fn line_to(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        let (x0, y0) = self.pen();
        let dx = (x - x0).abs();
        let dy = -((y - y0).abs());
        let sx = if x0 < x { 1 } else { -1 };
        let sy = if y0 < y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut px = x0;
        let mut py = y0;

        loop {
            if self.in_bounds(px, py) {
                self.set_pixel(px, py, r, g, b);
            }
            if px == x && py == y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                px += sx;
            }
            if e2 <= dx {
                err += dx;
                py += sy;
            }
        }
        self.move_to(x, y);
    }

    /// Replace the 4-connected region of `target`-colored pixels containing
    /// `(x, y)` with `replacement`. A seed that is not `target` is left alone.
    fn flood_fill(&mut self, x: i32, y: i32, target: (u8, u8, u8), replacement: (u8, u8, u8)) {
        if target == replacement || !self.in_bounds(x, y) || self.get_pixel(x, y) != target {
            return;
        }

        let (r, g, b) = replacement;
        let mut stack = vec![(x, y)];
        while let Some((px, py)) = stack.pop() {
            if !self.in_bounds(px, py) || self.get_pixel(px, py) != target {
                continue;
            }
            self.set_pixel(px, py, r, g, b);
            stack.push((px + 1, py));
            stack.push((px - 1, py));
            stack.push((px, py + 1));
            stack.push((px, py - 1));
        }
    }

    /// Copy `src` onto this surface with its top-left at `(x, y)`, opaque,
    /// clipped to the destination.
    fn draw<S: Surface>(&mut self, x: i32, y: i32, src: &S)
    where
        Self: Sized,
    {
        for sy in 0..src.height() as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height() as i32 {
                continue;
            }
            for sx in 0..src.width() as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width() as i32 {
                    continue;
                }
                let (r, g, b) = src.get_pixel(sx, sy);
                self.set_pixel(dx, dy, r, g, b);
            }
        }
    }
}
