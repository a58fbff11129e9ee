use super::Surface;

/// Write an RGB pixel to a 3-byte slice
#[inline]
fn write_pixel(dest: &mut [u8], r: u8, g: u8, b: u8) {
    dest[0] = r;
    dest[1] = g;
    dest[2] = b;
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGB888 pixel buffer, exactly 3 bytes per pixel, rows packed.
/// Backs the chart canvas and both label staging buffers.
#[derive(Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    pen: (i32, i32),
}

impl PixelBuffer {
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Create an empty 0x0 buffer, to be resized before use
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// Create a black buffer of the given size
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * Self::BYTES_PER_PIXEL],
            width,
            height,
            pen: (0, 0),
        }
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL
    }

    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> usize {
        assert!(x >= 0, "x coordinate {} is below zero", x);
        assert!(y >= 0, "y coordinate {} is below zero", y);
        assert!(x < self.width as i32, "x coordinate {} is beyond width {}", x, self.width);
        assert!(y < self.height as i32, "y coordinate {} is beyond height {}", y, self.height);
        self.pixel_index(x as u32, y as u32)
    }

    /// Clear to a solid color
    pub fn clear(&mut self, r: u8, g: u8, b: u8) {
        for chunk in self.pixels.chunks_exact_mut(Self::BYTES_PER_PIXEL) {
            write_pixel(chunk, r, g, b);
        }
    }

    /// Draw a line using Bresenham's algorithm.
    ///
    /// Walks the full unclipped path and skips pixels off the buffer, so a
    /// partly visible line lights the same pixels as `Surface::line_to`.
    /// Lines entirely beyond one edge are rejected up front.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, r: u8, g: u8, b: u8) {
        let w = self.width as i32;
        let h = self.height as i32;
        if (x0 < 0 && x1 < 0) || (y0 < 0 && y1 < 0) || (x0 >= w && x1 >= w) || (y0 >= h && y1 >= h) {
            return;
        }

        let dx = (x1 - x0).abs();
        let dy = -((y1 - y0).abs());
        let sx = if x0 < x1 { 1i32 } else { -1i32 };
        let sy = if y0 < y1 { 1i32 } else { -1i32 };
        let mut err = dx + dy;
        let mut x = x0;
        let mut y = y0;

        loop {
            if x >= 0 && y >= 0 && x < w && y < h {
                let idx = self.pixel_index(x as u32, y as u32);
                write_pixel(&mut self.pixels[idx..idx + 3], r, g, b);
            }
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

    /// Raw RGB bytes for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }
}

impl Surface for PixelBuffer {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize * Self::BYTES_PER_PIXEL, 0);
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> (u8, u8, u8) {
        let idx = self.checked_index(x, y);
        (self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        let idx = self.checked_index(x, y);
        write_pixel(&mut self.pixels[idx..idx + 3], r, g, b);
    }

    fn pen(&self) -> (i32, i32) {
        self.pen
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.pen = (x, y);
    }

    fn fill(&mut self, r: u8, g: u8, b: u8) {
        self.clear(r, g, b);
    }

    fn line_to(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        let (x0, y0) = self.pen;
        self.line(x0, y0, x, y, r, g, b);
        self.pen = (x, y);
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
