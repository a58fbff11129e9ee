//! 5x7 dot-matrix font in 6x8 cells
//!
//! Each glyph is five column bytes, least significant bit at the top row.
//! The sixth column of every cell is spacing. Bit 7 carries descenders.

use super::{Surface, BLACK, WHITE};

pub const GLYPH_WIDTH: u32 = 6;
pub const GLYPH_HEIGHT: u32 = 8;

const FIRST_CHAR: u8 = b' ';
const LAST_CHAR: u8 = b'~';

#[rustfmt::skip]
static FONT_5X7: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x08, 0x07, 0x03, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x80, 0x70, 0x30, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x60, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x14, 0x00, 0x00], // :
    [0x00, 0x40, 0x34, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x59, 0x09, 0x06], // ?
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], // @
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x41, 0x3E], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x73], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x26, 0x49, 0x49, 0x49, 0x32], // S
    [0x03, 0x01, 0x7F, 0x01, 0x03], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x59, 0x49, 0x4D, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x41, 0x7F], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x03, 0x07, 0x08, 0x00], // `
    [0x20, 0x54, 0x54, 0x78, 0x40], // a
    [0x7F, 0x28, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x28], // c
    [0x38, 0x44, 0x44, 0x28, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x00, 0x08, 0x7E, 0x09, 0x02], // f
    [0x18, 0xA4, 0xA4, 0x9C, 0x78], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x40, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x78, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0xFC, 0x18, 0x24, 0x24, 0x18], // p
    [0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x24], // s
    [0x04, 0x04, 0x3F, 0x44, 0x24], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x4C, 0x90, 0x90, 0x90, 0x7C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x77, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];

/// Column bitmap for a character; anything outside printable ASCII is `?`
fn get_glyph(c: char) -> &'static [u8; 5] {
    let code = if c.is_ascii() { c as u8 } else { b'?' };
    let code = if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
        code
    } else {
        b'?'
    };
    &FONT_5X7[(code - FIRST_CHAR) as usize]
}

/// Draw one character cell with its top-left at `(x, y)`.
///
/// Writes all 6x8 pixels: `fg` for set dots, `bg` for the rest. Pixels that
/// fall outside the surface are skipped.
pub fn draw_char<S: Surface>(
    surface: &mut S,
    x: i32,
    y: i32,
    c: char,
    fg: (u8, u8, u8),
    bg: (u8, u8, u8),
) {
    let glyph = get_glyph(c);
    for col in 0..GLYPH_WIDTH as i32 {
        let bits = glyph.get(col as usize).copied().unwrap_or(0);
        for row in 0..GLYPH_HEIGHT as i32 {
            let (px, py) = (x + col, y + row);
            if !surface.in_bounds(px, py) {
                continue;
            }
            let (r, g, b) = if bits & (1 << row) != 0 { fg } else { bg };
            surface.set_pixel(px, py, r, g, b);
        }
    }
}

/// Draw a string left to right, one cell per character
pub fn draw_text<S: Surface>(
    surface: &mut S,
    x: i32,
    y: i32,
    text: &str,
    fg: (u8, u8, u8),
    bg: (u8, u8, u8),
) {
    for (i, c) in text.chars().enumerate() {
        draw_char(surface, x + (i as u32 * GLYPH_WIDTH) as i32, y, c, fg, bg);
    }
}

/// Width of a string in pixels
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH
}

/// Renders two-character labels onto a surface
pub trait GlyphDrawer {
    /// Width and height of one character cell
    fn cell_size(&self) -> (u32, u32);

    /// Draw exactly two characters with the block's top-left at `(x, y)`.
    ///
    /// Panics when `text` is not two characters long or the block does not
    /// fit on `surface`.
    fn draw_glyph_pair<S: Surface>(&self, surface: &mut S, x: i32, y: i32, text: &str);
}

/// The built-in dot-matrix font, dark dots on a light cell
#[derive(Debug, Clone, Copy)]
pub struct DotMatrix {
    pub fg: (u8, u8, u8),
    pub bg: (u8, u8, u8),
}

impl DotMatrix {
    pub fn new() -> Self {
        Self { fg: BLACK, bg: WHITE }
    }
}

impl Default for DotMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphDrawer for DotMatrix {
    fn cell_size(&self) -> (u32, u32) {
        (GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    fn draw_glyph_pair<S: Surface>(&self, surface: &mut S, x: i32, y: i32, text: &str) {
        assert_eq!(
            text.chars().count(),
            2,
            "label {:?} must be exactly two characters",
            text
        );
        let w = (2 * GLYPH_WIDTH) as i32;
        let h = GLYPH_HEIGHT as i32;
        assert!(
            x >= 0 && y >= 0 && x + w <= surface.width() as i32 && y + h <= surface.height() as i32,
            "text must fit on the surface"
        );
        draw_text(surface, x, y, text, self.fg, self.bg);
    }
}
