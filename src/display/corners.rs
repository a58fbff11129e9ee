use super::{Surface, BLACK, WHITE};

/// Turn the black halo left by `rotate` white.
///
/// Flood-fills pure black from each of the four corners. A glyph can split
/// the halo into separate pieces, so every corner is seeded. Black strokes
/// that do not touch a corner region are kept.
pub fn clean_corners<S: Surface>(surface: &mut S) {
    let w = surface.width() as i32;
    let h = surface.height() as i32;
    if w == 0 || h == 0 {
        return;
    }
    for (x, y) in [(0, 0), (0, h - 1), (w - 1, 0), (w - 1, h - 1)] {
        surface.flood_fill(x, y, BLACK, WHITE);
    }
}
