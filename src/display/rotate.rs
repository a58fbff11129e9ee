//! Arbitrary-angle image rotation with bilinear sampling
//!
//! Every destination pixel is mapped back into the source by undoing the
//! rotation about the shared center, then sampled from its four neighbors.
//! Samples that land within one pixel of the source edge, or outside it,
//! come out black; `clean_corners` removes that halo afterwards.

use super::Surface;
use crate::geometry::rotate_offset;

/// Blend the 2x2 block whose top-left pixel is `(x_tl, y_tl)`.
///
/// `left` is the weight of the left column and `top` the weight of the top
/// row; the right column and bottom row get the complements. Channel values
/// are truncated, not rounded.
pub fn interpolate<S: Surface>(src: &S, x_tl: i32, y_tl: i32, left: f64, top: f64) -> (u8, u8, u8) {
    let right = 1.0 - left;
    let bottom = 1.0 - top;
    debug_assert!((0.0..=1.0).contains(&left), "left weight {} out of range", left);
    debug_assert!((0.0..=1.0).contains(&top), "top weight {} out of range", top);
    debug_assert!((0.0..=1.0).contains(&right), "right weight {} out of range", right);
    debug_assert!((0.0..=1.0).contains(&bottom), "bottom weight {} out of range", bottom);

    let tl = src.get_pixel(x_tl, y_tl);
    let tr = src.get_pixel(x_tl + 1, y_tl);
    let bl = src.get_pixel(x_tl, y_tl + 1);
    let br = src.get_pixel(x_tl + 1, y_tl + 1);

    let blend = |c_tl: u8, c_tr: u8, c_bl: u8, c_br: u8| -> u8 {
        let total = top * left * c_tl as f64
            + top * right * c_tr as f64
            + bottom * left * c_bl as f64
            + bottom * right * c_br as f64;
        debug_assert!(
            (0.0..256.0).contains(&total),
            "interpolated channel {} overflows",
            total
        );
        total as u8
    };

    (
        blend(tl.0, tr.0, bl.0, br.0),
        blend(tl.1, tr.1, bl.1, br.1),
        blend(tl.2, tr.2, bl.2, br.2),
    )
}

/// Split one real coordinate into its top-left neighbor and that neighbor's
/// weight. Pixel `k` covers `[k, k + 1)` with its center at `k + 0.5`.
#[inline]
fn split_coordinate(v: f64) -> (i32, f64) {
    let whole = v.trunc();
    let frac = v - whole;
    if frac > 0.5 {
        (whole as i32, 1.5 - frac)
    } else {
        (whole as i32 - 1, 0.5 - frac)
    }
}

/// Sample `src` at a real-valued coordinate.
///
/// The coordinate must have a full neighbor on each side; callers keep it in
/// `[1, dimension - 1)`. A coordinate on a pixel center returns that pixel.
pub fn sample_bilinear<S: Surface>(src: &S, x: f64, y: f64) -> (u8, u8, u8) {
    let (x_tl, left) = split_coordinate(x);
    let (y_tl, top) = split_coordinate(y);
    interpolate(src, x_tl, y_tl, left, top)
}

/// Rotate `src` clockwise by `angle` radians into `dst`.
///
/// Both surfaces must have the same dimensions. Every destination pixel is
/// written.
pub fn rotate<S: Surface, D: Surface>(src: &S, dst: &mut D, angle: f64) {
    assert_eq!(
        (src.width(), src.height()),
        (dst.width(), dst.height()),
        "rotation source and destination must be the same size"
    );

    let max_x = dst.width() as i32;
    let max_y = dst.height() as i32;
    let mid_x = dst.width() as f64 / 2.0;
    let mid_y = dst.height() as f64 / 2.0;
    let src_mid_x = src.width() as f64 / 2.0;
    let src_mid_y = src.height() as f64 / 2.0;
    let src_max_x = src.width() as f64 - 1.0;
    let src_max_y = src.height() as f64 - 1.0;

    for y in 0..max_y {
        for x in 0..max_x {
            let (dx, dy) = rotate_offset(x as f64 - mid_x, y as f64 - mid_y, angle);
            let sx = src_mid_x + dx;
            let sy = src_mid_y + dy;

            if sx < 1.0 || sy < 1.0 || sx >= src_max_x || sy >= src_max_y {
                dst.set_pixel(x, y, 0, 0, 0);
                continue;
            }

            let (r, g, b) = sample_bilinear(src, sx, sy);
            dst.set_pixel(x, y, r, g, b);
        }
    }
}
