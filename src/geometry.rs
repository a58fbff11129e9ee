//! Angle and vector helpers in screen coordinates (y grows downward)

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Polar angle of the displacement `(dx, dy)`, clockwise from "up".
///
/// Returns a value in `[0, 2π)`: `(0, -1)` is 0, `(1, 0)` is π/2, `(0, 1)` is
/// π and `(-1, 0)` is 3π/2. The zero vector yields 0; callers must not read
/// anything into the angle of a zero-length vector.
pub fn angle_of(dx: f64, dy: f64) -> f64 {
    if dx > 0.0 {
        if dy > 0.0 {
            // Lower right
            PI - (dx / dy).atan()
        } else if dy < 0.0 {
            // Upper right
            -(dx / dy).atan()
        } else {
            FRAC_PI_2
        }
    } else if dx < 0.0 {
        if dy > 0.0 {
            // Lower left
            PI - (dx / dy).atan()
        } else if dy < 0.0 {
            // Upper left
            TAU - (dx / dy).atan()
        } else {
            1.5 * PI
        }
    } else if dy > 0.0 {
        PI
    } else {
        // Straight up, or the origin
        0.0
    }
}

/// Rotate an offset vector counter-clockwise by `angle`, undoing a
/// clockwise rotation by `angle`. Length is preserved.
pub fn rotate_offset(dx: f64, dy: f64, angle: f64) -> (f64, f64) {
    let new_angle = angle_of(dx, dy) - angle;
    let ray = (dx * dx + dy * dy).sqrt();
    (new_angle.sin() * ray, -new_angle.cos() * ray)
}

/// Point at `ray` from `(cx, cy)` in direction `angle` (clockwise from up),
/// truncated to integer pixel coordinates.
#[inline]
pub fn polar_point(cx: f64, cy: f64, angle: f64, ray: f64) -> (i32, i32) {
    let x = cx + angle.sin() * ray;
    let y = cy - angle.cos() * ray;
    (x as i32, y as i32)
}

/// Euclidean length of a vector
#[cfg(test)]
pub fn length(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}
