//! Circumplex chart: an octagon with eight scored axes and rotated labels
//!
//! Axis `i` points `i * 45°` clockwise from straight up. Each label sits in
//! the middle of the wedge following its axis.

use std::f64::consts::{PI, SQRT_2};

use crate::display::{
    clean_corners, rotate, DotMatrix, GlyphDrawer, PixelBuffer, Surface, BLACK, GLYPH_HEIGHT,
    GLYPH_WIDTH, WHITE,
};
use crate::geometry::polar_point;
use crate::log::debug;

pub const NUM_AXES: usize = 8;

/// Smallest canvas edge that will be rendered
pub const MIN_SIZE: u32 = 100;

/// Characters per axis label
pub const LABEL_CHARS: u32 = 2;

const AXIS_STEP: f64 = 0.25 * PI;
const MARGIN: f64 = 2.0;
const LEGEND_CLEARANCE: f64 = 16.0;
/// Rotation applied to the first label's glyphs
const TEXT_ANGLE_OFFSET: f64 = 0.175 * PI;
/// Direction of the first label's center, halfway into the first wedge
const LABEL_ANGLE_OFFSET: f64 = 0.125 * PI;

// ============================================================================
// Layout
// ============================================================================

/// Geometry of one render pass, derived from the canvas size alone
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    size: u32,
    mid_x: f64,
    mid_y: f64,
    ray: f64,
    label_ray: f64,
    staging_size: u32,
    cell: (u32, u32),
    vertices: [(i32, i32); NUM_AXES],
}

impl Layout {
    /// Layout for a canvas of the requested size using the built-in font
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_cell(width, height, (GLYPH_WIDTH, GLYPH_HEIGHT))
    }

    /// Layout for a glyph cell of `(width, height)` pixels
    pub fn with_cell(width: u32, height: u32, cell: (u32, u32)) -> Self {
        let size = width.min(height).max(MIN_SIZE);
        let mid_x = size as f64 / 2.0;
        let mid_y = size as f64 / 2.0;
        let ray = mid_x.min(mid_y) - MARGIN - LEGEND_CLEARANCE;
        let widest = cell.0.max(cell.1);
        let label_ray = ray + SQRT_2 * widest as f64;
        let staging_size = 2 * widest * LABEL_CHARS;

        let mut vertices = [(0, 0); NUM_AXES];
        for (i, v) in vertices.iter_mut().enumerate() {
            *v = polar_point(mid_x, mid_y, axis_angle(i), ray);
        }

        Self {
            size,
            mid_x,
            mid_y,
            ray,
            label_ray,
            staging_size,
            cell,
            vertices,
        }
    }

    /// Edge length of the square canvas
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn center(&self) -> (f64, f64) {
        (self.mid_x, self.mid_y)
    }

    /// Center in whole pixels
    pub fn center_pixel(&self) -> (i32, i32) {
        (self.mid_x as i32, self.mid_y as i32)
    }

    /// Distance from the center to each octagon vertex
    pub fn ray(&self) -> f64 {
        self.ray
    }

    /// Distance from the center to each label's center
    pub fn label_ray(&self) -> f64 {
        self.label_ray
    }

    /// Edge length of the square label staging buffers
    pub fn staging_size(&self) -> u32 {
        self.staging_size
    }

    pub fn vertices(&self) -> &[(i32, i32); NUM_AXES] {
        &self.vertices
    }

    /// Point on axis `axis` at `fraction` of the ray
    pub fn axis_point(&self, axis: usize, fraction: f64) -> (i32, i32) {
        polar_point(self.mid_x, self.mid_y, axis_angle(axis), self.ray * fraction)
    }

    /// One segment per axis: from axis `i` to axis `i + 1`, both ends at
    /// `scores[i]` of the ray. The next axis's score plays no part.
    pub fn score_segments(&self, scores: &[f64; NUM_AXES]) -> [((i32, i32), (i32, i32)); NUM_AXES] {
        let mut segments = [((0, 0), (0, 0)); NUM_AXES];
        for (i, segment) in segments.iter_mut().enumerate() {
            *segment = (
                self.axis_point(i, scores[i]),
                self.axis_point(i + 1, scores[i]),
            );
        }
        segments
    }

    /// Top-left of a label's two glyph cells inside the staging buffer
    pub fn glyph_origin(&self) -> (i32, i32) {
        let half = (self.staging_size / 2) as i32;
        (half - self.cell.0 as i32, half - (self.cell.1 / 2) as i32)
    }

    /// Where label `axis` is centered on the canvas
    pub fn label_center(&self, axis: usize) -> (i32, i32) {
        polar_point(self.mid_x, self.mid_y, label_angle(axis), self.label_ray)
    }

    /// Top-left corner at which the rotated staging buffer is composited
    pub fn label_top_left(&self, axis: usize) -> (i32, i32) {
        let (cx, cy) = self.label_center(axis);
        let half = (self.staging_size / 2) as i32;
        (cx - half, cy - half)
    }
}

/// Direction of axis `axis`, clockwise from up. Wraps after the last axis.
#[inline]
pub fn axis_angle(axis: usize) -> f64 {
    (axis % NUM_AXES) as f64 * AXIS_STEP
}

/// Rotation given to the glyphs of label `axis`
#[inline]
pub fn text_angle(axis: usize) -> f64 {
    TEXT_ANGLE_OFFSET + axis as f64 * AXIS_STEP
}

/// Direction of the center of label `axis`
#[inline]
pub fn label_angle(axis: usize) -> f64 {
    LABEL_ANGLE_OFFSET + axis as f64 * AXIS_STEP
}

// ============================================================================
// Renderer
// ============================================================================

/// Draws circumplex charts.
///
/// Owns the glyph drawer and the two label staging buffers. The staging
/// buffers are resized and fully rewritten on every pass, so one renderer
/// must not be shared between concurrent passes.
pub struct CircumplexRenderer<G: GlyphDrawer = DotMatrix> {
    glyphs: G,
    glyph_buffer: PixelBuffer,
    rotated_buffer: PixelBuffer,
}

impl CircumplexRenderer<DotMatrix> {
    pub fn new() -> Self {
        Self::with_glyphs(DotMatrix::new())
    }
}

impl Default for CircumplexRenderer<DotMatrix> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GlyphDrawer> CircumplexRenderer<G> {
    pub fn with_glyphs(glyphs: G) -> Self {
        Self {
            glyphs,
            glyph_buffer: PixelBuffer::new(),
            rotated_buffer: PixelBuffer::new(),
        }
    }

    /// Render one chart onto `canvas`.
    ///
    /// The canvas is squared to `max(100, min(width, height))` first. Every
    /// score must lie in `[0, 1]` and every legend entry must be exactly two
    /// characters; anything else panics.
    pub fn render<C, L>(
        &mut self,
        canvas: &mut C,
        scores: &[f64; NUM_AXES],
        legend: &[L; NUM_AXES],
    ) -> Layout
    where
        C: Surface,
        L: AsRef<str>,
    {
        for (i, &score) in scores.iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&score),
                "score {} of axis {} is outside [0, 1]",
                score,
                i
            );
        }
        for label in legend {
            let label = label.as_ref();
            assert_eq!(
                label.chars().count(),
                LABEL_CHARS as usize,
                "label {:?} must be exactly two characters",
                label
            );
        }

        let layout = Layout::with_cell(canvas.width(), canvas.height(), self.glyphs.cell_size());
        let size = layout.size();
        debug!(size, ray = layout.ray(), "rendering circumplex");

        canvas.resize(size, size);
        canvas.fill(WHITE.0, WHITE.1, WHITE.2);

        let (r, g, b) = BLACK;
        let vertices = layout.vertices();

        // Perimeter, pen starting on the last vertex
        let (x7, y7) = vertices[NUM_AXES - 1];
        canvas.move_to(x7, y7);
        for &(x, y) in vertices {
            canvas.line_to(x, y, r, g, b);
        }

        // Spokes
        let (cx, cy) = layout.center_pixel();
        for &(x, y) in vertices {
            canvas.move_to(cx, cy);
            canvas.line_to(x, y, r, g, b);
        }

        for ((x1, y1), (x2, y2)) in layout.score_segments(scores) {
            canvas.move_to(x1, y1);
            canvas.line_to(x2, y2, r, g, b);
        }

        self.draw_labels(canvas, &layout, legend);
        layout
    }

    fn draw_labels<C, L>(&mut self, canvas: &mut C, layout: &Layout, legend: &[L; NUM_AXES])
    where
        C: Surface,
        L: AsRef<str>,
    {
        let staging = layout.staging_size();
        self.glyph_buffer.resize(staging, staging);
        self.rotated_buffer.resize(staging, staging);
        let (text_x, text_y) = layout.glyph_origin();

        for (i, label) in legend.iter().enumerate() {
            self.glyph_buffer.fill(WHITE.0, WHITE.1, WHITE.2);
            self.glyphs
                .draw_glyph_pair(&mut self.glyph_buffer, text_x, text_y, label.as_ref());

            rotate(&self.glyph_buffer, &mut self.rotated_buffer, text_angle(i));
            clean_corners(&mut self.rotated_buffer);

            let (x, y) = layout.label_top_left(i);
            debug!(axis = i, x, y, "placing label");
            canvas.draw(x, y, &self.rotated_buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{angle_of, length};

    const LEGEND: [&str; NUM_AXES] = ["AB", "CD", "EF", "GH", "IJ", "KL", "MN", "OP"];

    type Segment = ((i32, i32), (i32, i32));

    /// Canvas that remembers every line and composite it was asked for
    struct RecordingSurface {
        inner: PixelBuffer,
        lines: Vec<Segment>,
        draws: Vec<(i32, i32, u32, u32)>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                inner: PixelBuffer::with_size(width, height),
                lines: Vec::new(),
                draws: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.inner.width()
        }

        fn height(&self) -> u32 {
            self.inner.height()
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.inner.resize(width, height);
        }

        fn get_pixel(&self, x: i32, y: i32) -> (u8, u8, u8) {
            self.inner.get_pixel(x, y)
        }

        fn set_pixel(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
            self.inner.set_pixel(x, y, r, g, b);
        }

        fn pen(&self) -> (i32, i32) {
            self.inner.pen()
        }

        fn move_to(&mut self, x: i32, y: i32) {
            self.inner.move_to(x, y);
        }

        fn fill(&mut self, r: u8, g: u8, b: u8) {
            self.inner.fill(r, g, b);
        }

        fn line_to(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
            self.lines.push((self.inner.pen(), (x, y)));
            self.inner.line_to(x, y, r, g, b);
        }

        fn draw<S: Surface>(&mut self, x: i32, y: i32, src: &S)
        where
            Self: Sized,
        {
            self.draws.push((x, y, src.width(), src.height()));
            self.inner.draw(x, y, src);
        }
    }

    fn normalized(segment: Segment) -> Segment {
        let (a, b) = segment;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    #[test]
    fn test_layout_for_400() {
        let layout = Layout::new(400, 400);
        assert_eq!(layout.size(), 400);
        assert_eq!(layout.center(), (200.0, 200.0));
        assert_eq!(layout.ray(), 182.0);
        assert_eq!(layout.staging_size(), 32);
        assert_eq!(layout.glyph_origin(), (10, 12));
        assert!((layout.label_ray() - (182.0 + 8.0 * SQRT_2)).abs() < 1e-12);
    }

    #[test]
    fn test_canvas_is_squared_to_shorter_edge() {
        assert_eq!(Layout::new(640, 480).size(), 480);
        assert_eq!(Layout::new(300, 900).size(), 300);
    }

    #[test]
    fn test_minimum_size_floor() {
        assert_eq!(Layout::new(10, 10).size(), 100);
        assert_eq!(Layout::new(0, 500).size(), 100);
    }

    #[test]
    fn test_first_vertex_is_straight_up() {
        let layout = Layout::new(400, 400);
        assert_eq!(layout.vertices()[0], (200, 18));
    }

    #[test]
    fn test_vertices_are_equidistant_and_45_degrees_apart() {
        let layout = Layout::new(400, 400);
        let (mx, my) = layout.center();
        for (i, &(x, y)) in layout.vertices().iter().enumerate() {
            let (dx, dy) = (x as f64 - mx, y as f64 - my);
            assert!((length(dx, dy) - layout.ray()).abs() <= 1.5, "vertex {}", i);

            let angle = angle_of(dx, dy);
            let expected = i as f64 * PI / 4.0;
            let diff = (angle - expected).abs();
            assert!(diff < 0.01 || (2.0 * PI - diff) < 0.01, "vertex {} at {}", i, angle);
        }
    }

    #[test]
    fn test_zero_scores_collapse_to_center() {
        let layout = Layout::new(400, 400);
        let center = layout.center_pixel();
        for (a, b) in layout.score_segments(&[0.0; NUM_AXES]) {
            assert_eq!(a, center);
            assert_eq!(b, center);
        }
    }

    #[test]
    fn test_full_scores_match_perimeter() {
        let layout = Layout::new(400, 400);
        let v = layout.vertices();
        for (i, segment) in layout.score_segments(&[1.0; NUM_AXES]).iter().enumerate() {
            assert_eq!(*segment, (v[i], v[(i + 1) % NUM_AXES]));
        }
    }

    #[test]
    fn test_edge_uses_only_its_own_axis_score() {
        let layout = Layout::new(400, 400);
        let mut scores = [0.0; NUM_AXES];
        scores[0] = 1.0;
        let segments = layout.score_segments(&scores);
        let v = layout.vertices();
        assert_eq!(segments[0], (v[0], v[1]));
        // The edge arriving at axis 0 stays at axis 7's score
        assert_eq!(segments[7], (layout.center_pixel(), layout.center_pixel()));

        scores = [0.5; NUM_AXES];
        for (a, b) in layout.score_segments(&scores) {
            for (x, y) in [a, b] {
                let d = length(x as f64 - 200.0, y as f64 - 200.0);
                assert!((d - 91.0).abs() <= 1.5);
            }
        }
    }

    #[test]
    fn test_labels_sit_in_wedge_middles() {
        let layout = Layout::new(400, 400);
        for i in 0..NUM_AXES {
            let (x, y) = layout.label_center(i);
            let angle = angle_of(x as f64 - 200.0, y as f64 - 200.0);
            assert!((angle - (0.125 + 0.25 * i as f64) * PI).abs() < 0.02, "label {}", i);

            let (tx, ty) = layout.label_top_left(i);
            assert_eq!((tx + 16, ty + 16), (x, y));
        }
    }

    #[test]
    fn test_text_angles() {
        assert!((text_angle(0) - 0.175 * PI).abs() < 1e-12);
        assert!((text_angle(3) - 0.925 * PI).abs() < 1e-12);
        assert!((label_angle(7) - 1.875 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_end_to_end_full_scores() {
        let mut canvas = RecordingSurface::new(400, 400);
        let mut renderer = CircumplexRenderer::new();
        let layout = renderer.render(&mut canvas, &[1.0; NUM_AXES], &LEGEND);

        assert_eq!((canvas.width(), canvas.height()), (400, 400));
        assert_eq!(layout.size(), 400);

        // 8 perimeter edges, 8 spokes, 8 score edges
        assert_eq!(canvas.lines.len(), 24);
        let mut perimeter: Vec<Segment> = canvas.lines[..8].iter().copied().map(normalized).collect();
        let mut score: Vec<Segment> = canvas.lines[16..].iter().copied().map(normalized).collect();
        perimeter.sort_unstable();
        score.sort_unstable();
        assert_eq!(perimeter, score);

        // Perimeter starts at the last vertex
        assert_eq!(canvas.lines[0], (layout.vertices()[7], layout.vertices()[0]));

        // Spokes leave the center
        for &(from, _) in &canvas.lines[8..16] {
            assert_eq!(from, (200, 200));
        }

        assert_eq!(canvas.draws.len(), NUM_AXES);
        for (i, &(x, y, w, h)) in canvas.draws.iter().enumerate() {
            assert_eq!((w, h), (32, 32));
            let angle = angle_of((x + 16) as f64 - 200.0, (y + 16) as f64 - 200.0);
            assert!((angle - label_angle(i)).abs() < 0.02, "label {} at {}", i, angle);
        }
        // First label is near the top, just right of the vertical axis
        let (x0, y0, _, _) = canvas.draws[0];
        assert!(x0 + 16 > 200 && y0 + 16 < 40);
    }

    #[test]
    fn test_rendered_pixels() {
        let mut canvas = PixelBuffer::with_size(400, 400);
        let mut renderer = CircumplexRenderer::new();
        renderer.render(&mut canvas, &[0.5; NUM_AXES], &LEGEND);

        assert_eq!(canvas.get_pixel(0, 0), WHITE);
        assert_eq!(canvas.get_pixel(399, 399), WHITE);
        assert_eq!(canvas.get_pixel(200, 200), BLACK);
        assert_eq!(canvas.get_pixel(200, 18), BLACK);
        // Right on a spoke, between score polygon and perimeter
        assert_eq!(canvas.get_pixel(200, 60), BLACK);
        // Inside a wedge, away from every line
        assert_eq!(canvas.get_pixel(240, 150), WHITE);

        // The first label leaves dark dots in its box
        let (tx, ty) = Layout::new(400, 400).label_top_left(0);
        let mut dark = 0;
        for y in ty..ty + 32 {
            for x in tx..tx + 32 {
                if canvas.get_pixel(x, y).0 < 160 {
                    dark += 1;
                }
            }
        }
        assert!(dark > 8, "only {} dark pixels in the label", dark);
    }

    #[test]
    fn test_small_canvas_is_enlarged() {
        let mut canvas = PixelBuffer::with_size(10, 10);
        CircumplexRenderer::new().render(&mut canvas, &[0.3; NUM_AXES], &LEGEND);
        assert_eq!((canvas.width(), canvas.height()), (100, 100));
    }

    #[test]
    fn test_renderer_is_reusable() {
        let mut renderer = CircumplexRenderer::new();
        let mut a = PixelBuffer::with_size(300, 300);
        let mut b = PixelBuffer::with_size(300, 300);
        renderer.render(&mut a, &[0.7; NUM_AXES], &LEGEND);
        renderer.render(&mut PixelBuffer::with_size(120, 500), &[0.1; NUM_AXES], &LEGEND);
        renderer.render(&mut b, &[0.7; NUM_AXES], &LEGEND);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    #[should_panic(expected = "exactly two characters")]
    fn test_rejects_long_label() {
        let mut legend = LEGEND;
        legend[3] = "GHI";
        CircumplexRenderer::new().render(&mut PixelBuffer::new(), &[0.5; NUM_AXES], &legend);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_rejects_score_above_one() {
        let mut scores = [0.5; NUM_AXES];
        scores[2] = 1.5;
        CircumplexRenderer::new().render(&mut PixelBuffer::new(), &scores, &LEGEND);
    }
}
