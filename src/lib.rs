//! Circumplex chart rendering
//!
//! Draws an octagonal radar chart with eight scored axes onto a 24-bit RGB
//! surface. Axis labels are two-character dot-matrix glyphs that are rotated
//! onto their wedge with a per-pixel bilinear resampler, since the surface
//! offers no rotated-text or transform primitive.

pub mod circumplex;
pub mod config;
pub mod display;
pub mod geometry;
pub mod log;

pub use circumplex::{CircumplexRenderer, Layout, NUM_AXES};
pub use config::{ChartConfig, ConfigError};
pub use display::{DotMatrix, GlyphDrawer, PixelBuffer, Surface};
