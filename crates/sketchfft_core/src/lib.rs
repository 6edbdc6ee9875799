//! Sketch-to-spectrum core.
//!
//! Hosts draw grayscale strokes onto a square raster ([`StrokeBuffer`]) and
//! ask for the centered 2D discrete Fourier transform of the drawing
//! ([`SpectrumTransform`]). The pipeline is normalize (scale to [0, 1] and
//! invert so ink carries the signal), forward DFT, cyclic shift of the zero
//! frequency to the grid center, then `log1p` magnitude compression for
//! display.
//!
//! The crate is synchronous and allocation-only: no I/O, no window handling,
//! no rendering. A UI layer feeds [`SketchEvent`]s into a [`SketchSession`]
//! and draws the returned fields however it likes.

pub mod config;
pub mod field;
pub mod raster;
pub mod session;
pub mod spectrum;

pub use config::SketchConfig;
pub use field::{ComplexField, ScalarField};
pub use raster::StrokeBuffer;
pub use session::{SketchEvent, SketchSession};
pub use spectrum::{normalize, SpectrumOutput, SpectrumTransform};

use thiserror::Error;

/// Errors surfaced by the sketch core.
///
/// Drawing and transforming are total operations; only configuration and
/// shape-checked construction can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// Raster edge length that cannot back a drawing surface.
    #[error("invalid raster size {0}, expected a positive edge length")]
    InvalidSize(u32),
    /// Field built from a sample vector whose length does not match its shape.
    #[error("field data length {len} does not match {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
