//! Row-major 2D value grids shared across the pipeline.
//!
//! `ScalarField` carries real samples (normalized drawings, log-magnitude
//! spectra), `ComplexField` carries DFT output. Both are flat `Vec`s with a
//! shape, indexed as `row * cols + col`.

use image::GrayImage;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::SketchError;

/// Real-valued grid. Values are unconstrained in general; the pipeline only
/// ever produces non-negative fields ([0, 1] drawings, log magnitudes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScalarField")]
pub struct ScalarField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Serde mirror for [`ScalarField`]. Deserialization funnels through
/// [`ScalarField::from_vec`], so a payload whose shape disagrees with its
/// data length is rejected instead of producing a grid that panics on
/// access.
#[derive(Deserialize)]
struct RawScalarField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawScalarField> for ScalarField {
    type Error = SketchError;

    fn try_from(raw: RawScalarField) -> Result<Self, Self::Error> {
        ScalarField::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl ScalarField {
    /// Zero-filled field of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a field from row-major samples, checking the length against the
    /// shape. The product check is overflow-safe, so absurd shapes are
    /// rejected rather than panicking.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, SketchError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(SketchError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Internal constructor for callers that produce exactly `rows * cols`
    /// samples by construction.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Row-major view of all samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Largest sample value, or 0.0 for an empty field.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0_f64, f64::max)
    }

    /// Quantize to an 8-bit grayscale image, scaling the largest sample to
    /// 255 and rounding to the nearest level. An all-zero field maps to an
    /// all-black image. Intended as the display handoff for hosts that
    /// render spectra directly.
    pub fn to_gray_image(&self) -> GrayImage {
        let max = self.max_value();
        let scale = if max > 0.0 { 255.0 / max } else { 0.0 };
        let pixels: Vec<u8> = self
            .data
            .iter()
            .map(|&v| (v * scale).round().clamp(0.0, 255.0) as u8)
            .collect();
        GrayImage::from_raw(self.cols as u32, self.rows as u32, pixels)
            .unwrap_or_else(|| GrayImage::new(self.cols as u32, self.rows as u32))
    }
}

// ============================================================================
// ComplexField: DFT output grid
// ============================================================================

/// Complex-valued grid holding a 2D DFT.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexField {
    rows: usize,
    cols: usize,
    data: Vec<Complex<f64>>,
}

impl ComplexField {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Complex::new(0.0, 0.0); rows * cols],
        }
    }

    /// Build a field from row-major samples, checking the length against the
    /// shape.
    pub fn from_vec(
        rows: usize,
        cols: usize,
        data: Vec<Complex<f64>>,
    ) -> Result<Self, SketchError> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(SketchError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<Complex<f64>>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex<f64> {
        self.data[row * self.cols + col]
    }

    pub fn as_slice(&self) -> &[Complex<f64>] {
        &self.data
    }

    /// Cyclically rotate the grid by half along each axis so the zero
    /// frequency lands at the center. For a dimension n the DC index moves
    /// from 0 to n / 2 (floor for odd n). Applying it to a DFT turns the
    /// corner-heavy layout into the familiar centered spectrum.
    pub fn centered(&self) -> ComplexField {
        let half_r = self.rows / 2;
        let half_c = self.cols / 2;
        let mut shifted = vec![Complex::new(0.0, 0.0); self.data.len()];
        for dst_r in 0..self.rows {
            // Gather form of dst = (src + half) mod n, valid for odd n too.
            let src_r = (dst_r + self.rows - half_r) % self.rows;
            for dst_c in 0..self.cols {
                let src_c = (dst_c + self.cols - half_c) % self.cols;
                shifted[dst_r * self.cols + dst_c] = self.data[src_r * self.cols + src_c];
            }
        }
        ComplexField {
            rows: self.rows,
            cols: self.cols,
            data: shifted,
        }
    }

    /// Elementwise magnitude.
    pub fn magnitude(&self) -> ScalarField {
        let data = self.data.iter().map(|c| c.norm()).collect();
        ScalarField::from_parts(self.rows, self.cols, data)
    }

    /// Elementwise `ln(1 + |value|)`, the display compression applied to
    /// spectra. Zero maps to zero and the output is always finite and
    /// non-negative.
    pub fn log_magnitude(&self) -> ScalarField {
        let data = self.data.iter().map(|c| c.norm().ln_1p()).collect();
        ScalarField::from_parts(self.rows, self.cols, data)
    }
}
