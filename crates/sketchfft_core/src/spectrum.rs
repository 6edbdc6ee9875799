//! Drawing-to-spectrum transform.
//!
//! `compute` runs the full pipeline on a raster snapshot: scale samples to
//! [0, 1] and invert them so ink carries the signal, take the unnormalized
//! forward 2D DFT, rotate the zero frequency to the grid center, and
//! compress magnitudes with `ln(1 + m)` for display.

use image::GrayImage;
use log::debug;
use num_complex::Complex;
use rustfft::FftPlanner;
use serde::{Deserialize, Serialize};

use crate::field::{ComplexField, ScalarField};

/// Both fields a spectrum computation hands back to the host. They always
/// share the raster's dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumOutput {
    /// The drawing scaled to [0, 1] and inverted (ink near 1, background 0).
    pub normalized: ScalarField,
    /// `ln(1 + |F|)` of the centered DFT, non-negative and finite.
    pub log_magnitude: ScalarField,
}

/// Scale a grayscale raster to [0, 1] and invert it. White background pixels
/// map to exactly 0.0 and full ink to exactly 1.0, so a blank raster becomes
/// the zero field.
pub fn normalize(raster: &GrayImage) -> ScalarField {
    let rows = raster.height() as usize;
    let cols = raster.width() as usize;
    let data = raster
        .as_raw()
        .iter()
        .map(|&sample| 1.0 - f64::from(sample) / 255.0)
        .collect();
    ScalarField::from_parts(rows, cols, data)
}

/// 2D DFT engine with cached FFT plans.
///
/// Plans are reused across calls through the planner, so repeated transforms
/// of the same raster size only pay the planning cost once. Sizes may vary
/// between calls.
pub struct SpectrumTransform {
    planner: FftPlanner<f64>,
}

impl Default for SpectrumTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectrumTransform {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Unnormalized forward 2D DFT of a real field, factored into 1D passes:
    /// an FFT over every row, then an FFT over every column. The DC term
    /// ends up at index (0, 0) and equals the plain sum of the input
    /// samples.
    pub fn forward(&mut self, field: &ScalarField) -> ComplexField {
        let rows = field.rows();
        let cols = field.cols();
        let mut data: Vec<Complex<f64>> = field
            .as_slice()
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();
        if rows == 0 || cols == 0 {
            return ComplexField::from_parts(rows, cols, data);
        }

        // 1. Row pass, in place.
        let row_fft = self.planner.plan_fft_forward(cols);
        for row in data.chunks_exact_mut(cols) {
            row_fft.process(row);
        }

        // 2. Column pass: gather each column into a scratch buffer,
        //    transform, scatter back.
        let col_fft = self.planner.plan_fft_forward(rows);
        let mut column = vec![Complex::new(0.0, 0.0); rows];
        for c in 0..cols {
            for r in 0..rows {
                column[r] = data[r * cols + c];
            }
            col_fft.process(&mut column);
            for r in 0..rows {
                data[r * cols + c] = column[r];
            }
        }

        ComplexField::from_parts(rows, cols, data)
    }

    /// Full pipeline: normalize, forward DFT, center, log-compress.
    ///
    /// Pure and total: any raster produces well-defined output, a blank one
    /// yields all-zero fields.
    pub fn compute(&mut self, raster: &GrayImage) -> SpectrumOutput {
        let normalized = normalize(raster);
        let spectrum = self.forward(&normalized);
        let log_magnitude = spectrum.centered().log_magnitude();

        let dc = if spectrum.is_empty() {
            0.0
        } else {
            spectrum.get(0, 0).norm()
        };
        debug!(
            "spectrum {}x{}: dc magnitude {:.3}, max log magnitude {:.3}",
            normalized.rows(),
            normalized.cols(),
            dc,
            log_magnitude.max_value()
        );

        SpectrumOutput {
            normalized,
            log_magnitude,
        }
    }
}
