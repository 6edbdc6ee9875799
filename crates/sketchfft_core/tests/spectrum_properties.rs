//! Spectrum pipeline property suite.
//!
//! Verifies the numeric contract of the transform end to end: output shapes,
//! value ranges, DC placement after centering, linearity, impulse response,
//! and energy conservation.

use image::{GrayImage, Luma};
use sketchfft_core::{normalize, ScalarField, SpectrumTransform};

fn blank_raster(size: u32) -> GrayImage {
    GrayImage::from_pixel(size, size, Luma([255]))
}

fn raster_with_ink(size: u32, ink: &[(u32, u32)]) -> GrayImage {
    let mut raster = blank_raster(size);
    for &(x, y) in ink {
        raster.put_pixel(x, y, Luma([0]));
    }
    raster
}

/// Deterministic non-uniform field with samples in [0, 1).
fn patterned_field(rows: usize, cols: usize) -> ScalarField {
    let data = (0..rows * cols)
        .map(|i| ((i * 13 + 5) % 17) as f64 / 17.0)
        .collect();
    ScalarField::from_vec(rows, cols, data).unwrap()
}

#[test]
fn test_outputs_share_raster_shape() {
    let mut transform = SpectrumTransform::new();
    for size in [1u32, 4, 5, 8, 32] {
        let raster = raster_with_ink(size, &[(0, 0)]);
        let output = transform.compute(&raster);
        let n = size as usize;
        assert_eq!(output.normalized.rows(), n, "normalized rows for size {size}");
        assert_eq!(output.normalized.cols(), n, "normalized cols for size {size}");
        assert_eq!(output.log_magnitude.rows(), n);
        assert_eq!(output.log_magnitude.cols(), n);
    }
}

#[test]
fn test_normalized_stays_in_unit_range() {
    let mut raster = blank_raster(16);
    for y in 0..16 {
        for x in 0..16 {
            raster.put_pixel(x, y, Luma([((x * 37 + y * 101) % 256) as u8]));
        }
    }
    let field = normalize(&raster);
    assert!(
        field.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)),
        "every normalized sample must lie in [0, 1]"
    );
}

#[test]
fn test_blank_raster_yields_all_zero_outputs() {
    let mut transform = SpectrumTransform::new();
    let output = transform.compute(&blank_raster(8));
    assert!(
        output.normalized.as_slice().iter().all(|&v| v == 0.0),
        "white background must normalize to exact zeros"
    );
    assert!(
        output.log_magnitude.as_slice().iter().all(|&v| v == 0.0),
        "zero input must produce a zero log-magnitude spectrum"
    );
}

#[test]
fn test_zero_field_transforms_to_zero_log_magnitude() {
    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(&ScalarField::new(6, 6));
    let log_mag = spectrum.centered().log_magnitude();
    assert!(log_mag.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_dc_term_is_sample_sum_at_grid_center() {
    let size = 8u32;
    let ink = [(1, 1), (2, 5), (6, 3), (7, 7), (4, 4)];
    let raster = raster_with_ink(size, &ink);

    let field = normalize(&raster);
    let sum: f64 = field.as_slice().iter().sum();
    // Ink pixels normalize to exactly 1.0, everything else to 0.0.
    assert!((sum - ink.len() as f64).abs() < 1e-12);

    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(&field);
    assert!(
        (spectrum.get(0, 0).re - sum).abs() < 1e-9,
        "unshifted DC must equal the sample sum"
    );
    assert!(spectrum.get(0, 0).im.abs() < 1e-9);

    let centered = spectrum.centered();
    assert!(
        (centered.get(4, 4).re - sum).abs() < 1e-9,
        "centering must move DC to (N/2, N/2)"
    );
}

#[test]
fn test_odd_size_centers_dc_at_floor_half() {
    let raster = raster_with_ink(5, &[(0, 0), (3, 2)]);
    let field = normalize(&raster);
    let sum: f64 = field.as_slice().iter().sum();

    let mut transform = SpectrumTransform::new();
    let centered = transform.forward(&field).centered();
    assert!(
        (centered.get(2, 2).re - sum).abs() < 1e-9,
        "for N = 5 the DC term belongs at (2, 2)"
    );
}

#[test]
fn test_dc_peak_dominates_log_magnitude() {
    let mut transform = SpectrumTransform::new();
    let raster = raster_with_ink(8, &[(2, 2), (3, 2), (4, 2), (5, 5)]);
    let output = transform.compute(&raster);

    // Non-negative input means no bin can beat the DC sum.
    let center = output.log_magnitude.get(4, 4);
    assert!(center > 0.0);
    assert!(
        (center - output.log_magnitude.max_value()).abs() < 1e-12,
        "centered DC must be the brightest log-magnitude bin"
    );
}

#[test]
fn test_spectrum_scales_linearly_with_input() {
    let field = patterned_field(6, 6);
    let scaled = ScalarField::from_vec(
        6,
        6,
        field.as_slice().iter().map(|&v| v * 2.5).collect(),
    )
    .unwrap();

    let mut transform = SpectrumTransform::new();
    let base = transform.forward(&field).magnitude();
    let boosted = transform.forward(&scaled).magnitude();

    for (a, b) in base.as_slice().iter().zip(boosted.as_slice()) {
        assert!(
            (b - a * 2.5).abs() < 1e-9,
            "scaling the drawing by 2.5 must scale every magnitude by 2.5"
        );
    }
}

#[test]
fn test_impulse_has_flat_unit_spectrum() {
    let mut data = vec![0.0; 16];
    data[0] = 1.0;
    let impulse = ScalarField::from_vec(4, 4, data).unwrap();

    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(&impulse);
    for r in 0..4 {
        for c in 0..4 {
            assert!(
                (spectrum.get(r, c).norm() - 1.0).abs() < 1e-9,
                "impulse spectrum must have unit magnitude at ({r}, {c})"
            );
        }
    }

    // Centering only permutes bins, so the flat magnitude survives and the
    // log compression gives ln(2) everywhere.
    let log_mag = spectrum.centered().log_magnitude();
    for &v in log_mag.as_slice() {
        assert!((v - 2.0_f64.ln()).abs() < 1e-9);
    }
}

#[test]
fn test_parseval_energy_is_conserved() {
    let field = patterned_field(8, 8);
    let samples = field.len() as f64;
    let input_energy: f64 = field.as_slice().iter().map(|v| v * v).sum();

    let mut transform = SpectrumTransform::new();
    let spectrum = transform.forward(&field);
    let output_energy: f64 = spectrum.as_slice().iter().map(|c| c.norm_sqr()).sum();

    // Unnormalized DFT: sum |F|^2 = N * sum |f|^2.
    assert!(
        (output_energy - samples * input_energy).abs() < 1e-6 * samples * input_energy,
        "Parseval mismatch: {output_energy} vs {}",
        samples * input_energy
    );
}
