//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn assert_slice_f64_absolute(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_absolute_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that every row and every column of `matrix` sums to 1 within `epsilon`.
pub fn assert_stochastic(matrix: &crate::linear::Matrix<f64>, epsilon: f64) {
    use crate::probs::SliceExt;
    for row in 0..matrix.rows() {
        assert_float_absolute_eq!(1.0, matrix.row_slice(row).sum(), epsilon);
    }
    for col in 0..matrix.cols() {
        let sum: f64 = (0..matrix.rows()).map(|row| matrix[(row, col)]).sum();
        assert_float_absolute_eq!(1.0, sum, epsilon);
    }
}
