// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a grid of heatmap cells with an origin at 0,0, and a
//! rectangle on the complex plane with an arbitrary pair of corners
//! defining its minimum and maximum.
//!
//! Note the orientation: the *row* of a cell comes from the real part
//! of a point and is scaled by the image height, while the *column*
//! comes from the imaginary part and is scaled by the image width.
//! That decides which way up the finished image is.

use error::{NebulabrotError, Result};
use num::Complex;

/// Describes the width and height of the integral plane.  It is
/// assumed to start at 0,0 and all values are non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the minimum and maximum corners of the rectangle on the
/// complex plane that is both sampled and plotted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// A single heatmap cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Derived from the real component.
    pub row: usize,
    /// Derived from the imaginary component.
    pub col: usize,
}

/// Linear rescale of the real component onto `[0, image_height]`,
/// truncating toward zero.  No clamping: values outside
/// `[min_real, max_real]` produce indices outside the grid.
#[inline]
pub fn row_from_real(real: f64, min_real: f64, max_real: f64, image_height: usize) -> usize {
    ((real - min_real) * (image_height as f64 / (max_real - min_real))) as usize
}

/// Linear rescale of the imaginary component onto `[0, image_width]`,
/// truncating toward zero.  Same caveats as `row_from_real`.
#[inline]
pub fn col_from_imaginary(imag: f64, min_imag: f64, max_imag: f64, image_width: usize) -> usize {
    ((imag - min_imag) * (image_width as f64 / (max_imag - min_imag))) as usize
}

/// Maps points of the complex rectangle onto cells of the integral
/// plane.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// Width and height of the heatmap grid.
    pub integral_plane: IntegralPlane,
    /// The minimum and maximum corners of the complex rectangle.
    pub complex_plane: ComplexPlane,
}

impl PlaneMapper {
    /// Takes the size of the image and the two corners of the
    /// rectangle.  The minimum must be strictly below the maximum on
    /// both axes, and the image must have at least one pixel.
    pub fn new(
        width: usize,
        height: usize,
        minimum: Complex<f64>,
        maximum: Complex<f64>,
    ) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(NebulabrotError::InvalidPlane(format!(
                "image of {}x{} has no pixels",
                width, height
            )));
        }

        if !(minimum.re < maximum.re) {
            return Err(NebulabrotError::InvalidPlane(
                "The minimum corner is not to the left of the maximum corner".to_string(),
            ));
        }

        if !(minimum.im < maximum.im) {
            return Err(NebulabrotError::InvalidPlane(
                "The minimum corner is not below the maximum corner".to_string(),
            ));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(minimum, maximum),
        })
    }

    /// Image width, which is also the number of columns.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// Image height, which is also the number of rows.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The minimum corner.
    pub fn minimum(&self) -> Complex<f64> {
        self.complex_plane.0
    }

    /// The maximum corner.
    pub fn maximum(&self) -> Complex<f64> {
        self.complex_plane.1
    }

    /// Inclusive on both axes.  NaN never lies inside.
    pub fn contains(&self, point: &Complex<f64>) -> bool {
        let ComplexPlane(min, max) = self.complex_plane;
        point.re >= min.re && point.re <= max.re && point.im >= min.im && point.im <= max.im
    }

    /// Filters and maps a point to its cell.  Points on the maximum
    /// edge would land one past the grid, so they are folded into the
    /// last row or column.
    pub fn point_to_cell(&self, point: &Complex<f64>) -> Option<Cell> {
        if !self.contains(point) {
            return None;
        }
        let ComplexPlane(min, max) = self.complex_plane;
        let row = row_from_real(point.re, min.re, max.re, self.height());
        let col = col_from_imaginary(point.im, min.im, max.im, self.width());
        Some(Cell {
            row: row.min(self.height() - 1),
            col: col.min(self.width() - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_flat_rectangle() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(-1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_empty_grid() {
        let pm = PlaneMapper::new(0, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_passes_on_good_shape() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-1.0, -1.0), Complex::new(1.0, 1.0));
        assert!(pm.is_ok());
    }

    #[test]
    fn minimum_maps_to_first_index() {
        assert_eq!(row_from_real(-2.0, -2.0, 1.0, 7000), 0);
        assert_eq!(col_from_imaginary(-2.0, -2.0, 2.0, 7000), 0);
    }

    #[test]
    fn just_below_maximum_maps_to_last_index() {
        let below = 1.0 - 1e-9;
        assert_eq!(row_from_real(below, -2.0, 1.0, 300), 299);
        let below = 2.0 - 1e-9;
        assert_eq!(col_from_imaginary(below, -2.0, 2.0, 400), 399);
    }

    #[test]
    fn mapping_truncates_instead_of_rounding() {
        // 0.99 of a cell into the grid is still cell 0.
        assert_eq!(row_from_real(0.99, 0.0, 4.0, 4), 0);
        assert_eq!(col_from_imaginary(1.99, 0.0, 4.0, 4), 1);
    }

    #[test]
    fn rows_follow_height_and_columns_follow_width() {
        let pm = PlaneMapper::new(10, 5, Complex::new(0.0, 0.0), Complex::new(5.0, 5.0)).unwrap();
        assert_eq!(
            pm.point_to_cell(&Complex::new(2.5, 2.5)),
            Some(Cell { row: 2, col: 5 })
        );
    }

    #[test]
    fn point_to_cell_on_mixed_planes() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        assert_eq!(
            pm.point_to_cell(&Complex::new(0.0, 0.0)),
            Some(Cell { row: 2, col: 2 })
        );
        assert_eq!(
            pm.point_to_cell(&Complex::new(-2.0, -2.0)),
            Some(Cell { row: 0, col: 0 })
        );
        assert_eq!(
            pm.point_to_cell(&Complex::new(-1.5, 1.0)),
            Some(Cell { row: 0, col: 3 })
        );
    }

    #[test]
    fn maximum_edge_folds_into_last_cell() {
        let pm = PlaneMapper::new(640, 480, Complex::new(-2.0, -2.0), Complex::new(1.0, 2.0))
            .unwrap();
        assert_eq!(
            pm.point_to_cell(&Complex::new(1.0, 2.0)),
            Some(Cell { row: 479, col: 639 })
        );
    }

    #[test]
    fn points_outside_are_filtered() {
        let pm = PlaneMapper::new(4, 4, Complex::new(-2.0, -2.0), Complex::new(1.0, 2.0)).unwrap();
        assert_eq!(pm.point_to_cell(&Complex::new(1.0001, 0.0)), None);
        assert_eq!(pm.point_to_cell(&Complex::new(0.0, -2.5)), None);
        assert_eq!(pm.point_to_cell(&Complex::new(::std::f64::NAN, 0.0)), None);
        assert_eq!(pm.point_to_cell(&Complex::new(::std::f64::INFINITY, 0.0)), None);
    }
}
