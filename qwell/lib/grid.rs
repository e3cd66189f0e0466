//! Uniform one-dimensional coordinate grids over a symmetric domain.

use ndarray as nd;
use crate::error::ConfigError;

/// A uniform grid of `n` points spanning `[-A, A]` inclusive.
///
/// Arrays borrowed from this type are guaranteed to be sampled with constant
/// spacing `dx = 2A / (n - 1)`.
#[derive(Clone, Debug)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // grid spacing
    dx: f64,
    // domain half-width
    half_width: f64,
    // array size
    n: usize,
}

impl Grid {
    /// Create a new `Grid` from a domain half-width and a point count.
    ///
    /// Returns [`ConfigError::BadPointCount`] for fewer than 3 points and
    /// [`ConfigError::BadHalfWidth`] for a non-positive half-width.
    pub fn new(half_width: f64, points: usize) -> Result<Self, ConfigError> {
        ConfigError::check_points(points)?;
        ConfigError::check_half_width(half_width)?;
        let x: nd::Array1<f64>
            = nd::Array1::linspace(-half_width, half_width, points);
        let dx = x[1] - x[0];
        Ok(Self { x, dx, half_width, n: points })
    }

    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get the domain half-width.
    pub fn get_half_width(&self) -> f64 { self.half_width }

    /// Get the length of the coordinate array.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_spacing() {
        let grid = Grid::new(1.0, 5).unwrap();
        let x = grid.get_x();
        assert_eq!(grid.len(), 5);
        assert!((grid.get_dx() - 0.5).abs() < 1e-15);
        assert!((x[0] + 1.0).abs() < 1e-15);
        assert!((x[4] - 1.0).abs() < 1e-15);
        for k in 1..grid.len() {
            assert!((x[k] - x[k - 1] - grid.get_dx()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_spacing_formula() {
        let grid = Grid::new(8.0, 2000).unwrap();
        assert!((grid.get_dx() - 16.0 / 1999.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            Grid::new(1.0, 2),
            Err(ConfigError::BadPointCount(2)),
        ));
        assert!(matches!(
            Grid::new(0.0, 100),
            Err(ConfigError::BadHalfWidth(_)),
        ));
        assert!(matches!(
            Grid::new(-2.5, 100),
            Err(ConfigError::BadHalfWidth(_)),
        ));
    }
}
