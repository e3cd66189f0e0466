//! The library of supported potential wells.
//!
//! Every variant is a pure function of position plus its parameters; sampling
//! a [`Grid`] produces the potential array consumed by
//! [`hamiltonian::build`][crate::hamiltonian::build]. All quantities are in
//! atomic units (ħ = m = 1) with continuum energy normalized to zero.

use ndarray as nd;
use crate::{ error::ConfigError, grid::Grid };

// unit step: 1 for t ≥ 0, 0 otherwise
fn indicator(t: f64) -> f64 {
    if t >= 0.0 { 1.0 } else { 0.0 }
}

/// Potential-well selector and parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum Potential {
    /// Flat well of depth `depth` spanning `[-width/2, width/2]`.
    Square {
        /// Well depth.
        depth: f64,
        /// Full well width.
        width: f64,
    },
    /// Harmonic well `U(x) = ω²x²/2 - D`.
    Harmonic {
        /// Angular frequency.
        omega: f64,
        /// Well depth.
        depth: f64,
    },
    /// Pöschl–Teller well `U(x) = -A(A+1)/cosh²(Bx) + C`.
    PoschlTeller {
        /// Depth-like shape parameter.
        a: f64,
        /// Width-like shape parameter.
        b: f64,
        /// Constant energy offset.
        c: f64,
    },
    /// Two flat wells of width `width`, inner edges `separation` apart.
    DoubleSquare {
        /// Depth of each well.
        depth: f64,
        /// Full width of each well.
        width: f64,
        /// Distance between the wells' inner edges.
        separation: f64,
    },
    /// Periodic square wave alternating between `-depth/2` and `+depth/2`.
    Superlattice {
        /// Peak-to-peak amplitude.
        depth: f64,
        /// Spatial period.
        period: f64,
    },
}

impl Potential {
    /// Evaluate the potential at a single position.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Square { depth, width } => {
                let W = width / 2.0;
                -depth * (indicator(x + W) - indicator(x - W))
            },
            Self::Harmonic { omega, depth } => {
                0.5 * omega.powi(2) * x.powi(2) - depth
            },
            Self::PoschlTeller { a, b, c } => {
                -a * (a + 1.0) / (b * x).cosh().powi(2) + c
            },
            Self::DoubleSquare { depth, width, separation } => {
                let W = width;
                let B = separation / 2.0;
                -depth * (
                    indicator(x + W + B) - indicator(x + B)
                    + indicator(x - B) - indicator(x - W - B)
                )
            },
            Self::Superlattice { depth, period } => {
                // centered remainder in [-period/2, period/2)
                let r = x - (x / period).round() * period;
                -depth * (indicator(r) - 0.5)
            },
        }
    }

    /// Sample the potential over a coordinate grid.
    pub fn sample(&self, grid: &Grid) -> nd::Array1<f64> {
        grid.get_x().mapv(|xk| self.evaluate(xk))
    }

    /// Check all parameter preconditions.
    ///
    /// Depths are deliberately unconstrained: a non-binding depth surfaces
    /// downstream as
    /// [`WellError::NoBoundStates`][crate::error::WellError::NoBoundStates].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Square { width, .. } => {
                ConfigError::check_width(width)
            },
            Self::Harmonic { omega, .. } => {
                ConfigError::check_frequency(omega)
            },
            Self::PoschlTeller { a, b, .. } => {
                ConfigError::check_shape(a)?;
                ConfigError::check_shape(b)
            },
            Self::DoubleSquare { width, separation, .. } => {
                ConfigError::check_width(width)?;
                ConfigError::check_separation(separation)
            },
            Self::Superlattice { period, .. } => {
                ConfigError::check_period(period)
            },
        }
    }

    /// Return the labeled parameter set for reporting.
    ///
    /// Labels and values are index-aligned by construction.
    pub fn describe(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Square { depth, width } => vec![
                ("Well Width", width),
                ("Well Depth", depth),
            ],
            Self::Harmonic { omega, depth } => vec![
                // m = 1, so k = mω² = ω²
                ("k", omega.powi(2)),
                ("Depth (a.u.)", depth),
            ],
            Self::PoschlTeller { a, b, c } => vec![
                ("A", a),
                ("B", b),
                ("C", c),
            ],
            Self::DoubleSquare { depth, width, separation } => vec![
                ("Well Width", width),
                ("Well Depth", depth),
                ("Distance Apart", separation),
            ],
            Self::Superlattice { depth, period } => vec![
                ("Period", period),
                ("Depth", depth),
            ],
        }
    }

    /// Return the display title of the variant.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Square { .. } => "Particle in a Finite Well",
            Self::Harmonic { .. } => "Particle in a Harmonic Well",
            Self::PoschlTeller { .. }
                => "Particle in a Poschl-Teller Potential",
            Self::DoubleSquare { .. } => "Particle in a Double Finite Well",
            Self::Superlattice { .. } => "Particle in a Superlattice",
        }
    }

    /// Return the 1-based case number of the variant.
    pub fn case_id(&self) -> usize {
        match self {
            Self::Square { .. } => 1,
            Self::Harmonic { .. } => 2,
            Self::PoschlTeller { .. } => 3,
            Self::DoubleSquare { .. } => 4,
            Self::Superlattice { .. } => 5,
        }
    }

    /// Return a domain half-width sized to comfortably contain the well and
    /// the evanescent tails of its bound states.
    pub fn default_half_width(&self) -> f64 {
        match *self {
            Self::Square { width, .. } => width,
            Self::Harmonic { omega, depth } => {
                // twice the classical turning point of the deepest orbit
                2.0 * (2.0 * depth.abs()).sqrt() / omega
            },
            Self::PoschlTeller { a, b: _, c } => {
                2.0 * (2.0 * c.abs() / (a * (a + 1.0))).sqrt()
            },
            Self::DoubleSquare { width, separation, .. } => {
                2.0 * (2.0 * width + separation)
            },
            Self::Superlattice { period, .. } => 2.0 * period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_profile() {
        let U = Potential::Square { depth: 100.0, width: 1.0 };
        assert_eq!(U.evaluate(0.0), -100.0);
        assert_eq!(U.evaluate(0.49), -100.0);
        assert_eq!(U.evaluate(-0.5), -100.0);
        assert_eq!(U.evaluate(0.51), 0.0);
        assert_eq!(U.evaluate(-0.51), 0.0);
    }

    #[test]
    fn test_harmonic_profile() {
        let U = Potential::Harmonic { omega: 0.5, depth: 2.0 };
        assert!((U.evaluate(0.0) + 2.0).abs() < 1e-15);
        assert!((U.evaluate(2.0) - (0.5 * 0.25 * 4.0 - 2.0)).abs() < 1e-15);
        assert_eq!(U.evaluate(1.0), U.evaluate(-1.0));
    }

    #[test]
    fn test_poschl_teller_profile() {
        let U = Potential::PoschlTeller { a: 20.0, b: 5.0, c: 5.0 };
        assert!((U.evaluate(0.0) - (-20.0 * 21.0 + 5.0)).abs() < 1e-12);
        // far from the well only the offset remains
        assert!((U.evaluate(10.0) - 5.0).abs() < 1e-12);
        assert_eq!(U.evaluate(0.3), U.evaluate(-0.3));
    }

    #[test]
    fn test_double_square_profile() {
        let U = Potential::DoubleSquare {
            depth: 100.0,
            width: 1.0,
            separation: 1.0,
        };
        // wells span [-1.5, -0.5] and [0.5, 1.5]
        assert_eq!(U.evaluate(-1.0), -100.0);
        assert_eq!(U.evaluate(1.0), -100.0);
        assert_eq!(U.evaluate(0.0), 0.0);
        assert_eq!(U.evaluate(2.0), 0.0);
        assert_eq!(U.evaluate(-2.0), 0.0);
    }

    #[test]
    fn test_superlattice_square_wave() {
        let U = Potential::Superlattice { depth: 25.0, period: 2.5 };
        let lo = U.evaluate(0.5);
        let hi = U.evaluate(-0.5);
        assert!((lo + 12.5).abs() < 1e-12);
        assert!((hi - 12.5).abs() < 1e-12);
        // periodicity
        for &x in &[-3.0, -0.7, 0.0, 0.4, 1.9] {
            assert!((U.evaluate(x + 2.5) - U.evaluate(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_describe_is_label_aligned() {
        let cases = [
            Potential::Square { depth: 100.0, width: 1.0 },
            Potential::Harmonic { omega: 0.5, depth: 2.0 },
            Potential::PoschlTeller { a: 20.0, b: 5.0, c: 5.0 },
            Potential::DoubleSquare {
                depth: 100.0, width: 1.0, separation: 1.0 },
            Potential::Superlattice { depth: 25.0, period: 2.5 },
        ];
        for (k, U) in cases.iter().enumerate() {
            assert_eq!(U.case_id(), k + 1);
            assert!(!U.describe().is_empty());
            assert!(U.validate().is_ok());
        }
        let desc = cases[1].describe();
        assert_eq!(desc[0].0, "k");
        assert!((desc[0].1 - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(matches!(
            Potential::Square { depth: 1.0, width: 0.0 }.validate(),
            Err(ConfigError::BadWidth(_)),
        ));
        assert!(matches!(
            Potential::Harmonic { omega: -0.5, depth: 2.0 }.validate(),
            Err(ConfigError::BadFrequency(_)),
        ));
        assert!(matches!(
            Potential::PoschlTeller { a: 0.0, b: 5.0, c: 5.0 }.validate(),
            Err(ConfigError::BadShape(_)),
        ));
        assert!(matches!(
            Potential::DoubleSquare {
                depth: 1.0, width: 1.0, separation: -1.0 }.validate(),
            Err(ConfigError::BadSeparation(_)),
        ));
        assert!(matches!(
            Potential::Superlattice { depth: 25.0, period: 0.0 }.validate(),
            Err(ConfigError::BadPeriod(_)),
        ));
    }

    #[test]
    fn test_default_half_width() {
        let harm = Potential::Harmonic { omega: 0.5, depth: 2.0 };
        assert!((harm.default_half_width() - 8.0).abs() < 1e-12);
        let square = Potential::Square { depth: 100.0, width: 1.0 };
        assert!((square.default_half_width() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_sampling_matches_pointwise_evaluation() {
        let grid = Grid::new(2.0, 101).unwrap();
        let U = Potential::Harmonic { omega: 0.5, depth: 2.0 };
        let sampled = U.sample(&grid);
        assert_eq!(sampled.len(), grid.len());
        for (xk, Uk) in grid.get_x().iter().zip(&sampled) {
            assert!((U.evaluate(*xk) - *Uk).abs() < 1e-15);
        }
    }
}
