//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when grid or potential parameters violate their preconditions.
///
/// All checks run synchronously at construction time, before any matrix work.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a coordinate grid has fewer than 3 points.
    #[error("coordinate grids require at least 3 points; got {0}")]
    BadPointCount(usize),

    /// Returned when a non-positive domain half-width is encountered.
    #[error("domain half-widths must be greater than 0; got {0}")]
    BadHalfWidth(f64),

    /// Returned when a non-positive well width is encountered.
    #[error("well widths must be greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a non-positive angular frequency is encountered.
    #[error("angular frequencies must be greater than 0; got {0}")]
    BadFrequency(f64),

    /// Returned when a non-positive Pöschl–Teller shape parameter is
    /// encountered.
    #[error("Pöschl–Teller shape parameters must be greater than 0; got {0}")]
    BadShape(f64),

    /// Returned when a negative well separation is encountered.
    #[error("well separations must not be negative; got {0}")]
    BadSeparation(f64),

    /// Returned when a non-positive superlattice period is encountered.
    #[error("superlattice periods must be greater than 0; got {0}")]
    BadPeriod(f64),
}

impl ConfigError {
    pub(crate) fn check_points(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::BadPointCount(n))
    }

    pub(crate) fn check_half_width(A: f64) -> Result<(), Self> {
        (A > 0.0).then_some(()).ok_or(Self::BadHalfWidth(A))
    }

    pub(crate) fn check_width(W: f64) -> Result<(), Self> {
        (W > 0.0).then_some(()).ok_or(Self::BadWidth(W))
    }

    pub(crate) fn check_frequency(omega: f64) -> Result<(), Self> {
        (omega > 0.0).then_some(()).ok_or(Self::BadFrequency(omega))
    }

    pub(crate) fn check_shape(a: f64) -> Result<(), Self> {
        (a > 0.0).then_some(()).ok_or(Self::BadShape(a))
    }

    pub(crate) fn check_separation(B: f64) -> Result<(), Self> {
        (B >= 0.0).then_some(()).ok_or(Self::BadSeparation(B))
    }

    pub(crate) fn check_period(p: f64) -> Result<(), Self> {
        (p > 0.0).then_some(()).ok_or(Self::BadPeriod(p))
    }
}

/// Returned from the bound-state solving pipeline.
#[derive(Debug, Error)]
pub enum WellError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Returned when the eigendecomposition backend fails to converge.
    ///
    /// Fatal for the current run; retrying with identical input is pointless.
    #[error("eigendecomposition failed: {0}")]
    Eigh(#[from] LinalgError),

    /// Returned when the spectrum contains no strictly negative eigenvalue.
    ///
    /// Under the convention that continuum energy is normalized to zero this
    /// means the potential binds no states; callers must treat it as a
    /// defined outcome rather than proceeding to the display-scaling stage.
    #[error("no bound states exist for the given potential")]
    NoBoundStates,
}
