//! Eigendecomposition of the Hamiltonian, bound-state selection, and the
//! per-potential driving pipeline.

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::{
    Arr1,
    error::WellError,
    grid::Grid,
    hamiltonian,
    potential::Potential,
    scaling::{ self, ScaledPlotData },
    utils,
};

pub type WellResult<T> = Result<T, WellError>;

/// A full solution to the discretized TISE.
///
/// This struct is usually only returned by an [`EigenBackend`]; you probably
/// won't ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct EigenSystem {
    /// Energies in non-decreasing order.
    pub energies: nd::Array1<f64>,
    /// Orthonormal eigenvectors; column `i` pairs with `energies[i]`.
    pub states: nd::Array2<f64>,
}

impl EigenSystem {
    /// Get the number of solutions.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }

    /// Get a view of the `i`-th eigenvector.
    pub fn state(&self, i: usize) -> nd::ArrayView1<f64> {
        self.states.column(i)
    }

    /// Return the `i`-th eigenvector renormalized under the grid measure
    /// (`∫|ψ|²dx = 1`) for grid spacing `dx`.
    ///
    /// The stored eigenvectors are orthonormal in the plain ℓ² sense; use
    /// this when a physically normalized wavefunction is needed.
    pub fn normalized_state(&self, i: usize, dx: f64) -> nd::Array1<f64> {
        utils::wf_normalized(&self.state(i), dx)
    }

    /// Count the bound states in the spectrum.
    ///
    /// See [`bound_states`].
    pub fn bound_count(&self) -> usize {
        bound_states(&self.energies)
    }
}

/// Interface to a dense symmetric eigendecomposition routine.
///
/// Implementations must return energies in non-decreasing order with
/// orthonormal eigenvectors, deterministically for a given matrix.
pub trait EigenBackend {
    /// Decompose a symmetric matrix, consuming it.
    fn eigh(&self, H: nd::Array2<f64>) -> WellResult<EigenSystem>;
}

/// Default backend: LAPACK's dense symmetric solver via
/// [`ndarray-linalg`][ndarray_linalg].
#[derive(Copy, Clone, Debug, Default)]
pub struct Lapack;

impl EigenBackend for Lapack {
    fn eigh(&self, H: nd::Array2<f64>) -> WellResult<EigenSystem> {
        let (energies, states): (nd::Array1<f64>, nd::Array2<f64>)
            = H.eigh_into(la::UPLO::Lower)?;
        Ok(EigenSystem { energies, states })
    }
}

/// Count the leading strictly negative entries of an ascending energy array.
///
/// Under the convention that continuum energy is normalized to zero, this is
/// the number of bound states. The scan stops at the first non-negative
/// entry; bound states are assumed to form a dense negative-energy prefix.
pub fn bound_states<S>(energies: &Arr1<S>) -> usize
where S: nd::Data<Elem = f64>
{
    energies.iter().take_while(|ek| **ek < 0.0).count()
}

/// Simple record tying a potential to the grid it is sampled on.
///
/// Arrays borrowed from this type are guaranteed to have the same length and
/// to be sampled for a coordinate grid with uniform spacing.
#[derive(Clone, Debug)]
pub struct Well {
    grid: Grid,
    potential: Potential,
    U: nd::Array1<f64>,
}

impl Well {
    /// Create a new `Well`, sampling the potential over a fresh grid.
    pub fn new(potential: Potential, half_width: f64, points: usize)
        -> WellResult<Self>
    {
        potential.validate()?;
        let grid = Grid::new(half_width, points)?;
        let U = potential.sample(&grid);
        Ok(Self { grid, potential, U })
    }

    /// Like [`Self::new`], with the domain half-width taken from
    /// [`Potential::default_half_width`].
    pub fn with_default_domain(potential: Potential, points: usize)
        -> WellResult<Self>
    {
        potential.validate()?;
        let half_width = potential.default_half_width();
        Self::new(potential, half_width, points)
    }

    /// Get a reference to the coordinate grid.
    pub fn get_grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the potential.
    pub fn get_potential(&self) -> &Potential { &self.potential }

    /// Get a reference to the sampled potential array.
    pub fn get_U(&self) -> &nd::Array1<f64> { &self.U }

    /// Assemble the Hamiltonian matrix for this well.
    pub fn hamiltonian(&self) -> nd::Array2<f64> {
        hamiltonian::build(self.grid.get_dx(), &self.U)
    }

    /// Decompose this well's Hamiltonian with the given backend.
    pub fn solve<B: EigenBackend>(&self, backend: &B)
        -> WellResult<EigenSystem>
    {
        backend.eigh(self.hamiltonian())
    }
}

/// All data produced for one potential-selection run.
#[derive(Clone, Debug)]
pub struct BoundStates {
    /// Full eigensystem of the discretized Hamiltonian.
    pub eig: EigenSystem,
    /// Number of bound states (always at least 1).
    pub n_bound: usize,
    /// Overlap-resolved curves ready for rendering.
    pub plot: ScaledPlotData,
}

/// Master driving function: Hamiltonian assembly, eigendecomposition,
/// bound-state selection, and display scaling for any [`Potential`].
///
/// Returns [`WellError::NoBoundStates`] when the spectrum has no strictly
/// negative eigenvalue, before any scaling work is attempted.
pub fn solve_well<B: EigenBackend>(well: &Well, backend: &B)
    -> WellResult<BoundStates>
{
    let eig = well.solve(backend)?;
    let n = eig.bound_count();
    if n == 0 { return Err(WellError::NoBoundStates); }
    let plot = scaling::resolve_overlap(&eig, well.get_U(), n);
    Ok(BoundStates { eig, n_bound: n, plot })
}
