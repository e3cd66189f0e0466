//! Assembly of the discretized Hamiltonian matrix.
//!
//! The kinetic term is the three-point finite-difference Laplacian scaled by
//! -ħ²/2m with ħ = m = 1, giving the dense symmetric operator
//! ```text
//! H[i][i]   = 1/dx² + U[i]
//! H[i][i±1] = -1/2dx²
//! ```

use ndarray as nd;
use crate::Arr1;

/// Build the Hamiltonian matrix for a potential sampled over even intervals.
///
/// The result is symmetric by construction.
///
/// *Panics if `U` has length less than 2*.
pub fn build<S>(dx: f64, U: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = U.len();
    let ondx2 = dx.powi(2).recip();
    let mut H: nd::Array2<f64> = nd::Array2::from_diag_elem(n, ondx2);
    H.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(-0.5 * ondx2);
    H.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(-0.5 * ondx2);
    let mut H_diag = H.diag_mut();
    H_diag += U;
    H
}
