//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Num;
use crate::Arr1;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the squared norm of a real wavefunction under the grid measure.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let q2: nd::Array1<f64> = q.mapv(|qk| qk * qk);
    trapz(&q2, dx)
}

/// Calculate the inner product of two real wavefunctions under the grid
/// measure.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(q: &Arr1<S>, p: &Arr1<T>, dx: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let qp: nd::Array1<f64>
        = q.iter().zip(p).map(|(qk, pk)| qk * pk).collect();
    trapz(&qp, dx)
}

/// Return a copy of a wavefunction normalized under the grid measure.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S>(q: &Arr1<S>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use ndarray as nd;

    #[test]
    fn test_trapz() {
        let y: nd::Array1<f64> = nd::Array1::from_elem(11, 3.0);
        assert!((trapz(&y, 0.1) - 3.0).abs() < 1e-12);
        let y: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 101);
        assert!((trapz(&y, 0.01) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wf_norm_and_normalize() {
        // sin(πx) on [0, 1] has squared norm 1/2
        let n = 1001;
        let dx = 1.0 / (n as f64 - 1.0);
        let q: nd::Array1<f64>
            = nd::Array1::linspace(0.0, 1.0, n).mapv(|x| (PI * x).sin());
        assert!((wf_norm(&q, dx) - 0.5).abs() < 1e-6);
        let qn = wf_normalized(&q, dx);
        assert!((wf_norm(&qn, dx) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_wf_dot_orthogonal_modes() {
        let n = 1001;
        let dx = 1.0 / (n as f64 - 1.0);
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, n);
        let q1 = x.mapv(|xk| (PI * xk).sin());
        let q2 = x.mapv(|xk| (2.0 * PI * xk).sin());
        assert!(wf_dot(&q1, &q2, dx).abs() < 1e-8);
    }
}
