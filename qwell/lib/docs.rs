//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Bound states](#bound-states)
//! - [Display scaling](#display-scaling)
//!
//! # Background
//! The time-independent Schrödinger equation (TISE) for a particle of mass
//! *m* in a conservative potential *V*(*x*) is the eigenvalue problem
//! ```text
//!    ħ²  ∂²ψ
//! - --- ---- + V(x) ψ(x) = E ψ(x)
//!   2 m  ∂x²
//! ```
//! Working in atomic units (*ħ* = *m* = 1) and discretizing over a uniform
//! grid
//! ```text
//! x[i] = -A + i δx, i ∊ {0, ..., N - 1}, δx = 2 A / (N - 1)
//! ```
//! the second derivative is approximated with the three-point stencil
//! ```text
//! ∂²ψ      ψ[i - 1] - 2 ψ[i] + ψ[i + 1]
//! --- [i] ≈ ---------------------------
//! ∂x²                  δx²
//! ```
//! which carries an *O*(*δx*²) error term. The TISE then becomes a direct
//! matrix eigenvalue problem for the dense symmetric operator
//! ```text
//! H[i][i]     = 1/δx² + V(x[i])
//! H[i][i ± 1] = -1/2δx²
//! ```
//! whose full spectrum is obtained from a standard dense symmetric
//! eigendecomposition (tridiagonalization plus implicit QR). Truncating the
//! grid at ±*A* imposes hard walls there, so the domain must be sized to
//! contain the evanescent tails of every state of interest.
//!
//! # Bound states
//! All potentials in this crate normalize the continuum threshold to zero
//! energy, so the bound states are exactly the eigenpairs with *E* < 0.
//! Since the eigenvalues are returned in ascending order, these form a
//! leading prefix of the spectrum and counting them is a single scan. This
//! is a modeling convention, not a universal truth: a potential with a
//! different zero-point would need its threshold subtracted first.
//!
//! # Display scaling
//! Stacked wavefunction plots draw each state offset vertically by its own
//! energy over the shared potential curve. With raw energies the offsets
//! dwarf the curves themselves, so both are divided by a common scale
//! factor found iteratively: starting from 1, the factor grows in fixed
//! increments until, for the first pair of sufficiently separated states
//! (energy gap above [`GAP_THRESHOLD`][crate::scaling::GAP_THRESHOLD]), the
//! gap between the offset envelopes drops below the curve height divided by
//! [`OVERLAP_FACTOR`][crate::scaling::OVERLAP_FACTOR]. The number of
//! displayed states is then grown
//! until the topmost offset curve crosses the continuum line, and that
//! probe state is dropped. Both searches are capped; on exhaustion the
//! display falls back to unit scaling.
