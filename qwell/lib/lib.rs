#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of
//! the one-dimensional, time-independent Schrödinger equation for a particle
//! bound in a potential well, via a three-point finite-difference
//! discretization and dense symmetric eigendecomposition.
//!
//! The pipeline runs strictly left to right:
//! - [`grid`]: uniform coordinate grids over a symmetric domain
//! - [`potential`]: the library of supported well shapes
//! - [`hamiltonian`]: assembly of the discretized Hamiltonian matrix
//! - [`solve`]: eigendecomposition, bound-state selection, and the
//!   per-potential driving logic
//! - [`scaling`]: preparation of stacked, overlap-resolved curves for
//!   rendering
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod potential;
pub mod hamiltonian;
pub mod solve;
pub mod scaling;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
