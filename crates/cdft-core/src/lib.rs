//! # cdft Core Library
//!
//! Conceptual density functional theory (DFT) reactivity descriptors based on the
//! linear energy model: the total energy `E(N)` and the electron density `rho_N(r)`
//! are interpolated piecewise-linearly through the reference points
//! `N0 - 1`, `N0` and `N0 + 1`.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Validation of reference data, the tagged
//!   [`core::value::ModelValue`] result, error types, and the advisory diagnostics
//!   channel for evaluations outside the interpolation region.
//!
//! - **[`models`]: The Public API.** [`models::global::LinearGlobalModel`] for scalar
//!   descriptors (chemical potentials, ionization potential, electron affinity, ...)
//!   and [`models::local::LinearLocalModel`] for density, Fukui functions and local
//!   softness sampled on any fixed set of points.
//!
//! Energies and densities are plain numbers supplied by the caller; no file
//! formats are read or written here.

pub mod core;
pub mod models;
