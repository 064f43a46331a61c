//! # Core Module
//!
//! Shared building blocks of the reactivity models: input validation of the
//! three reference points, the tagged scalar result type, error types, and the
//! advisory diagnostics channel used for out-of-range evaluations.
//!
//! - [`validation`] - Ordering and checking of `{N0 - 1, N0, N0 + 1}` reference data
//! - [`value`] - [`value::ModelValue`] and the three-way [`value::Side`] dispatch
//! - [`diagnostics`] - Non-fatal extrapolation notices and their sinks
//! - [`error`] - [`error::ModelError`] and the crate-wide `Result` alias

pub mod diagnostics;
pub mod error;
pub mod validation;
pub mod value;
