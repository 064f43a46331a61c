//! # Models Module
//!
//! Linear conceptual DFT reactivity models.
//!
//! - [`global`] - Piecewise-linear `E(N)` and its chemical potentials
//! - [`local`] - Piecewise-linear `rho_N(r)`, Fukui functions and local softness
//! - [`traits`] - [`traits::GlobalModel`] with the derived descriptor family, and [`traits::LocalModel`]
//! - [`descriptors`] - Serializable summary of all global descriptors
//!
//! ```
//! use cdft::models::global::LinearGlobalModel;
//! use cdft::models::traits::GlobalModel;
//!
//! let model = LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -15.5)])?;
//! assert_eq!(model.mu_minus(), -1.0);
//! assert_eq!(model.energy(Some(5.0))?.value(), Some(-15.0));
//! # Ok::<(), cdft::core::error::ModelError>(())
//! ```

pub mod descriptors;
pub mod global;
pub mod local;
pub mod traits;
