use crate::core::error::{ModelError, Result};
use crate::core::value::ModelValue;
use nalgebra::DVector;

/// Interface of a global (scalar) energy model `E(N)`.
///
/// Implementors supply the energy and its derivatives; the reactivity
/// descriptors below are derived from those in a model-independent way.
pub trait GlobalModel {
    /// Reference number of electrons `N0`.
    fn n0(&self) -> f64;

    /// Number of electrons that minimizes the model energy, if it exists.
    fn n_max(&self) -> Option<f64>;

    /// Evaluates `E(N)`. `None` yields [`ModelValue::Undefined`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] for a negative or non-finite `N`.
    fn energy(&self, n_elec: Option<f64>) -> Result<ModelValue>;

    /// Evaluates the `order`-th derivative of `E(N)` w.r.t. `N`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Domain`] for a negative or non-finite `N`, or
    /// for `order == 0`.
    fn energy_derivative(&self, n_elec: Option<f64>, order: u32) -> Result<ModelValue>;

    /// `IP = E(N0 - 1) - E(N0)`.
    fn ionization_potential(&self) -> Result<ModelValue> {
        let n0 = self.n0();
        let e_minus = self.energy(Some(n0 - 1.0))?;
        let e_zero = self.energy(Some(n0))?;
        Ok(e_minus.zip_with(e_zero, |m, z| m - z))
    }

    /// `EA = E(N0) - E(N0 + 1)`.
    fn electron_affinity(&self) -> Result<ModelValue> {
        let n0 = self.n0();
        let e_zero = self.energy(Some(n0))?;
        let e_plus = self.energy(Some(n0 + 1.0))?;
        Ok(e_zero.zip_with(e_plus, |z, p| z - p))
    }

    fn chemical_potential(&self) -> Result<ModelValue> {
        self.energy_derivative(Some(self.n0()), 1)
    }

    fn electronegativity(&self) -> Result<ModelValue> {
        Ok(self.chemical_potential()?.map(|mu| -mu))
    }

    fn chemical_hardness(&self) -> Result<ModelValue> {
        self.energy_derivative(Some(self.n0()), 2)
    }

    /// Global softness `S = 1 / eta`; undefined for zero or undefined hardness.
    fn softness(&self) -> Result<ModelValue> {
        Ok(match self.chemical_hardness()? {
            ModelValue::Defined(eta) if eta != 0.0 => ModelValue::Defined(1.0 / eta),
            _ => ModelValue::Undefined,
        })
    }

    /// Derivative of order `order + 1` of `E(N)` at `N0`; `order` starts at 2.
    fn hyper_hardness(&self, order: u32) -> Result<ModelValue> {
        if order < 2 {
            return Err(ModelError::Domain(format!(
                "Argument order should be an integer greater than or equal to 2! order={order}"
            )));
        }
        self.energy_derivative(Some(self.n0()), order + 1)
    }

    /// `sign(N0 - N_max) * (E(N0) - E(N_max))`.
    fn electrophilicity(&self) -> Result<ModelValue> {
        let n0 = self.n0();
        relative_to_n_max(self, n0, |n_max| n0 - n_max)
    }

    /// `sign(N0 + 1 - N_max) * (E(N0 + 1) - E(N_max))`.
    fn nucleofugality(&self) -> Result<ModelValue> {
        let n0 = self.n0();
        relative_to_n_max(self, n0 + 1.0, |n_max| n0 + 1.0 - n_max)
    }

    /// `sign(N_max - N0 + 1) * (E(N0 - 1) - E(N_max))`.
    fn electrofugality(&self) -> Result<ModelValue> {
        let n0 = self.n0();
        relative_to_n_max(self, n0 - 1.0, |n_max| n_max - n0 + 1.0)
    }
}

/// Signed energy difference `E(n_elec) - E(N_max)`, undefined without `N_max`.
/// The sign is that of `sign_arg(N_max)`, with zero counted as positive.
fn relative_to_n_max<M, F>(model: &M, n_elec: f64, sign_arg: F) -> Result<ModelValue>
where
    M: GlobalModel + ?Sized,
    F: FnOnce(f64) -> f64,
{
    let Some(n_max) = model.n_max() else {
        return Ok(ModelValue::Undefined);
    };
    let value = model
        .energy(Some(n_elec))?
        .zip_with(model.energy(Some(n_max))?, |e, e_max| e - e_max);
    let sign = 1.0_f64.copysign(sign_arg(n_max));
    Ok(value.map(|v| sign * v))
}

/// Interface of a local (spatially resolved) model built on density samples.
pub trait LocalModel {
    fn n0(&self) -> f64;

    /// Electron density of the `N`-electron system; `None` selects `N0`.
    fn density(&self, n_elec: Option<f64>) -> Result<DVector<f64>>;

    /// Fukui function of the `N`-electron system; `None` selects `N0`.
    fn fukui_function(&self, n_elec: Option<f64>) -> Result<DVector<f64>>;

    /// Local softness `S * f_N(r)`.
    fn softness(&self, global_softness: f64, n_elec: Option<f64>) -> Result<DVector<f64>>;
}
