use super::traits::LocalModel;
use crate::core::diagnostics::{DiagnosticReporter, Quantity};
use crate::core::error::{ModelError, Result, check_electron_count};
use crate::core::validation::validate_physical_triple;
use crate::core::value::Side;
use nalgebra::DVector;
use tracing::debug;

/// Linear local reactivity model built from densities at `N0 - 1`, `N0` and `N0 + 1`.
///
/// Fukui functions are the one-sided finite differences of the densities:
/// `f- = rho(N0) - rho(N0 - 1)`, `f+ = rho(N0 + 1) - rho(N0)` and
/// `f0 = (f+ + f-) / 2`. All fields are computed once at construction and every
/// query returns a freshly allocated vector.
#[derive(Debug, Clone)]
pub struct LinearLocalModel {
    n0: f64,
    density_zero: DVector<f64>,
    ff_minus: DVector<f64>,
    ff_plus: DVector<f64>,
    ff_zero: DVector<f64>,
    reporter: DiagnosticReporter,
}

impl LinearLocalModel {
    /// Builds the model from `(electron count, density samples)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidModelInput`] unless exactly three
    /// non-negative, consecutive electron counts with `N0 >= 1` are given and
    /// all three fields are sampled on the same number of points.
    pub fn new<I>(densities: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, DVector<f64>)>,
    {
        let reference = validate_physical_triple(densities)?;
        let len = reference.zero.len();
        if reference.minus.len() != len || reference.plus.len() != len {
            return Err(ModelError::invalid_input(format!(
                "Densities should be sampled on the same points! Given lengths {:?}",
                [reference.minus.len(), len, reference.plus.len()]
            )));
        }
        let ff_minus = &reference.zero - &reference.minus;
        let ff_plus = &reference.plus - &reference.zero;
        let ff_zero = (&reference.plus - &reference.minus) * 0.5;

        debug!(
            "Linear local model built at N0={} on {} sample points.",
            reference.n0,
            reference.zero.len()
        );

        Ok(Self {
            n0: reference.n0,
            density_zero: reference.zero,
            ff_minus,
            ff_plus,
            ff_zero,
            reporter: DiagnosticReporter::new(),
        })
    }

    /// Routes out-of-range notices to `reporter` in addition to the log.
    pub fn with_reporter(mut self, reporter: DiagnosticReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn density_zero(&self) -> &DVector<f64> {
        &self.density_zero
    }

    /// Fukui function from below, `rho(N0) - rho(N0 - 1)`.
    pub fn ff_minus(&self) -> &DVector<f64> {
        &self.ff_minus
    }

    /// Fukui function from above, `rho(N0 + 1) - rho(N0)`.
    pub fn ff_plus(&self) -> &DVector<f64> {
        &self.ff_plus
    }

    /// Averaged Fukui function, `(rho(N0 + 1) - rho(N0 - 1)) / 2`.
    pub fn ff_zero(&self) -> &DVector<f64> {
        &self.ff_zero
    }

    /// Validates `n_elec` and locates it; `None` stands for `N0`.
    fn locate(&self, quantity: Quantity, n_elec: Option<f64>) -> Result<(Side, f64)> {
        let Some(n_elec) = n_elec else {
            return Ok((Side::Reference, self.n0));
        };
        check_electron_count(n_elec)?;
        self.reporter
            .check_interpolation_region(quantity, n_elec, self.n0);
        Ok((Side::locate(n_elec, self.n0), n_elec))
    }

    fn select_fukui(&self, side: Side) -> &DVector<f64> {
        match side {
            Side::Below => &self.ff_minus,
            Side::Reference => &self.ff_zero,
            Side::Above => &self.ff_plus,
        }
    }
}

impl LocalModel for LinearLocalModel {
    fn n0(&self) -> f64 {
        self.n0
    }

    fn density(&self, n_elec: Option<f64>) -> Result<DVector<f64>> {
        let (side, n_elec) = self.locate(Quantity::Density, n_elec)?;
        let rho = match side {
            Side::Reference => self.density_zero.clone(),
            Side::Below => &self.density_zero + &self.ff_minus * (n_elec - self.n0),
            Side::Above => &self.density_zero + &self.ff_plus * (n_elec - self.n0),
        };
        Ok(rho)
    }

    fn fukui_function(&self, n_elec: Option<f64>) -> Result<DVector<f64>> {
        let (side, _) = self.locate(Quantity::FukuiFunction, n_elec)?;
        Ok(self.select_fukui(side).clone())
    }

    fn softness(&self, global_softness: f64, n_elec: Option<f64>) -> Result<DVector<f64>> {
        let (side, _) = self.locate(Quantity::LocalSoftness, n_elec)?;
        Ok(self.select_fukui(side) * global_softness)
    }
}
