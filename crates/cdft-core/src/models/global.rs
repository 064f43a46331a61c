use super::traits::GlobalModel;
use crate::core::diagnostics::{DiagnosticReporter, Quantity};
use crate::core::error::{ModelError, Result, check_electron_count};
use crate::core::validation::{ReferenceTriple, validate_physical_triple};
use crate::core::value::{ModelValue, Side};
use serde::Serialize;
use tracing::debug;

/// Coefficients of the two linear segments of `E(N)`.
///
/// `E(N) = a + b N` for `N <= N0` and `E(N) = a_prime + b_prime N` for `N >= N0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinearParameters {
    pub a: f64,
    pub b: f64,
    pub a_prime: f64,
    pub b_prime: f64,
}

impl LinearParameters {
    fn from_reference(reference: &ReferenceTriple<f64>) -> Self {
        let n0 = reference.n0;
        let b = reference.zero - reference.minus;
        let b_prime = reference.plus - reference.zero;
        Self {
            a: reference.zero - n0 * b,
            b,
            a_prime: reference.zero - n0 * b_prime,
            b_prime,
        }
    }
}

/// Piecewise-linear energy model interpolating `E(N0 - 1)`, `E(N0)` and `E(N0 + 1)`.
///
/// The model is continuous at `N0` but not differentiable there, so the chemical
/// potential splits into a value from below ([`mu_minus`](Self::mu_minus)), from
/// above ([`mu_plus`](Self::mu_plus)) and their average ([`mu_zero`](Self::mu_zero)).
#[derive(Debug, Clone)]
pub struct LinearGlobalModel {
    reference: ReferenceTriple<f64>,
    params: LinearParameters,
    n_max: Option<f64>,
    ip: f64,
    ea: f64,
    reporter: DiagnosticReporter,
}

impl LinearGlobalModel {
    /// Builds the model from `(electron count, energy)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidModelInput`] unless exactly three energies at
    /// consecutive, non-negative electron counts with `N0 >= 1` are given.
    pub fn new<I>(energies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let reference = validate_physical_triple(energies)?;
        let params = LinearParameters::from_reference(&reference);
        let n_max = (reference.zero < reference.plus).then_some(reference.n0);
        let ip = reference.minus - reference.zero;
        let ea = reference.zero - reference.plus;

        debug!(
            "Linear energy model built at N0={} with parameters {:?}, N_max={:?}.",
            reference.n0, params, n_max
        );

        Ok(Self {
            reference,
            params,
            n_max,
            ip,
            ea,
            reporter: DiagnosticReporter::new(),
        })
    }

    /// Routes out-of-range notices to `reporter` in addition to the log.
    pub fn with_reporter(mut self, reporter: DiagnosticReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn parameters(&self) -> &LinearParameters {
        &self.params
    }

    pub fn reference(&self) -> &ReferenceTriple<f64> {
        &self.reference
    }

    /// Chemical potential from below, `E(N0) - E(N0 - 1) = -IP`.
    pub fn mu_minus(&self) -> f64 {
        -self.ip
    }

    /// Chemical potential from above, `E(N0 + 1) - E(N0) = -EA`.
    pub fn mu_plus(&self) -> f64 {
        -self.ea
    }

    /// Average of the one-sided chemical potentials, `-(IP + EA) / 2`.
    pub fn mu_zero(&self) -> f64 {
        -0.5 * (self.ip + self.ea)
    }

    fn checked(&self, quantity: Quantity, n_elec: f64) -> Result<f64> {
        check_electron_count(n_elec)?;
        self.reporter
            .check_interpolation_region(quantity, n_elec, self.reference.n0);
        Ok(n_elec)
    }
}

impl GlobalModel for LinearGlobalModel {
    fn n0(&self) -> f64 {
        self.reference.n0
    }

    fn n_max(&self) -> Option<f64> {
        self.n_max
    }

    fn energy(&self, n_elec: Option<f64>) -> Result<ModelValue> {
        let Some(n_elec) = n_elec else {
            return Ok(ModelValue::Undefined);
        };
        let n_elec = self.checked(Quantity::Energy, n_elec)?;
        let p = &self.params;
        let value = match Side::locate(n_elec, self.reference.n0) {
            Side::Below | Side::Reference => p.a + p.b * n_elec,
            Side::Above => p.a_prime + p.b_prime * n_elec,
        };
        Ok(ModelValue::Defined(value))
    }

    fn energy_derivative(&self, n_elec: Option<f64>, order: u32) -> Result<ModelValue> {
        let Some(n_elec) = n_elec else {
            return Ok(ModelValue::Undefined);
        };
        let n_elec = self.checked(Quantity::EnergyDerivative, n_elec)?;
        if order == 0 {
            return Err(ModelError::Domain(
                "Argument order should be an integer greater than or equal to 1.".to_string(),
            ));
        }
        let deriv = match Side::locate(n_elec, self.reference.n0) {
            Side::Reference => ModelValue::Undefined,
            _ if order >= 2 => ModelValue::Defined(0.0),
            Side::Below => ModelValue::Defined(self.params.b),
            Side::Above => ModelValue::Defined(self.params.b_prime),
        };
        Ok(deriv)
    }

    fn ionization_potential(&self) -> Result<ModelValue> {
        Ok(ModelValue::Defined(self.ip))
    }

    fn electron_affinity(&self) -> Result<ModelValue> {
        Ok(ModelValue::Defined(self.ea))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::DiagnosticCollector;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn scenario_model() -> LinearGlobalModel {
        LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -15.5)]).unwrap()
    }

    fn defined(value: ModelValue) -> f64 {
        value.value().expect("value should be defined")
    }

    #[test]
    fn parameters_match_hand_computed_coefficients() {
        let model = scenario_model();
        assert_eq!(
            *model.parameters(),
            LinearParameters {
                a: -10.0,
                b: -1.0,
                a_prime: -12.5,
                b_prime: -0.5,
            }
        );
        assert_eq!(model.n0(), 5.0);
    }

    #[test]
    fn chemical_potentials_follow_physical_sign_convention() {
        let model = scenario_model();
        assert!(f64_approx_equal(model.mu_minus(), -1.0));
        assert!(f64_approx_equal(model.mu_plus(), -0.5));
        assert!(f64_approx_equal(model.mu_zero(), -0.75));
        assert_eq!(model.mu_zero(), (model.mu_plus() + model.mu_minus()) / 2.0);
    }

    #[test]
    fn ionization_potential_and_electron_affinity_are_energy_differences() {
        let model = scenario_model();
        assert_eq!(model.ionization_potential().unwrap(), ModelValue::Defined(1.0));
        assert_eq!(model.electron_affinity().unwrap(), ModelValue::Defined(0.5));
    }

    #[test]
    fn energy_reproduces_reference_points() {
        let model = scenario_model();
        assert!(f64_approx_equal(defined(model.energy(Some(4.0)).unwrap()), -14.0));
        assert_eq!(model.energy(Some(5.0)).unwrap(), ModelValue::Defined(-15.0));
        assert!(f64_approx_equal(defined(model.energy(Some(6.0)).unwrap()), -15.5));
    }

    #[test]
    fn energy_interpolates_within_each_segment() {
        let model = scenario_model();
        assert!(f64_approx_equal(defined(model.energy(Some(4.5)).unwrap()), -14.5));
        assert!(f64_approx_equal(defined(model.energy(Some(5.5)).unwrap()), -15.25));
    }

    #[test]
    fn energy_is_continuous_at_reference_for_both_segments() {
        let model = LinearGlobalModel::new([(9.0, -99.1), (10.0, -100.3), (11.0, -100.2)]).unwrap();
        let p = model.parameters();
        let e0 = model.reference().zero;
        assert!(f64_approx_equal(p.a + p.b * 10.0, e0));
        assert!(f64_approx_equal(p.a_prime + p.b_prime * 10.0, e0));
    }

    #[test]
    fn energy_of_absent_count_is_undefined() {
        let model = scenario_model();
        assert_eq!(model.energy(None).unwrap(), ModelValue::Undefined);
        assert_eq!(model.energy_derivative(None, 1).unwrap(), ModelValue::Undefined);
    }

    #[test]
    fn energy_rejects_negative_electron_count() {
        let model = scenario_model();
        assert!(matches!(model.energy(Some(-1.0)), Err(ModelError::Domain(_))));
        assert!(matches!(
            model.energy_derivative(Some(-0.5), 1),
            Err(ModelError::Domain(_))
        ));
    }

    #[test]
    fn energy_extrapolates_above_range_with_a_diagnostic() {
        let collector = DiagnosticCollector::new();
        let model = scenario_model().with_reporter(collector.reporter());

        let value = defined(model.energy(Some(7.5)).unwrap());
        assert!(f64_approx_equal(value, -12.5 - 0.5 * 7.5));

        let diagnostics = collector.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].quantity, Quantity::Energy);
        assert_eq!(diagnostics[0].n_elec, 7.5);
        assert_eq!((diagnostics[0].lower, diagnostics[0].upper), (4.0, 6.0));
    }

    #[test]
    fn energy_within_range_emits_no_diagnostic() {
        let collector = DiagnosticCollector::new();
        let model = scenario_model().with_reporter(collector.reporter());
        for n in [4.0, 4.5, 5.0, 5.5, 6.0] {
            model.energy(Some(n)).unwrap();
            model.energy_derivative(Some(n), 1).unwrap();
        }
        assert!(collector.is_empty());
    }

    #[test]
    fn energy_derivative_is_undefined_at_reference() {
        let model = scenario_model();
        for order in 1..5 {
            assert_eq!(
                model.energy_derivative(Some(5.0), order).unwrap(),
                ModelValue::Undefined
            );
        }
    }

    #[test]
    fn energy_derivative_returns_segment_slopes() {
        let model = scenario_model();
        assert_eq!(model.energy_derivative(Some(4.2), 1).unwrap(), ModelValue::Defined(-1.0));
        assert_eq!(model.energy_derivative(Some(5.8), 1).unwrap(), ModelValue::Defined(-0.5));
        assert_eq!(model.energy_derivative(Some(1.0), 1).unwrap(), ModelValue::Defined(-1.0));
    }

    #[test]
    fn higher_energy_derivatives_vanish_away_from_reference() {
        let model = scenario_model();
        for n in [0.0, 4.0, 4.9, 5.1, 6.0, 12.0] {
            assert_eq!(model.energy_derivative(Some(n), 2).unwrap(), ModelValue::Defined(0.0));
            assert_eq!(model.energy_derivative(Some(n), 3).unwrap(), ModelValue::Defined(0.0));
        }
    }

    #[test]
    fn energy_derivative_rejects_zero_order() {
        let model = scenario_model();
        assert!(matches!(
            model.energy_derivative(Some(4.5), 0),
            Err(ModelError::Domain(_))
        ));
    }

    #[test]
    fn derivative_reports_out_of_range_diagnostic() {
        let collector = DiagnosticCollector::new();
        let model = scenario_model().with_reporter(collector.reporter());
        model.energy_derivative(Some(2.0), 1).unwrap();
        let diagnostics = collector.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].quantity, Quantity::EnergyDerivative);
    }

    #[test]
    fn n_max_equals_reference_only_when_anion_is_higher_in_energy() {
        let stable_anion = scenario_model();
        assert_eq!(stable_anion.n_max(), None);

        let unstable_anion =
            LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -14.2)]).unwrap();
        assert_eq!(unstable_anion.n_max(), Some(5.0));
    }

    #[test]
    fn descriptors_undefined_at_the_kink() {
        let model = scenario_model();
        assert_eq!(model.chemical_potential().unwrap(), ModelValue::Undefined);
        assert_eq!(model.electronegativity().unwrap(), ModelValue::Undefined);
        assert_eq!(model.chemical_hardness().unwrap(), ModelValue::Undefined);
        assert_eq!(model.softness().unwrap(), ModelValue::Undefined);
        assert_eq!(model.hyper_hardness(2).unwrap(), ModelValue::Undefined);
    }

    #[test]
    fn hyper_hardness_requires_order_of_at_least_two() {
        let model = scenario_model();
        assert!(matches!(model.hyper_hardness(1), Err(ModelError::Domain(_))));
    }

    #[test]
    fn n_max_dependent_descriptors_without_n_max_are_undefined() {
        let model = scenario_model();
        assert_eq!(model.electrophilicity().unwrap(), ModelValue::Undefined);
        assert_eq!(model.nucleofugality().unwrap(), ModelValue::Undefined);
        assert_eq!(model.electrofugality().unwrap(), ModelValue::Undefined);
    }

    #[test]
    fn n_max_dependent_descriptors_use_reference_energy() {
        let model = LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -14.2)]).unwrap();
        assert_eq!(model.electrophilicity().unwrap(), ModelValue::Defined(0.0));
        assert!(f64_approx_equal(defined(model.nucleofugality().unwrap()), 0.8));
        assert!(f64_approx_equal(defined(model.electrofugality().unwrap()), 1.0));
    }

    #[test]
    fn repeated_queries_are_bit_identical() {
        let model = scenario_model();
        for n in [3.3, 5.0, 5.7, 9.1] {
            let first = model.energy(Some(n)).unwrap();
            let second = model.energy(Some(n)).unwrap();
            assert_eq!(first.value().map(f64::to_bits), second.value().map(f64::to_bits));
        }
    }

    #[test]
    fn construction_rejects_invalid_triples() {
        assert!(matches!(
            LinearGlobalModel::new([(1.0, 0.0), (3.0, 1.0)]),
            Err(ModelError::InvalidModelInput(_))
        ));
        assert!(matches!(
            LinearGlobalModel::new([(1.0, 0.0), (2.0, 1.0), (4.0, 1.0)]),
            Err(ModelError::InvalidModelInput(_))
        ));
    }

    #[test]
    fn construction_rejects_non_positive_reference() {
        assert!(matches!(
            LinearGlobalModel::new([(-3.0, 1.0), (-2.0, 0.5), (-1.0, 0.7)]),
            Err(ModelError::InvalidModelInput(_))
        ));
        assert!(matches!(
            LinearGlobalModel::new([(-1.0, 0.0), (0.0, -0.5), (1.0, -0.7)]),
            Err(ModelError::InvalidModelInput(_))
        ));
        assert!(matches!(
            LinearGlobalModel::new([(-0.5, 0.0), (0.5, -0.5), (1.5, -0.7)]),
            Err(ModelError::InvalidModelInput(_))
        ));
    }

    #[test]
    fn construction_accepts_single_electron_reference() {
        let model = LinearGlobalModel::new([(0.0, 0.0), (1.0, -0.5), (2.0, -0.7)]).unwrap();
        assert_eq!(model.n0(), 1.0);
        assert_eq!(model.energy(Some(0.0)).unwrap(), ModelValue::Defined(0.0));
    }
}
