use super::global::{LinearGlobalModel, LinearParameters};
use super::traits::GlobalModel;
use crate::core::error::Result;
use serde::Serialize;

/// Snapshot of every global descriptor of a linear energy model.
///
/// Quantities the model leaves undefined are `None` and are omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalDescriptors {
    pub n0: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_max: Option<f64>,
    pub ionization_potential: f64,
    pub electron_affinity: f64,
    pub mu_minus: f64,
    pub mu_plus: f64,
    pub mu_zero: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_potential: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electronegativity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_hardness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub softness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrophilicity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nucleofugality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrofugality: Option<f64>,
    pub parameters: LinearParameters,
}

impl GlobalDescriptors {
    pub fn from_model(model: &LinearGlobalModel) -> Result<Self> {
        Ok(Self {
            n0: model.n0(),
            n_max: model.n_max(),
            ionization_potential: -model.mu_minus(),
            electron_affinity: -model.mu_plus(),
            mu_minus: model.mu_minus(),
            mu_plus: model.mu_plus(),
            mu_zero: model.mu_zero(),
            chemical_potential: model.chemical_potential()?.value(),
            electronegativity: model.electronegativity()?.value(),
            chemical_hardness: model.chemical_hardness()?.value(),
            softness: model.softness()?.value(),
            electrophilicity: model.electrophilicity()?.value(),
            nucleofugality: model.nucleofugality()?.value(),
            electrofugality: model.electrofugality()?.value(),
            parameters: *model.parameters(),
        })
    }

    /// Name/value rows in display order; undefined quantities are `None`.
    pub fn rows(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("N0", Some(self.n0)),
            ("N_max", self.n_max),
            ("Ionization potential", Some(self.ionization_potential)),
            ("Electron affinity", Some(self.electron_affinity)),
            ("Chemical potential (-)", Some(self.mu_minus)),
            ("Chemical potential (+)", Some(self.mu_plus)),
            ("Chemical potential (0)", Some(self.mu_zero)),
            ("Chemical potential", self.chemical_potential),
            ("Electronegativity", self.electronegativity),
            ("Chemical hardness", self.chemical_hardness),
            ("Softness", self.softness),
            ("Electrophilicity", self.electrophilicity),
            ("Nucleofugality", self.nucleofugality),
            ("Electrofugality", self.electrofugality),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_model_collects_linear_descriptors() {
        let model = LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -15.5)]).unwrap();
        let descriptors = GlobalDescriptors::from_model(&model).unwrap();

        assert_eq!(descriptors.n0, 5.0);
        assert_eq!(descriptors.n_max, None);
        assert_eq!(descriptors.ionization_potential, 1.0);
        assert_eq!(descriptors.electron_affinity, 0.5);
        assert_eq!(descriptors.mu_minus, -1.0);
        assert_eq!(descriptors.mu_plus, -0.5);
        assert_eq!(descriptors.mu_zero, -0.75);
        assert_eq!(descriptors.chemical_potential, None);
        assert_eq!(descriptors.chemical_hardness, None);
        assert_eq!(descriptors.electrophilicity, None);
    }

    #[test]
    fn from_model_fills_n_max_descriptors_when_available() {
        let model = LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -14.2)]).unwrap();
        let descriptors = GlobalDescriptors::from_model(&model).unwrap();

        assert_eq!(descriptors.n_max, Some(5.0));
        assert_eq!(descriptors.electrophilicity, Some(0.0));
        assert!(descriptors.nucleofugality.is_some());
        assert!(descriptors.electrofugality.is_some());
    }

    #[test]
    fn rows_keep_display_order_and_mark_undefined_values() {
        let model = LinearGlobalModel::new([(4.0, -14.0), (5.0, -15.0), (6.0, -15.5)]).unwrap();
        let rows = GlobalDescriptors::from_model(&model).unwrap().rows();

        assert_eq!(rows.first(), Some(&("N0", Some(5.0))));
        assert_eq!(rows[1], ("N_max", None));
        assert_eq!(rows.len(), 14);
    }
}
