use crate::error::{CliError, Result};
use nalgebra::DVector;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnergyEntry {
    pub electrons: f64,
    pub value: f64,
}

/// Energies at three consecutive electron counts, as produced upstream.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EnergyFile {
    pub energy: Vec<EnergyEntry>,
}

impl EnergyFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let parsed: Self = read_toml(path)?;
        debug!("Read {} energy entries from {:?}", parsed.energy.len(), path);
        Ok(parsed)
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.energy.iter().map(|e| (e.electrons, e.value)).collect()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DensityEntry {
    pub electrons: f64,
    pub values: Vec<f64>,
}

/// Density samples at three consecutive electron counts on a shared set of points.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DensityFile {
    pub global_softness: Option<f64>,
    pub density: Vec<DensityEntry>,
    #[serde(skip)]
    path: PathBuf,
}

impl DensityFile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut parsed: Self = read_toml(path)?;
        parsed.path = path.to_path_buf();
        debug!(
            "Read {} density entries from {:?}",
            parsed.density.len(),
            path
        );
        Ok(parsed)
    }

    /// Converts the entries into model input, rejecting fields of unequal length.
    pub fn into_points(self) -> Result<Vec<(f64, DVector<f64>)>> {
        let mut lengths = self.density.iter().map(|d| d.values.len());
        if let Some(first) = lengths.next() {
            if lengths.any(|len| len != first) {
                return Err(CliError::InvalidInput {
                    path: self.path,
                    message: "all density entries must have the same number of values".to_string(),
                });
            }
        }
        Ok(self
            .density
            .into_iter()
            .map(|d| (d.electrons, DVector::from_vec(d.values)))
            .collect())
    }
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::InputParse {
        path: path.to_path_buf(),
        source,
    })
}
