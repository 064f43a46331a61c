mod file;

pub use file::{DensityFile, EnergyFile};

use crate::cli::{LocalArgs, LocalProperty};
use crate::error::{CliError, Result};
use nalgebra::DVector;
use std::fmt;
use tracing::debug;

/// Local property with every input it needs resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalQuantity {
    Density,
    FukuiFunction,
    Softness { global_softness: f64 },
}

impl fmt::Display for LocalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Density => write!(f, "Electron density"),
            Self::FukuiFunction => write!(f, "Fukui function"),
            Self::Softness { global_softness } => {
                write!(f, "Local softness (S = {global_softness})")
            }
        }
    }
}

/// Fully resolved request of the `local` command.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalJob {
    pub points: Vec<(f64, DVector<f64>)>,
    pub quantity: LocalQuantity,
    pub electrons: Option<f64>,
}

impl DensityFile {
    /// Merges the file with command-line overrides.
    ///
    /// `--global-softness` wins over the file value; the softness property
    /// fails without either.
    pub fn merge_with_cli(self, args: &LocalArgs) -> Result<LocalJob> {
        let global_softness = args.global_softness.or(self.global_softness);
        debug!(
            "Resolved global softness: {:?} (cli: {:?}, file: {:?})",
            global_softness, args.global_softness, self.global_softness
        );

        let quantity = match args.property {
            LocalProperty::Density => LocalQuantity::Density,
            LocalProperty::FukuiFunction => LocalQuantity::FukuiFunction,
            LocalProperty::Softness => LocalQuantity::Softness {
                global_softness: global_softness.ok_or_else(|| {
                    CliError::Argument(
                        "the softness property requires a global softness, \
                         given with --global-softness or `global-softness` in the input file"
                            .to_string(),
                    )
                })?,
            },
        };

        Ok(LocalJob {
            points: self.into_points()?,
            quantity,
            electrons: args.electrons,
        })
    }
}
