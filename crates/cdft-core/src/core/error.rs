use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// The reference data handed to a model constructor cannot define a
    /// three-point linear model.
    #[error("Invalid model input: {0}")]
    InvalidModelInput(String),

    /// A query argument lies outside the domain of the model.
    #[error("Domain error: {0}")]
    Domain(String),
}

impl ModelError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidModelInput(message.into())
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

/// Checks that an electron count is a finite, non-negative number.
pub(crate) fn check_electron_count(n_elec: f64) -> Result<()> {
    if !n_elec.is_finite() {
        return Err(ModelError::domain(format!(
            "Number of electrons should be a finite number! n_elec={n_elec}"
        )));
    }
    if n_elec < 0.0 {
        return Err(ModelError::domain(format!(
            "Number of electrons cannot be negative! n_elec={n_elec}"
        )));
    }
    Ok(())
}
