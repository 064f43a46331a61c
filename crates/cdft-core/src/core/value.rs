use std::fmt;

/// Position of an electron count relative to the reference count `N0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Below,
    Reference,
    Above,
}

impl Side {
    #[inline]
    pub fn locate(n_elec: f64, n0: f64) -> Self {
        if n_elec < n0 {
            Side::Below
        } else if n_elec > n0 {
            Side::Above
        } else {
            Side::Reference
        }
    }
}

/// A scalar model quantity that may not exist.
///
/// Piecewise-linear models are not differentiable at the reference point, and
/// several derived descriptors inherit that gap. `Undefined` keeps such cases
/// out of downstream arithmetic instead of encoding them as a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelValue {
    Defined(f64),
    Undefined,
}

impl ModelValue {
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            ModelValue::Defined(v) => Some(v),
            ModelValue::Undefined => None,
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        matches!(self, ModelValue::Defined(_))
    }

    #[inline]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            ModelValue::Defined(v) => ModelValue::Defined(f(v)),
            ModelValue::Undefined => ModelValue::Undefined,
        }
    }

    /// Combines two values, yielding `Undefined` if either operand is.
    #[inline]
    pub fn zip_with(self, other: Self, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (ModelValue::Defined(a), ModelValue::Defined(b)) => ModelValue::Defined(f(a, b)),
            _ => ModelValue::Undefined,
        }
    }
}

impl From<Option<f64>> for ModelValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(ModelValue::Undefined, ModelValue::Defined)
    }
}

impl From<f64> for ModelValue {
    fn from(value: f64) -> Self {
        ModelValue::Defined(value)
    }
}

impl fmt::Display for ModelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelValue::Defined(v) => fmt::Display::fmt(v, f),
            ModelValue::Undefined => f.pad("undefined"),
        }
    }
}
