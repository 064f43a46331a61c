use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Energy,
    EnergyDerivative,
    Density,
    FukuiFunction,
    LocalSoftness,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Energy => "Energy",
            Quantity::EnergyDerivative => "Energy derivative",
            Quantity::Density => "Electron density",
            Quantity::FukuiFunction => "Fukui function",
            Quantity::LocalSoftness => "Local softness",
        };
        f.write_str(name)
    }
}

/// A quantity was evaluated outside the interpolation region `[lower, upper]`.
///
/// The computation still returns the extrapolated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub quantity: Quantity,
    pub n_elec: f64,
    pub lower: f64,
    pub upper: f64,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} evaluated for n_elec={} outside of interpolation region [{}, {}].",
            self.quantity, self.n_elec, self.lower, self.upper
        )
    }
}

pub type DiagnosticCallback = Arc<dyn Fn(&Diagnostic) + Send + Sync>;

#[derive(Clone, Default)]
pub struct DiagnosticReporter {
    callback: Option<DiagnosticCallback>,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: DiagnosticCallback) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    /// Logs the diagnostic and forwards it to the callback, if any.
    #[inline]
    pub fn report(&self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        if let Some(cb) = &self.callback {
            cb(&diagnostic);
        }
    }

    /// Reports a diagnostic when `n_elec` lies outside `[n0 - 1, n0 + 1]`.
    pub(crate) fn check_interpolation_region(&self, quantity: Quantity, n_elec: f64, n0: f64) {
        let (lower, upper) = (n0 - 1.0, n0 + 1.0);
        if !(lower..=upper).contains(&n_elec) {
            self.report(Diagnostic {
                quantity,
                n_elec,
                lower,
                upper,
            });
        }
    }
}

impl fmt::Debug for DiagnosticReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticReporter")
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Thread-safe sink that keeps every reported diagnostic.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollector {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reporter(&self) -> DiagnosticReporter {
        let entries = Arc::clone(&self.entries);
        DiagnosticReporter::with_callback(Arc::new(move |diagnostic: &Diagnostic| {
            let Ok(mut guard) = entries.lock() else {
                warn!("Diagnostic collector mutex was poisoned. Dropping diagnostic.");
                return;
            };
            guard.push(diagnostic.clone());
        }))
    }

    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Removes and returns everything collected so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .map(|guard| guard.is_empty())
            .unwrap_or(true)
    }
}
