pub mod global;
pub mod local;

use cdft::core::diagnostics::DiagnosticCollector;

/// Prints a one-line note on stderr when any value had to be extrapolated.
pub(crate) fn summarize_diagnostics(collector: &DiagnosticCollector) {
    let diagnostics = collector.take();
    if !diagnostics.is_empty() {
        eprintln!(
            "Note: {} value(s) were extrapolated outside the interpolation region; \
             the linear model is only rigorous within [N0 - 1, N0 + 1].",
            diagnostics.len()
        );
    }
}
