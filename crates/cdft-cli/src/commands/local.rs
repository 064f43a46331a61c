use crate::cli::LocalArgs;
use crate::config::{DensityFile, LocalJob, LocalQuantity};
use crate::error::Result;
use crate::output;
use cdft::core::diagnostics::DiagnosticCollector;
use cdft::models::local::LinearLocalModel;
use cdft::models::traits::LocalModel;
use nalgebra::DVector;
use tracing::info;

pub fn run(args: LocalArgs) -> Result<()> {
    info!("Loading density samples from {:?}", &args.input);
    let job = DensityFile::from_file(&args.input)?.merge_with_cli(&args)?;

    let collector = DiagnosticCollector::new();
    let field = evaluate(&job, &collector)?;
    info!(
        "Evaluated {} at N = {:?} on {} points.",
        job.quantity,
        job.electrons,
        field.len()
    );

    let writer = output::open_writer(args.output.as_deref())?;
    output::write_field_csv(writer, &field)?;
    if let Some(path) = &args.output {
        println!("{} written to: {}", job.quantity, path.display());
    }

    super::summarize_diagnostics(&collector);
    Ok(())
}

fn evaluate(job: &LocalJob, collector: &DiagnosticCollector) -> Result<DVector<f64>> {
    let model =
        LinearLocalModel::new(job.points.iter().cloned())?.with_reporter(collector.reporter());
    let field = match job.quantity {
        LocalQuantity::Density => model.density(job.electrons)?,
        LocalQuantity::FukuiFunction => model.fukui_function(job.electrons)?,
        LocalQuantity::Softness { global_softness } => {
            model.softness(global_softness, job.electrons)?
        }
    };
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LocalProperty;
    use crate::error::CliError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    const DENSITIES: &str = r#"
        global-softness = 2.0

        [[density]]
        electrons = 9
        values = [1.0, 2.0, 3.0]

        [[density]]
        electrons = 10
        values = [2.0, 2.5, 3.5]

        [[density]]
        electrons = 11
        values = [2.5, 4.5, 4.5]
    "#;

    fn args(input: &Path, output: PathBuf, property: LocalProperty, n: Option<f64>) -> LocalArgs {
        LocalArgs {
            input: input.to_path_buf(),
            property,
            electrons: n,
            global_softness: None,
            output: Some(output),
        }
    }

    fn run_to_string(property: LocalProperty, n: Option<f64>) -> String {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rho.toml");
        let output = dir.path().join("out.csv");
        fs::write(&input, DENSITIES).unwrap();
        run(args(&input, output.clone(), property, n)).unwrap();
        fs::read_to_string(output).unwrap()
    }

    #[test]
    fn density_at_reference_reproduces_input() {
        let text = run_to_string(LocalProperty::Density, None);
        assert_eq!(text, "index,value\n0,2.0\n1,2.5\n2,3.5\n");
    }

    #[test]
    fn fukui_function_below_reference_uses_minus_branch() {
        let text = run_to_string(LocalProperty::FukuiFunction, Some(9.5));
        assert_eq!(text, "index,value\n0,1.0\n1,0.5\n2,0.5\n");
    }

    #[test]
    fn softness_uses_global_softness_from_file() {
        let text = run_to_string(LocalProperty::Softness, Some(10.5));
        assert_eq!(text, "index,value\n0,1.0\n1,4.0\n2,2.0\n");
    }

    #[test]
    fn evaluate_collects_extrapolation_diagnostics() {
        let job = LocalJob {
            points: vec![
                (1.0, DVector::from_vec(vec![0.0])),
                (2.0, DVector::from_vec(vec![1.0])),
                (3.0, DVector::from_vec(vec![1.5])),
            ],
            quantity: LocalQuantity::Density,
            electrons: Some(4.0),
        };
        let collector = DiagnosticCollector::new();
        let field = evaluate(&job, &collector).unwrap();
        assert_eq!(field, DVector::from_vec(vec![2.0]));
        assert_eq!(collector.snapshot().len(), 1);
    }

    #[test]
    fn evaluate_scales_fukui_function_by_resolved_softness() {
        let job = LocalJob {
            points: vec![
                (1.0, DVector::from_vec(vec![0.0])),
                (2.0, DVector::from_vec(vec![1.0])),
                (3.0, DVector::from_vec(vec![1.5])),
            ],
            quantity: LocalQuantity::Softness {
                global_softness: 4.0,
            },
            electrons: Some(2.5),
        };
        let field = evaluate(&job, &DiagnosticCollector::new()).unwrap();
        assert_eq!(field, DVector::from_vec(vec![2.0]));
    }

    #[test]
    fn softness_without_global_softness_fails_before_evaluation() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rho.toml");
        let output = dir.path().join("out.csv");
        fs::write(&input, DENSITIES.replace("global-softness = 2.0", "")).unwrap();
        let result = run(args(&input, output.clone(), LocalProperty::Softness, None));
        assert!(matches!(result, Err(CliError::Argument(_))));
        assert!(!output.exists());
    }

    #[test]
    fn evaluate_rejects_negative_electron_count() {
        let job = LocalJob {
            points: vec![
                (1.0, DVector::from_vec(vec![0.0])),
                (2.0, DVector::from_vec(vec![1.0])),
                (3.0, DVector::from_vec(vec![1.5])),
            ],
            quantity: LocalQuantity::FukuiFunction,
            electrons: Some(-2.0),
        };
        let result = evaluate(&job, &DiagnosticCollector::new());
        assert!(matches!(result, Err(CliError::Model(_))));
    }
}
